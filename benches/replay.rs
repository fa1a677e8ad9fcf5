use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use lib::checkers::Tower;
use lib::notation::Grammar;
use lib::rules::Game;

const WHITE: &str = "a1_w a3_w b2_w c1_w c3_w d2_w e1_w e3_w f2_w g1_w g3_w h2_w";
const BLACK: &str = "a7_b b6_b b8_b c7_b d6_b d8_b e7_b f6_b f8_b g7_b h6_b h8_b";

fn replay(c: &mut Criterion) {
    let turns = [
        "c3_w-d4_w f6_b-e5_b",
        "d4_w:f6_wb g7_b:e5_bw",
        "g3_w-h4_w e5_bw-f4_bw",
        "e3_w:g5_wb b6_b-a5_b",
    ];

    c.benchmark_group("benches")
        .bench_function("replay/opening", |b| {
            b.iter_batched(
                || Game::new(Grammar::default(), WHITE, BLACK).unwrap(),
                |game: Game| game.run(turns),
                BatchSize::SmallInput,
            );
        })
        .bench_function("replay/setup", |b| {
            b.iter(|| Game::<Tower>::new(Grammar::default(), WHITE, BLACK))
        });
}

criterion_group!(benches, replay);
criterion_main!(benches);
