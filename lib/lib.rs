/// Board geometry, units and towers.
pub mod checkers;
/// Position tokens, moves and turns.
pub mod notation;
/// Validation and execution of turns.
pub mod rules;
