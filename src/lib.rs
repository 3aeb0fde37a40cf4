pub mod input;
pub mod utils;

pub mod y2020;
pub mod y2021;
pub mod y2023;

mod registry;

pub use crate::input::Inputs;
pub use crate::registry::{days, find, years, Puzzle, Solver, PUZZLES};
