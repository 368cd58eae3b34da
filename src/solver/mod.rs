//! Exhaustive search for expressions reaching the target value

pub mod constants;
mod core;
mod errors;

pub use core::{Solution, Solver};
pub use errors::SolverError;

#[cfg(test)]
mod tests;
