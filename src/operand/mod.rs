//! Operand module: an exact value paired with the expression that produced it

mod core;

pub use core::Operand;
