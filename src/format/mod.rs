//! Presentation formatting for solved expressions

mod trim;

pub use trim::trim_outer_parens;
