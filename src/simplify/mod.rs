//! Single-pass algebraic simplification.

mod rules;

pub use rules::simplify;
