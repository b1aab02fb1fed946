//! Calculus operations over expression trees.

mod differentiate;

pub use differentiate::differentiate;
