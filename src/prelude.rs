//! String-based convenience API for quick experimentation.

pub use crate::ui::{diff, differentiate, parse, simp, simplify};
