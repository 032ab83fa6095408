//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Cursor, Maybe, Outcome, Seq, Step};

// Most common constructors
pub use crate::build::{empty, from_fn, iter, once, repeat};

// Ranges
pub use crate::range::{RangeBuilder, range, range_between};

// Helpers
pub use crate::numeric::{compare_numbers, parse_integral};
