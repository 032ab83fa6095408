//! Building sequences from scratch
//!
//! This module provides the two ways into a [`Seq`](crate::Seq): wrapping a standard
//! iterable with [`iter`], or producing values from a closure or a constant.

mod func;
mod source;

// Re-export building blocks
pub use func::{Empty, FromFn, Once, Repeat, empty, from_fn, once, repeat};
pub use source::{IterCursor, iter};
