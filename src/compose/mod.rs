//! Deriving sequences from sequences
//!
//! Each adapter here owns its parent cursor plus whatever local state it needs, and
//! does no work until it is pulled.

mod chain;
mod filter;
mod map;
mod take;

// Re-export adapters
pub use chain::{Chain, Zip};
pub use filter::{Filter, FilterMap};
pub use map::{Enumerate, Inspect, Map};
pub use take::{Skip, Take};
