//! Board access for teardrop passes
//!
//! # Submodules
//! - `host` - The `BoardHost` capability the teardrop runners operate on
//! - `memory` - JSON-backed in-memory board implementing `BoardHost`

mod host;
mod memory;

pub use host::BoardHost;
pub use memory::{Board, BoardFile};
