//! Handler module declarations and re-exports

pub mod file;
pub mod query;
pub mod selection;
pub mod teardrops;

// Re-export all handlers for convenient access
pub use file::*;
pub use query::*;
pub use selection::*;
pub use teardrops::*;

