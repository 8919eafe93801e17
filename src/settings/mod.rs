//! Configuration loading and resolution utilities.
//!
//! `load` is the primary entry point and returns a [`ResolvedConfig`] that
//! the browse workflow consumes.

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::{ContentSource, ResolvedConfig};
