//! Browser Commands
//!
//! Thin wrappers over the window/document APIs used by components.

mod window;
mod files;

pub use window::*;
pub use files::*;
