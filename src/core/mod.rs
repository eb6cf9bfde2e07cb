// Matching and taxonomy engine
pub mod aliases;
pub mod category;
pub mod classify;
pub mod engine;
pub mod matcher;
pub mod normalize;
pub mod overrides;
pub mod rules;

// Data surfaces
pub mod catalog;
pub mod document;
pub mod recategorize;
pub mod store;

pub mod error;

// Internal modules - not part of public API
pub(crate) mod paths;

// Public modules for CLI access
pub mod defaults;

// Re-export common types for convenience
pub use category::CategoryId;
pub use engine::Engine;
pub use error::{Error, ErrorCode, Result};
