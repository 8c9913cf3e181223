/*!
 * Core Module
 * Fundamental simulator types and error handling
 */

pub mod errors;
pub mod limits;
pub mod name;
pub mod types;

// Re-export for convenience
pub use errors::*;
pub use name::{ProcessName, RESUMED_MARKER};
pub use types::*;
