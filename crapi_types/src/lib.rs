//! API Table Type Definitions
//!
//! This crate contains the core type definitions for the API table that
//! drives the Chromium code generators. It provides pure data structures
//! and the registry interface generators query, without any file I/O or
//! code generation logic.

pub mod registry;
pub mod types;

// Re-export commonly used types at the crate root
pub use registry::*;
pub use types::*;
