//! API Table Loading
//!
//! This crate loads the API table from disk, either the legacy
//! keyword-per-line `APIspec.txt` format together with its
//! `<category>_special` list files, or the YAML form of the same table,
//! and exposes it to code generators through `ApiRegistry`.

pub mod error;
pub mod file;
pub mod spec_file;
pub mod specials;
pub mod table;

// Re-export commonly used types at the crate root
pub use error::LoadError;
pub use file::{is_yaml_path, ApiFile};
pub use spec_file::parse_api_spec;
pub use specials::{parse_specials, specials_file_name};
pub use table::ApiTable;

// Re-export crapi_types for convenience
pub use crapi_types;
