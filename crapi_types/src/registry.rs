use crate::types::ChromiumProps;
use thiserror::Error;

/// Read-only view of the API table that code generators query.
///
/// Implementations decide the order `functions_in_category` returns;
/// generators must not re-sort it.
pub trait ApiRegistry {
    /// Names of all functions registered under `category`, in registry order.
    /// An unknown category is empty.
    fn functions_in_category(&self, category: &str) -> Vec<String>;

    /// Chromium property tags for `name`, or `None` if the function is unknown.
    fn tags_for(&self, name: &str) -> Option<&ChromiumProps>;

    /// Like `tags_for`, but treats an unknown function as an error.
    fn require_tags(&self, name: &str) -> Result<&ChromiumProps, RegistryError> {
        self.tags_for(name).ok_or_else(|| RegistryError::UnknownFunction {
            name: name.to_string(),
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("function '{name}' is not defined in the API table")]
    UnknownFunction { name: String },
}
