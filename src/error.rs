//! Error types for documentation retrieval.
//!
//! Both variants are fatal to the whole batch: `retrieve_docs` never returns
//! a partial result. Within one module, missing data degrades to absent
//! fields instead of raising.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RetrieveError {
    /// The requested module cannot be loaded at all.
    #[error("module {0} is not available and cannot be documented")]
    ModuleUnavailable(String),

    /// The module exists but was never compiled with documentation metadata.
    /// Distinct from a module whose docs are explicitly hidden by its author.
    #[error("module {0} was not compiled with documentation metadata")]
    MissingDocMetadata(String),
}

pub type Result<T> = std::result::Result<T, RetrieveError>;
