//! doclens builds a structured, renderer-agnostic documentation model for
//! compiled modules from their introspectable metadata: documentation blobs,
//! type/function/callback specifications, and the abstract declaration listing.
//!
//! The entry point is [`retrieve_docs`], which takes a [`MetadataProvider`],
//! a list of module identifiers, and a [`Config`], and returns a sorted list
//! of [`ModuleRecord`]s ready for a downstream renderer (HTML, markdown, ...).
//! Rendering itself is out of scope; `emit::JsonOutput` covers the common
//! machine-readable case.

pub mod config;
pub mod emit;
pub mod error;
pub mod metadata;
pub mod retrieve;
pub mod types;

pub use config::Config;
pub use error::{Result, RetrieveError};
pub use metadata::{MemoryProvider, MetadataProvider, ModuleMeta, Term};
pub use retrieve::retrieve_docs;
pub use types::{
    FunctionKind, FunctionRecord, ModuleKind, ModuleRecord, TypeKind, TypeRecord,
};
