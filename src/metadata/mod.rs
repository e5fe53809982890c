mod ast;
mod memory;
mod provider;

pub use ast::Term;
pub use memory::{MemoryProvider, ModuleMeta};
pub use provider::{
    AbstractEntry, AttrValue, CallbackDocEntry, DocState, FunctionDocEntry, Line,
    MetadataProvider, ModuleCapabilities, ModuleDoc, NameArity, TypeSpecEntry, TypeSpecKind,
};

#[cfg(test)]
pub use memory::function_entry;
