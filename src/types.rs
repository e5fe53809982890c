//! Record types of the documentation model.
//!
//! All three record kinds are value objects: constructed once per retrieval
//! run, never mutated afterward, and identified only by their `id` within
//! their owning module. Every collection that reaches serialized output is a
//! `Vec` or `BTreeSet` so the output stays byte-deterministic.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::metadata::Term;

/// Category of a documented module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    Module,
    Exception,
    Protocol,
    Impl,
    Behaviour,
}

impl ModuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKind::Module => "module",
            ModuleKind::Exception => "exception",
            ModuleKind::Protocol => "protocol",
            ModuleKind::Impl => "impl",
            ModuleKind::Behaviour => "behaviour",
        }
    }
}

/// Category of a function-like record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionKind {
    Function,
    Macro,
    Callback,
    Macrocallback,
}

impl FunctionKind {
    /// Macro-like symbols are internally declared under a mangled name with
    /// an extra leading environment argument.
    pub fn is_macro_like(&self) -> bool {
        matches!(self, FunctionKind::Macro | FunctionKind::Macrocallback)
    }
}

/// Category of a type record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Type,
    Opaque,
}

/// One documented module, with its functions, callbacks and types.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleRecord {
    /// Display identifier, leading runtime-internal punctuation stripped.
    pub id: String,
    pub kind: ModuleKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Functions and macros in documentation-declared order, callbacks and
    /// macrocallbacks appended after them in their own declared order.
    pub functions: Vec<FunctionRecord>,
    /// Sorted by (name, arity).
    pub types: Vec<TypeRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_location: Option<String>,
}

/// One retained function, macro, callback, or macrocallback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionRecord {
    /// `"name/arity"` using the user-visible arity, never the mangled one.
    pub id: String,
    pub name: String,
    pub arity: u32,
    /// Lower-arity ids made callable by trailing default parameters.
    pub default_arities: BTreeSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    pub kind: FunctionKind,
    pub signature: String,
    /// Display-ready specification ASTs, reversed relative to declaration order.
    pub specs: Vec<Term>,
    /// Tags attached to the record; currently only `optional`.
    pub annotations: BTreeSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_location: Option<String>,
}

/// One retained (non-private) type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeRecord {
    /// `"name/arity"`.
    pub id: String,
    pub name: String,
    pub arity: u32,
    pub kind: TypeKind,
    /// Full `name(args) :: value` form, or the bare `name(args)` head for
    /// opaque types whose body is redacted.
    pub spec: Term,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    pub signature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_like_kinds() {
        assert!(FunctionKind::Macro.is_macro_like());
        assert!(FunctionKind::Macrocallback.is_macro_like());
        assert!(!FunctionKind::Function.is_macro_like());
        assert!(!FunctionKind::Callback.is_macro_like());
    }

    #[test]
    fn test_module_kind_serializes_lowercase() {
        let json = serde_json::to_string(&ModuleKind::Behaviour).unwrap();
        assert_eq!(json, "\"behaviour\"");
    }
}
