//! The metadata provider interface the retrieval engine runs against.
//!
//! A provider wraps a host runtime's raw introspection primitives. All list
//! results must come back in stable declaration order; the engine never
//! re-sorts them except where the model explicitly calls for a sort.

use std::collections::{BTreeMap, BTreeSet};

use crate::metadata::Term;
use crate::types::FunctionKind;

/// A `(name, arity)` pair. For macro-like symbols the mangled form carries a
/// `MACRO-` name prefix and arity + 1.
pub type NameArity = (String, u32);

/// Capability probes driving module kind classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModuleCapabilities {
    /// The module defines a structured value type carrying an exception marker.
    pub defines_exception_struct: bool,
    /// The module exposes a protocol-introspection capability.
    pub is_protocol: bool,
    /// The module exposes a protocol-implementation-introspection capability.
    pub is_protocol_impl: bool,
    /// The module exposes a behaviour-info capability.
    pub has_behaviour_info: bool,
}

/// Module-level documentation state.
#[derive(Debug, Clone, PartialEq)]
pub enum ModuleDoc {
    Present(String),
    /// The author explicitly opted the module doc out.
    Hidden,
    /// The module carries no documentation metadata at all.
    Unsupported,
}

/// Per-symbol documentation state.
#[derive(Debug, Clone, PartialEq)]
pub enum DocState {
    Present(String),
    /// Explicitly marked false by the author.
    Hidden,
    /// Neither documented nor explicitly opted out.
    Unset,
}

/// One function or macro documentation entry, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDocEntry {
    pub name: String,
    /// User-visible arity, never the mangled one.
    pub arity: u32,
    /// Line declared alongside the documentation, if any.
    pub line: Option<u32>,
    /// `Function` or `Macro`.
    pub kind: FunctionKind,
    /// Raw typed argument AST, defaults included.
    pub args: Vec<Term>,
    pub doc: DocState,
}

/// One callback or macrocallback documentation entry, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct CallbackDocEntry {
    pub name: String,
    pub arity: u32,
    pub line: Option<u32>,
    /// `Callback` or `Macrocallback`.
    pub kind: FunctionKind,
    pub doc: DocState,
}

/// Kind of a raw type declaration. Private types never reach the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSpecKind {
    Type,
    Opaque,
    Private,
}

/// One raw type declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpecEntry {
    pub kind: TypeSpecKind,
    pub name: String,
    pub arity: u32,
    /// Argument terms of the type head.
    pub args: Vec<Term>,
    /// Right-hand value expression.
    pub value: Term,
}

/// A source position from the abstract declaration listing. Entries may carry
/// plain line numbers or richer positions; both resolve uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Number(u32),
    Position { line: u32, column: u32 },
}

impl Line {
    pub fn number(self) -> u32 {
        match self {
            Line::Number(line) => line,
            Line::Position { line, .. } => line,
        }
    }
}

/// Value of an attribute entry in the abstract declaration listing.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// A `module` attribute naming the module itself.
    Module(String),
    /// A `callback` attribute, already in mangled form for macrocallbacks.
    Callback(NameArity),
    /// Any other attribute; never matched by the source locator.
    Other,
}

/// One entry of the ordered abstract declaration listing.
#[derive(Debug, Clone, PartialEq)]
pub enum AbstractEntry {
    Attribute { line: Line, value: AttrValue },
    Declaration { line: Line, name: String, arity: u32 },
}

/// Read-only access to one module's introspectable metadata.
///
/// `Sync` because the orchestrator fans extraction out across modules; a
/// provider must tolerate concurrent reads.
pub trait MetadataProvider: Sync {
    /// Whether the module can be loaded at all.
    fn is_available(&self, id: &str) -> bool;

    /// Whether the module exposes a documentation-export hook. Modules
    /// without one are silently excluded rather than treated as an error.
    fn has_doc_hook(&self, id: &str) -> bool;

    fn capabilities(&self, id: &str) -> ModuleCapabilities;

    fn module_doc(&self, id: &str) -> ModuleDoc;

    /// Function and macro doc entries, in documentation-declared order.
    fn function_docs(&self, id: &str) -> Vec<FunctionDocEntry>;

    /// Callback and macrocallback doc entries, in documentation-declared order.
    fn callback_docs(&self, id: &str) -> Vec<CallbackDocEntry>;

    /// Function/macro specifications keyed by mangled (name, arity), each
    /// list in declaration order.
    fn specs(&self, id: &str) -> BTreeMap<NameArity, Vec<Term>>;

    /// Callback specifications keyed by mangled (name, arity).
    fn callback_specs(&self, id: &str) -> BTreeMap<NameArity, Vec<Term>>;

    /// The module's own optional-callback declarations, already mangled.
    fn optional_callbacks(&self, id: &str) -> BTreeSet<NameArity>;

    /// Behaviours the module declares adherence to, in declaration order.
    fn declared_behaviours(&self, id: &str) -> Vec<String>;

    /// Callbacks a behaviour module defines, in mangled form.
    fn behaviour_callbacks(&self, id: &str) -> Vec<NameArity>;

    fn type_specs(&self, id: &str) -> Vec<TypeSpecEntry>;

    /// Primary type documentation source: (name, arity) to (line, doc).
    /// `None` means the source is unsupported, not that no docs were found.
    fn type_docs_primary(&self, id: &str) -> Option<BTreeMap<NameArity, (u32, Option<String>)>>;

    /// Legacy fallback type documentation source, consulted only when the
    /// primary source is unsupported. Carries no line numbers.
    fn type_docs_fallback(&self, id: &str) -> Option<BTreeMap<NameArity, Option<String>>>;

    /// Ordered abstract declaration listing used for source-line resolution.
    fn abstract_declarations(&self, id: &str) -> Vec<AbstractEntry>;

    /// Source file path of the module, resolved against `source_root`.
    fn source_path(&self, id: &str, source_root: &str) -> String;
}
