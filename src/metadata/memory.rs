//! In-memory metadata provider.
//!
//! Backs every test in the crate and serves downstream consumers that already
//! hold extracted metadata (for example from a build artifact) and only need
//! the retrieval engine on top of it.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::metadata::provider::{
    AbstractEntry, CallbackDocEntry, FunctionDocEntry, MetadataProvider, ModuleCapabilities,
    ModuleDoc, NameArity, TypeSpecEntry, TypeSpecKind,
};
use crate::metadata::Term;

#[cfg(test)]
use crate::metadata::provider::DocState;
#[cfg(test)]
use crate::types::FunctionKind;

/// Metadata of a single module, assembled builder-style.
#[derive(Debug, Clone)]
pub struct ModuleMeta {
    doc_hook: bool,
    capabilities: ModuleCapabilities,
    module_doc: ModuleDoc,
    functions: Vec<FunctionDocEntry>,
    callbacks: Vec<CallbackDocEntry>,
    specs: BTreeMap<NameArity, Vec<Term>>,
    callback_specs: BTreeMap<NameArity, Vec<Term>>,
    optional_callbacks: BTreeSet<NameArity>,
    behaviours: Vec<String>,
    behaviour_callbacks: Vec<NameArity>,
    types: Vec<TypeSpecEntry>,
    type_docs_primary: Option<BTreeMap<NameArity, (u32, Option<String>)>>,
    type_docs_fallback: Option<BTreeMap<NameArity, Option<String>>>,
    declarations: Vec<AbstractEntry>,
    source_path: Option<String>,
}

impl Default for ModuleMeta {
    fn default() -> Self {
        Self {
            doc_hook: true,
            capabilities: ModuleCapabilities::default(),
            module_doc: ModuleDoc::Hidden,
            functions: Vec::new(),
            callbacks: Vec::new(),
            specs: BTreeMap::new(),
            callback_specs: BTreeMap::new(),
            optional_callbacks: BTreeSet::new(),
            behaviours: Vec::new(),
            behaviour_callbacks: Vec::new(),
            types: Vec::new(),
            type_docs_primary: None,
            type_docs_fallback: None,
            declarations: Vec::new(),
            source_path: None,
        }
    }
}

impl ModuleMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_doc(mut self, text: &str) -> Self {
        self.module_doc = ModuleDoc::Present(text.to_string());
        self
    }

    pub fn with_hidden_doc(mut self) -> Self {
        self.module_doc = ModuleDoc::Hidden;
        self
    }

    /// Mark the module as compiled without documentation metadata.
    pub fn without_doc_metadata(mut self) -> Self {
        self.module_doc = ModuleDoc::Unsupported;
        self
    }

    /// Remove the documentation-export hook entirely.
    pub fn without_doc_hook(mut self) -> Self {
        self.doc_hook = false;
        self
    }

    pub fn with_capabilities(mut self, capabilities: ModuleCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn with_function(mut self, entry: FunctionDocEntry) -> Self {
        self.functions.push(entry);
        self
    }

    pub fn with_callback(mut self, entry: CallbackDocEntry) -> Self {
        self.callbacks.push(entry);
        self
    }

    /// Attach specs for a mangled (name, arity), in declaration order.
    pub fn with_spec(mut self, name: &str, arity: u32, specs: Vec<Term>) -> Self {
        self.specs.insert((name.to_string(), arity), specs);
        self
    }

    pub fn with_callback_spec(mut self, name: &str, arity: u32, specs: Vec<Term>) -> Self {
        self.callback_specs.insert((name.to_string(), arity), specs);
        self
    }

    pub fn with_optional_callback(mut self, name: &str, arity: u32) -> Self {
        self.optional_callbacks.insert((name.to_string(), arity));
        self
    }

    pub fn with_behaviour(mut self, id: &str) -> Self {
        self.behaviours.push(id.to_string());
        self
    }

    /// Declare a callback this module defines as a behaviour, mangled form.
    pub fn with_behaviour_callback(mut self, name: &str, arity: u32) -> Self {
        self.behaviour_callbacks.push((name.to_string(), arity));
        self
    }

    pub fn with_type(
        mut self,
        kind: TypeSpecKind,
        name: &str,
        args: Vec<Term>,
        value: Term,
    ) -> Self {
        self.types.push(TypeSpecEntry {
            kind,
            name: name.to_string(),
            arity: args.len() as u32,
            args,
            value,
        });
        self
    }

    pub fn with_primary_type_doc(mut self, name: &str, arity: u32, line: u32, doc: &str) -> Self {
        self.type_docs_primary
            .get_or_insert_with(BTreeMap::new)
            .insert((name.to_string(), arity), (line, Some(doc.to_string())));
        self
    }

    /// Enable the primary type-doc source without any entries.
    pub fn with_empty_primary_type_docs(mut self) -> Self {
        self.type_docs_primary.get_or_insert_with(BTreeMap::new);
        self
    }

    pub fn with_fallback_type_doc(mut self, name: &str, arity: u32, doc: &str) -> Self {
        self.type_docs_fallback
            .get_or_insert_with(BTreeMap::new)
            .insert((name.to_string(), arity), Some(doc.to_string()));
        self
    }

    pub fn with_declaration(mut self, entry: AbstractEntry) -> Self {
        self.declarations.push(entry);
        self
    }

    pub fn with_source_path(mut self, path: &str) -> Self {
        self.source_path = Some(path.to_string());
        self
    }
}

/// Provider over a fixed map of module metadata. A module is available iff
/// it has an entry; everything else reports empty metadata.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    modules: HashMap<String, ModuleMeta>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_module(mut self, id: &str, meta: ModuleMeta) -> Self {
        self.modules.insert(id.to_string(), meta);
        self
    }

    pub fn insert(&mut self, id: &str, meta: ModuleMeta) {
        self.modules.insert(id.to_string(), meta);
    }

    fn get(&self, id: &str) -> Option<&ModuleMeta> {
        self.modules.get(id)
    }
}

fn default_source_path(id: &str) -> String {
    let stripped = id.strip_prefix(':').unwrap_or(id);
    format!("lib/{}.ex", stripped.to_lowercase().replace('.', "/"))
}

impl MetadataProvider for MemoryProvider {
    fn is_available(&self, id: &str) -> bool {
        self.modules.contains_key(id)
    }

    fn has_doc_hook(&self, id: &str) -> bool {
        self.get(id).map(|m| m.doc_hook).unwrap_or(false)
    }

    fn capabilities(&self, id: &str) -> ModuleCapabilities {
        self.get(id).map(|m| m.capabilities).unwrap_or_default()
    }

    fn module_doc(&self, id: &str) -> ModuleDoc {
        self.get(id)
            .map(|m| m.module_doc.clone())
            .unwrap_or(ModuleDoc::Unsupported)
    }

    fn function_docs(&self, id: &str) -> Vec<FunctionDocEntry> {
        self.get(id).map(|m| m.functions.clone()).unwrap_or_default()
    }

    fn callback_docs(&self, id: &str) -> Vec<CallbackDocEntry> {
        self.get(id).map(|m| m.callbacks.clone()).unwrap_or_default()
    }

    fn specs(&self, id: &str) -> BTreeMap<NameArity, Vec<Term>> {
        self.get(id).map(|m| m.specs.clone()).unwrap_or_default()
    }

    fn callback_specs(&self, id: &str) -> BTreeMap<NameArity, Vec<Term>> {
        self.get(id)
            .map(|m| m.callback_specs.clone())
            .unwrap_or_default()
    }

    fn optional_callbacks(&self, id: &str) -> BTreeSet<NameArity> {
        self.get(id)
            .map(|m| m.optional_callbacks.clone())
            .unwrap_or_default()
    }

    fn declared_behaviours(&self, id: &str) -> Vec<String> {
        self.get(id).map(|m| m.behaviours.clone()).unwrap_or_default()
    }

    fn behaviour_callbacks(&self, id: &str) -> Vec<NameArity> {
        self.get(id)
            .map(|m| m.behaviour_callbacks.clone())
            .unwrap_or_default()
    }

    fn type_specs(&self, id: &str) -> Vec<TypeSpecEntry> {
        self.get(id).map(|m| m.types.clone()).unwrap_or_default()
    }

    fn type_docs_primary(&self, id: &str) -> Option<BTreeMap<NameArity, (u32, Option<String>)>> {
        self.get(id).and_then(|m| m.type_docs_primary.clone())
    }

    fn type_docs_fallback(&self, id: &str) -> Option<BTreeMap<NameArity, Option<String>>> {
        self.get(id).and_then(|m| m.type_docs_fallback.clone())
    }

    fn abstract_declarations(&self, id: &str) -> Vec<AbstractEntry> {
        self.get(id).map(|m| m.declarations.clone()).unwrap_or_default()
    }

    fn source_path(&self, id: &str, source_root: &str) -> String {
        let relative = self
            .get(id)
            .and_then(|m| m.source_path.clone())
            .unwrap_or_else(|| default_source_path(id));
        if source_root.is_empty() {
            relative
        } else {
            format!("{}/{}", source_root.trim_end_matches('/'), relative)
        }
    }
}

/// Shorthand for a plain function doc entry used across the test suite.
#[cfg(test)]
pub fn function_entry(name: &str, arity: u32, doc: DocState) -> FunctionDocEntry {
    let args = (0..arity).map(|i| Term::var(&format!("arg{}", i + 1))).collect();
    FunctionDocEntry {
        name: name.to_string(),
        arity,
        line: None,
        kind: FunctionKind::Function,
        args,
        doc,
    }
}
