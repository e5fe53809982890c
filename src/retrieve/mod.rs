//! The retrieval engine: per-module extraction plus the batch orchestrator.

mod behaviour;
mod defaults;
mod functions;
mod kind;
mod module;
mod signature;
mod source;
mod typedocs;

pub use behaviour::{mangled_key, BehaviourIndex};
pub use defaults::default_arities;
pub use functions::assemble_functions;
pub use kind::module_kind;
pub use module::{assemble_module, display_id};
pub use signature::{call_signature, spec_signature};
pub use source::{find_line, LocatorKey};
pub use typedocs::assemble_types;

use std::collections::HashSet;

use once_cell::sync::Lazy;
use rayon::prelude::*;

use crate::config::Config;
use crate::error::{Result, RetrieveError};
use crate::metadata::{MetadataProvider, ModuleDoc};
use crate::types::ModuleRecord;

/// Bootstrap-only runtime modules that are loaded before documentation
/// support exists; they are skipped instead of raising.
static BOOTSTRAP_MODULES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "erl_prim_loader",
        "erts_internal",
        "init",
        "prim_buffer",
        "prim_eval",
        "prim_file",
        "prim_inet",
        "prim_zip",
        "zlib",
    ]
    .into_iter()
    .collect()
});

fn is_bootstrap(printable_id: &str) -> bool {
    BOOTSTRAP_MODULES.contains(display_id(printable_id))
}

/// Build the documentation model for a list of module identifiers.
///
/// Extraction fans out one task per module; modules share nothing but the
/// read-only configuration. Any fatal error aborts the whole batch with no
/// partial result. Results are sorted by id, with duplicates collapsed.
pub fn retrieve_docs<P: MetadataProvider>(
    provider: &P,
    ids: &[String],
    config: &Config,
) -> Result<Vec<ModuleRecord>> {
    let mut modules: Vec<ModuleRecord> = ids
        .par_iter()
        .map(|id| retrieve_module(provider, id, config))
        .collect::<Result<Vec<Option<ModuleRecord>>>>()?
        .into_iter()
        .flatten()
        .collect();

    modules.sort_by(|a, b| a.id.cmp(&b.id));
    modules.dedup_by(|a, b| a.id == b.id);
    Ok(modules)
}

fn retrieve_module<P: MetadataProvider + ?Sized>(
    provider: &P,
    id: &str,
    config: &Config,
) -> Result<Option<ModuleRecord>> {
    if !provider.is_available(id) {
        return Err(RetrieveError::ModuleUnavailable(display_id(id).to_string()));
    }
    // No doc-export hook at all: excluded from the result set, not an error.
    if !provider.has_doc_hook(id) {
        return Ok(None);
    }
    // Fetched once; the resolved summary is threaded into assembly so a
    // live-runtime provider is not asked twice.
    let summary = match provider.module_doc(id) {
        ModuleDoc::Unsupported if is_bootstrap(id) => return Ok(None),
        ModuleDoc::Unsupported => {
            return Err(RetrieveError::MissingDocMetadata(display_id(id).to_string()))
        }
        ModuleDoc::Present(text) => Some(text),
        ModuleDoc::Hidden => None,
    };
    Ok(Some(assemble_module(provider, id, summary, config)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{function_entry, DocState, MemoryProvider, ModuleMeta};

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_results_sorted_and_unique() {
        let provider = MemoryProvider::new()
            .with_module("Zeta", ModuleMeta::new().with_doc("z"))
            .with_module("Alpha", ModuleMeta::new().with_doc("a"));

        let records = retrieve_docs(
            &provider,
            &ids(&["Zeta", "Alpha", "Zeta"]),
            &Config::default(),
        )
        .unwrap();

        let got: Vec<&str> = records.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(got, vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn test_unavailable_module_aborts_batch() {
        let provider = MemoryProvider::new().with_module("Foo", ModuleMeta::new().with_doc("f"));
        let err = retrieve_docs(&provider, &ids(&["Foo", "Missing"]), &Config::default())
            .unwrap_err();
        assert_eq!(err, RetrieveError::ModuleUnavailable("Missing".to_string()));
    }

    #[test]
    fn test_module_without_doc_hook_silently_skipped() {
        let provider = MemoryProvider::new()
            .with_module("Foo", ModuleMeta::new().with_doc("f"))
            .with_module("NoHook", ModuleMeta::new().without_doc_hook());

        let records =
            retrieve_docs(&provider, &ids(&["Foo", "NoHook"]), &Config::default()).unwrap();
        let got: Vec<&str> = records.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(got, vec!["Foo"]);
    }

    #[test]
    fn test_missing_doc_metadata_aborts_batch() {
        let provider = MemoryProvider::new()
            .with_module("Foo", ModuleMeta::new().with_doc("f"))
            .with_module(":raw", ModuleMeta::new().without_doc_metadata());

        let err =
            retrieve_docs(&provider, &ids(&["Foo", ":raw"]), &Config::default()).unwrap_err();
        // The error carries the stripped display id.
        assert_eq!(err, RetrieveError::MissingDocMetadata("raw".to_string()));
    }

    #[test]
    fn test_bootstrap_module_without_docs_is_skipped() {
        let provider = MemoryProvider::new()
            .with_module("Foo", ModuleMeta::new().with_doc("f"))
            .with_module(":prim_file", ModuleMeta::new().without_doc_metadata());

        let records = retrieve_docs(&provider, &ids(&["Foo", ":prim_file"]), &Config::default())
            .unwrap();
        let got: Vec<&str> = records.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(got, vec!["Foo"]);
    }

    #[test]
    fn test_hidden_module_doc_still_included() {
        let provider =
            MemoryProvider::new().with_module("Quiet", ModuleMeta::new().with_hidden_doc());
        let records = retrieve_docs(&provider, &ids(&["Quiet"]), &Config::default()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].summary, None);
    }

    #[test]
    fn test_deterministic_output() {
        let provider = MemoryProvider::new().with_module(
            "Foo",
            ModuleMeta::new()
                .with_doc("The Foo module.")
                .with_function(function_entry("run", 1, DocState::Unset)),
        );
        let config = Config::with_source_url("/src", "https://host/%{path}#L%{line}");

        let first = retrieve_docs(&provider, &ids(&["Foo"]), &config).unwrap();
        let second = retrieve_docs(&provider, &ids(&["Foo"]), &config).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
