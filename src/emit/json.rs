use serde::Serialize;

use crate::types::ModuleRecord;

/// Machine-readable rendering of a retrieval result. Field order and every
/// nested collection are deterministic, so identical metadata yields
/// byte-identical output.
#[derive(Serialize)]
pub struct JsonOutput<'a> {
    pub version: &'static str,
    pub modules_count: usize,
    pub modules: &'a [ModuleRecord],
}

impl<'a> JsonOutput<'a> {
    pub fn from_modules(modules: &'a [ModuleRecord]) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            modules_count: modules.len(),
            modules,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::metadata::{function_entry, DocState, MemoryProvider, ModuleMeta};
    use crate::retrieve::retrieve_docs;

    #[test]
    fn test_emit_is_byte_identical_across_runs() {
        let provider = MemoryProvider::new().with_module(
            "Foo",
            ModuleMeta::new()
                .with_doc("The Foo module.")
                .with_function(function_entry("run", 2, DocState::Unset)),
        );
        let ids = vec!["Foo".to_string()];

        let first = retrieve_docs(&provider, &ids, &Config::default()).unwrap();
        let second = retrieve_docs(&provider, &ids, &Config::default()).unwrap();
        assert_eq!(
            JsonOutput::from_modules(&first).to_json(),
            JsonOutput::from_modules(&second).to_json()
        );
    }

    #[test]
    fn test_emit_shape() {
        let provider =
            MemoryProvider::new().with_module("Foo", ModuleMeta::new().with_doc("doc"));
        let modules = retrieve_docs(&provider, &["Foo".to_string()], &Config::default()).unwrap();

        let json = JsonOutput::from_modules(&modules).to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["modules_count"], 1);
        assert_eq!(value["modules"][0]["id"], "Foo");
        assert_eq!(value["modules"][0]["kind"], "module");
    }
}
