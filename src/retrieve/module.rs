//! Module assembly: composes one `ModuleRecord` from the per-module parts.

use crate::config::{Config, SourceLink};
use crate::metadata::MetadataProvider;
use crate::retrieve::behaviour::BehaviourIndex;
use crate::retrieve::functions::assemble_functions;
use crate::retrieve::kind::module_kind;
use crate::retrieve::source::{find_line, LocatorKey};
use crate::retrieve::typedocs::assemble_types;
use crate::types::ModuleRecord;

/// Externally-facing module id: the printable identifier with a single
/// leading runtime-internal marker stripped.
pub fn display_id(printable: &str) -> &str {
    printable.strip_prefix(':').unwrap_or(printable)
}

/// Assemble the record for one module. The caller resolves the module-level
/// doc blob beforehand (it already fetched it to rule out the fatal
/// no-metadata case) and passes the resulting summary through.
pub fn assemble_module<P: MetadataProvider + ?Sized>(
    provider: &P,
    printable_id: &str,
    summary: Option<String>,
    config: &Config,
) -> ModuleRecord {
    let id = display_id(printable_id).to_string();

    let kind = module_kind(&provider.capabilities(printable_id));
    let declarations = provider.abstract_declarations(printable_id);
    let source_root = config.source_root.as_deref().unwrap_or("");
    let link = SourceLink::new(config, provider.source_path(printable_id, source_root));
    let index = BehaviourIndex::build(provider, printable_id);

    let functions = assemble_functions(provider, printable_id, kind, &index, &declarations, &link);
    let types = assemble_types(provider, printable_id, &link);
    // The listing stores the module name without the runtime-internal
    // marker, so the scan matches against the stripped id.
    let module_line = find_line(&declarations, &LocatorKey::Module(&id));

    ModuleRecord {
        id,
        kind,
        summary,
        functions,
        types,
        source_location: link.url(module_line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{
        AbstractEntry, AttrValue, Line, MemoryProvider, ModuleCapabilities, ModuleMeta,
    };
    use crate::types::ModuleKind;

    #[test]
    fn test_display_id_strips_leading_marker() {
        assert_eq!(display_id(":ets"), "ets");
        assert_eq!(display_id("Enum"), "Enum");
    }

    #[test]
    fn test_assembles_summary_and_kind() {
        let provider = MemoryProvider::new().with_module(
            "Foo",
            ModuleMeta::new().with_capabilities(ModuleCapabilities {
                has_behaviour_info: true,
                ..Default::default()
            }),
        );

        let record = assemble_module(
            &provider,
            "Foo",
            Some("The Foo module.".to_string()),
            &Config::default(),
        );
        assert_eq!(record.id, "Foo");
        assert_eq!(record.kind, ModuleKind::Behaviour);
        assert_eq!(record.summary.as_deref(), Some("The Foo module."));
    }

    #[test]
    fn test_hidden_module_doc_is_absent_summary() {
        let provider = MemoryProvider::new().with_module("Foo", ModuleMeta::new());
        let record = assemble_module(&provider, "Foo", None, &Config::default());
        assert_eq!(record.summary, None);
    }

    #[test]
    fn test_module_source_location_from_module_attribute() {
        let provider = MemoryProvider::new().with_module(
            "Foo",
            ModuleMeta::new()
                .with_source_path("lib/foo.ex")
                .with_declaration(AbstractEntry::Attribute {
                    line: Line::Number(3),
                    value: AttrValue::Module("Foo".to_string()),
                }),
        );

        let config = Config::with_source_url("", "https://host/%{path}#L%{line}");
        let record = assemble_module(&provider, "Foo", None, &config);
        assert_eq!(
            record.source_location.as_deref(),
            Some("https://host/lib/foo.ex#L3")
        );
    }

    #[test]
    fn test_module_attribute_matches_stripped_id() {
        // Runtime-prefixed identifiers carry the bare name in the listing.
        let provider = MemoryProvider::new().with_module(
            ":ets",
            ModuleMeta::new()
                .with_source_path("lib/ets.erl")
                .with_declaration(AbstractEntry::Attribute {
                    line: Line::Number(1),
                    value: AttrValue::Module("ets".to_string()),
                }),
        );

        let config = Config::with_source_url("", "https://host/%{path}#L%{line}");
        let record = assemble_module(&provider, ":ets", None, &config);
        assert_eq!(record.id, "ets");
        assert_eq!(
            record.source_location.as_deref(),
            Some("https://host/lib/ets.erl#L1")
        );
    }

    #[test]
    fn test_no_module_attribute_means_no_location() {
        let provider = MemoryProvider::new().with_module("Foo", ModuleMeta::new());
        let config = Config::with_source_url("", "https://host/%{path}#L%{line}");
        let record = assemble_module(&provider, "Foo", None, &config);
        assert_eq!(record.source_location, None);
    }
}
