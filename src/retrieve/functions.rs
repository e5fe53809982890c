//! Function and callback assembly.
//!
//! Filters the module's function/macro doc entries, derives signatures,
//! default arities and specs for the retained ones, and appends the module's
//! own callback records when it is a behaviour.

use std::collections::BTreeSet;

use crate::config::SourceLink;
use crate::metadata::{
    AbstractEntry, CallbackDocEntry, DocState, FunctionDocEntry, MetadataProvider,
};
use crate::retrieve::behaviour::{mangled_key, BehaviourIndex};
use crate::retrieve::defaults::default_arities;
use crate::retrieve::module::display_id;
use crate::retrieve::signature::{call_signature, generic_args, spec_signature};
use crate::retrieve::source::{find_line, LocatorKey};
use crate::types::{FunctionRecord, ModuleKind};

/// Dispatch helpers generated into every protocol module; implementation
/// artifacts, never user-facing.
const PROTOCOL_HELPERS: [&str; 2] = ["impl_for", "impl_for!"];

/// Assemble the ordered function records of one module: functions and macros
/// in doc-declared order, callbacks appended for behaviour modules.
pub fn assemble_functions<P: MetadataProvider + ?Sized>(
    provider: &P,
    id: &str,
    module_kind: ModuleKind,
    index: &BehaviourIndex,
    declarations: &[AbstractEntry],
    link: &SourceLink,
) -> Vec<FunctionRecord> {
    let specs = provider.specs(id);

    let mut records: Vec<FunctionRecord> = provider
        .function_docs(id)
        .into_iter()
        .filter(|entry| retained(module_kind, entry))
        .map(|entry| {
            let mangled = mangled_key(&entry.name, entry.arity, entry.kind);
            let line = find_line(
                declarations,
                &LocatorKey::Function {
                    name: &mangled.0,
                    arity: mangled.1,
                },
            )
            .or(entry.line);

            let doc = match &entry.doc {
                DocState::Present(text) => Some(text.clone()),
                _ => index
                    .origin(&mangled)
                    .map(|behaviour| implementation_doc(behaviour, &entry.name, entry.arity)),
            };

            let entry_specs = specs
                .get(&mangled)
                .map(|list| {
                    let mut list = list.clone();
                    list.reverse();
                    list
                })
                .unwrap_or_default();

            FunctionRecord {
                id: format!("{}/{}", entry.name, entry.arity),
                default_arities: default_arities(&entry.name, entry.arity, &entry.args),
                doc,
                signature: call_signature(&entry.name, &entry.args),
                specs: entry_specs,
                annotations: BTreeSet::new(),
                source_location: link.url(line),
                name: entry.name,
                arity: entry.arity,
                kind: entry.kind,
            }
        })
        .collect();

    if module_kind == ModuleKind::Behaviour {
        records.extend(assemble_callbacks(provider, id, index, declarations, link));
    }

    records
}

/// Exclusion rules for function/macro entries. Everything else is retained,
/// documented or not.
fn retained(module_kind: ModuleKind, entry: &FunctionDocEntry) -> bool {
    if module_kind == ModuleKind::Protocol && PROTOCOL_HELPERS.contains(&entry.name.as_str()) {
        return false;
    }
    match entry.doc {
        DocState::Hidden => false,
        DocState::Unset => !entry.name.starts_with('_'),
        DocState::Present(_) => true,
    }
}

fn implementation_doc(behaviour: &str, name: &str, arity: u32) -> String {
    format!(
        "Callback implementation for `c:{}.{}/{}`.",
        display_id(behaviour),
        name,
        arity
    )
}

fn assemble_callbacks<P: MetadataProvider + ?Sized>(
    provider: &P,
    id: &str,
    index: &BehaviourIndex,
    declarations: &[AbstractEntry],
    link: &SourceLink,
) -> Vec<FunctionRecord> {
    provider
        .callback_docs(id)
        .into_iter()
        .filter_map(|entry| {
            let doc = match entry.doc {
                DocState::Hidden => return None,
                DocState::Present(ref text) => Some(text.clone()),
                DocState::Unset => None,
            };
            Some(callback_record(entry, doc, index, declarations, link))
        })
        .collect()
}

fn callback_record(
    entry: CallbackDocEntry,
    doc: Option<String>,
    index: &BehaviourIndex,
    declarations: &[AbstractEntry],
    link: &SourceLink,
) -> FunctionRecord {
    let mangled = mangled_key(&entry.name, entry.arity, entry.kind);
    let line = find_line(
        declarations,
        &LocatorKey::Callback {
            name: &mangled.0,
            arity: mangled.1,
        },
    )
    .or(entry.line);

    // Callbacks carry no call-site argument AST; the signature comes from
    // the first declared spec, or positional placeholders without one.
    let specs = index.specs_for(&mangled);
    let signature = specs
        .first()
        .map(|spec| spec_signature(&entry.name, entry.arity, spec))
        .unwrap_or_else(|| {
            format!("{}({})", entry.name, generic_args(entry.arity).join(", "))
        });

    let mut annotations = BTreeSet::new();
    if index.is_optional(&mangled) {
        annotations.insert("optional".to_string());
    }

    let mut reversed_specs = specs.to_vec();
    reversed_specs.reverse();

    FunctionRecord {
        id: format!("{}/{}", entry.name, entry.arity),
        default_arities: BTreeSet::new(),
        doc,
        signature,
        specs: reversed_specs,
        annotations,
        source_location: link.url(line),
        name: entry.name,
        arity: entry.arity,
        kind: entry.kind,
    }
}
