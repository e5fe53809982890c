//! Type assembly: raw type declarations merged with their documentation.

use crate::config::SourceLink;
use crate::metadata::{MetadataProvider, Term, TypeSpecKind};
use crate::retrieve::signature::spec_signature;
use crate::types::{TypeKind, TypeRecord};

/// Assemble the ordered type records of one module. Private types are
/// excluded entirely; opaque type bodies are redacted to their bare head.
pub fn assemble_types<P: MetadataProvider + ?Sized>(
    provider: &P,
    id: &str,
    link: &SourceLink,
) -> Vec<TypeRecord> {
    let primary = provider.type_docs_primary(id);
    // The fallback source is consulted only when the primary source is
    // unsupported, not when it merely has no entry for a given type. When
    // both are unsupported the doc stays absent.
    let fallback = if primary.is_none() {
        provider.type_docs_fallback(id)
    } else {
        None
    };

    let mut records: Vec<TypeRecord> = provider
        .type_specs(id)
        .into_iter()
        .filter_map(|entry| {
            let kind = match entry.kind {
                TypeSpecKind::Type => TypeKind::Type,
                TypeSpecKind::Opaque => TypeKind::Opaque,
                TypeSpecKind::Private => return None,
            };

            let key = (entry.name.clone(), entry.arity);
            let (line, doc) = match (&primary, &fallback) {
                (Some(docs), _) => docs
                    .get(&key)
                    .map(|(line, doc)| (Some(*line), doc.clone()))
                    .unwrap_or((None, None)),
                (None, Some(docs)) => (None, docs.get(&key).cloned().flatten()),
                (None, None) => (None, None),
            };

            let head = Term::App(entry.name.clone(), entry.args);
            let signature = spec_signature(&entry.name, entry.arity, &head);
            let spec = match kind {
                TypeKind::Opaque => head,
                TypeKind::Type => Term::Ann(Box::new(head), Box::new(entry.value)),
            };

            Some(TypeRecord {
                id: format!("{}/{}", entry.name, entry.arity),
                name: entry.name,
                arity: entry.arity,
                kind,
                spec,
                doc,
                signature,
                source_location: link.url(line),
            })
        })
        .collect();

    records.sort_by(|a, b| (a.name.as_str(), a.arity).cmp(&(b.name.as_str(), b.arity)));
    records
}
