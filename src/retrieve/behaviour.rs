//! Behaviour and callback resolution.
//!
//! Maps every callback the module implements back to the behaviour that
//! declares it, and tracks the module's own optional-callback declarations
//! and callback specifications. All lookups use the mangled (name, arity)
//! key for macro-like symbols.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::metadata::{MetadataProvider, NameArity, Term};
use crate::types::FunctionKind;

/// Internal declaration key for a symbol. Macros and macrocallbacks are
/// declared under a `MACRO-` prefixed name with an extra leading environment
/// argument; everything user-facing keeps the original name and arity.
pub fn mangled_key(name: &str, arity: u32, kind: FunctionKind) -> NameArity {
    if kind.is_macro_like() {
        (format!("MACRO-{name}"), arity + 1)
    } else {
        (name.to_string(), arity)
    }
}

/// Per-module behaviour/callback lookup tables.
#[derive(Debug, Clone, Default)]
pub struct BehaviourIndex {
    origin: HashMap<NameArity, String>,
    optional: BTreeSet<NameArity>,
    specs: BTreeMap<NameArity, Vec<Term>>,
}

impl BehaviourIndex {
    pub fn build<P: MetadataProvider + ?Sized>(provider: &P, id: &str) -> Self {
        let mut origin = HashMap::new();
        for behaviour in provider.declared_behaviours(id) {
            for key in provider.behaviour_callbacks(&behaviour) {
                // Last-declared behaviour wins when two behaviours declare
                // the same callback; the winner depends on declaration order.
                origin.insert(key, behaviour.clone());
            }
        }
        Self {
            origin,
            optional: provider.optional_callbacks(id),
            specs: provider.callback_specs(id),
        }
    }

    /// The behaviour declaring this callback, if any. Mangled key.
    pub fn origin(&self, key: &NameArity) -> Option<&str> {
        self.origin.get(key).map(String::as_str)
    }

    /// Whether the module marks this callback optional. Mangled key.
    pub fn is_optional(&self, key: &NameArity) -> bool {
        self.optional.contains(key)
    }

    /// The module's own callback specs, declaration order. Mangled key.
    pub fn specs_for(&self, key: &NameArity) -> &[Term] {
        self.specs.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}
