//! Default-argument expansion.

use std::collections::BTreeSet;

use crate::metadata::Term;

/// Synthetic lower-arity identifiers implied by default-valued trailing
/// parameters: one entry per elided default, `name/(arity - defaults)`
/// through `name/(arity - 1)`.
pub fn default_arities(name: &str, arity: u32, args: &[Term]) -> BTreeSet<String> {
    let defaults = args
        .iter()
        .rev()
        .take_while(|arg| matches!(arg, Term::Default(_, _)))
        .count() as u32;
    (arity.saturating_sub(defaults)..arity)
        .map(|lower| format!("{name}/{lower}"))
        .collect()
}
