//! Display signature derivation.
//!
//! Two modes: call-style from a raw argument AST (functions and macros), and
//! spec-style from a specification AST (callbacks and types), where each
//! argument is reduced to its bound name or a categorical placeholder.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::metadata::Term;

/// Reserved forms rendered as the bare name with no argument list.
static BARE_FORMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["__ENV__", "__MODULE__", "__DIR__", "__CALLER__", "__STACKTRACE__"]
        .into_iter()
        .collect()
});

/// Reserved alias-expansion forms rendered with an opaque `args` list.
static ALIAS_FORMS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["__aliases__"].into_iter().collect());

/// Call-style signature from a symbol name and its raw argument AST.
pub fn call_signature(name: &str, args: &[Term]) -> String {
    if ALIAS_FORMS.contains(name) {
        return format!("{name}(args)");
    }
    if BARE_FORMS.contains(name) {
        return name.to_string();
    }
    let rendered = args.iter().map(Term::render).collect::<Vec<_>>();
    format!("{}({})", name, rendered.join(", "))
}

/// Spec-style signature from a specification AST. Only the trailing `arity`
/// arguments count; specs may carry extra leading guard arguments.
pub fn spec_signature(name: &str, arity: u32, spec: &Term) -> String {
    let placeholders = match spec_args(spec) {
        Some(args) => reduce_args(args, arity),
        None => generic_args(arity),
    };
    format!("{}({})", name, placeholders.join(", "))
}

/// Positional `argN` placeholders for a symbol with no usable spec.
pub fn generic_args(arity: u32) -> Vec<String> {
    (1..=arity).map(|i| format!("arg{i}")).collect()
}

fn spec_args(spec: &Term) -> Option<&[Term]> {
    match spec {
        Term::When(inner, _) => spec_args(inner),
        Term::Fun(args, _) => Some(args),
        Term::App(_, args) => Some(args),
        _ => None,
    }
}

fn reduce_args(args: &[Term], arity: u32) -> Vec<String> {
    let keep = arity as usize;
    let skip = args.len().saturating_sub(keep);
    args[skip..]
        .iter()
        .enumerate()
        .map(|(index, term)| reduce(term, index + 1))
        .collect()
}

/// Reduce one argument to its bound name or a categorical placeholder.
fn reduce(term: &Term, position: usize) -> String {
    match term {
        Term::Ann(left, _) => reduce(left, position),
        Term::Var(name) => name.clone(),
        Term::Binary => "binary".to_string(),
        Term::Map(_) => "map".to_string(),
        Term::Tuple(_) => "tuple".to_string(),
        Term::Integer(_) => "integer".to_string(),
        Term::Float(_) => "float".to_string(),
        Term::List(_) => "list".to_string(),
        Term::Atom(_) => "atom".to_string(),
        _ => format!("arg{position}"),
    }
}
