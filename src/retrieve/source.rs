//! Declaration-line resolution over the abstract declaration listing.

use crate::metadata::{AbstractEntry, AttrValue};

/// What to look for in the listing. Function and callback keys must already
/// be in mangled form for macro-like symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocatorKey<'a> {
    Module(&'a str),
    Function { name: &'a str, arity: u32 },
    Callback { name: &'a str, arity: u32 },
}

/// Linear first-match scan. Listings are small enough per module that no
/// indexing is warranted. Returns the entry's resolved line number.
pub fn find_line(entries: &[AbstractEntry], key: &LocatorKey) -> Option<u32> {
    entries.iter().find_map(|entry| match (entry, key) {
        (
            AbstractEntry::Attribute {
                line,
                value: AttrValue::Module(module),
            },
            LocatorKey::Module(target),
        ) if module == target => Some(line.number()),
        (
            AbstractEntry::Declaration { line, name, arity },
            LocatorKey::Function {
                name: target,
                arity: target_arity,
            },
        ) if name == target && arity == target_arity => Some(line.number()),
        (
            AbstractEntry::Attribute {
                line,
                value: AttrValue::Callback((name, arity)),
            },
            LocatorKey::Callback {
                name: target,
                arity: target_arity,
            },
        ) if name == target && arity == target_arity => Some(line.number()),
        _ => None,
    })
}
