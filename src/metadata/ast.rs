//! Closed tagged-variant AST for argument lists, specifications and types.
//!
//! Providers hand every argument, spec and type expression to the engine as a
//! `Term`, so signature derivation and spec redaction dispatch via exhaustive
//! matching instead of probing open-ended dynamic shapes.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Term {
    /// A bound variable, e.g. `x`.
    Var(String),
    /// A literal atom, e.g. `:ok`.
    Atom(String),
    Integer(i64),
    Float(f64),
    /// A binary/bitstring form, `<<...>>`.
    Binary,
    List(Vec<Term>),
    /// A tuple, explicit or 2-element shorthand.
    Tuple(Vec<Term>),
    /// A map form with key/value entries.
    Map(Vec<(Term, Term)>),
    /// A union of alternatives, `a | b`.
    Union(Vec<Term>),
    /// An annotation pair, `name :: type`.
    Ann(Box<Term>, Box<Term>),
    /// A named application, `name(args...)`.
    App(String, Vec<Term>),
    /// A trailing default-value marker, `arg \\ default`.
    Default(Box<Term>, Box<Term>),
    /// A function form, `(args) -> return`.
    Fun(Vec<Term>, Box<Term>),
    /// A constraint wrapper, `spec when name: type, ...`.
    When(Box<Term>, Vec<(String, Term)>),
}

impl Term {
    pub fn var(name: &str) -> Self {
        Term::Var(name.to_string())
    }

    pub fn app(name: &str, args: Vec<Term>) -> Self {
        Term::App(name.to_string(), args)
    }

    pub fn ann(left: Term, right: Term) -> Self {
        Term::Ann(Box::new(left), Box::new(right))
    }

    pub fn with_default(arg: Term, default: Term) -> Self {
        Term::Default(Box::new(arg), Box::new(default))
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

fn join(terms: &[Term], separator: &str) -> String {
    terms
        .iter()
        .map(Term::render)
        .collect::<Vec<_>>()
        .join(separator)
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(name) => write!(f, "{name}"),
            Term::Atom(atom) => write!(f, ":{atom}"),
            Term::Integer(value) => write!(f, "{value}"),
            Term::Float(value) => write!(f, "{value:?}"),
            Term::Binary => write!(f, "<<>>"),
            Term::List(items) => write!(f, "[{}]", join(items, ", ")),
            Term::Tuple(items) => write!(f, "{{{}}}", join(items, ", ")),
            Term::Map(entries) => {
                let body = entries
                    .iter()
                    .map(|(key, value)| format!("{key} => {value}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "%{{{body}}}")
            }
            Term::Union(alternatives) => write!(f, "{}", join(alternatives, " | ")),
            Term::Ann(left, right) => write!(f, "{left} :: {right}"),
            Term::App(name, args) => write!(f, "{name}({})", join(args, ", ")),
            Term::Default(arg, default) => write!(f, "{arg} \\\\ {default}"),
            Term::Fun(args, ret) => write!(f, "({} -> {ret})", join(args, ", ")),
            Term::When(inner, constraints) => {
                let body = constraints
                    .iter()
                    .map(|(name, ty)| format!("{name}: {ty}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{inner} when {body}")
            }
        }
    }
}
