// crates/rewire-ast/src/pattern.rs

//! The term language: composite applications, variables, string literals.
//!
//! `Pattern` trees are acyclic and immutable once built; children are held
//! through `Arc` so substitution results and alias expansions can share
//! subterms instead of deep-copying them.

use crate::symbol::Symbol;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Reserved constructor name the execution engine uses to attach its raw
/// internal representation of a term: `#rawTerm(structural, "payload")`.
///
/// Decoders may strip the wrapper, keeping only the structural child.
pub const RAW_TERM_SYMBOL: &str = "#rawTerm";

/// Mapping from variable names to replacement patterns.
///
/// Ordered so that serialized substitutions are deterministic.
pub type Substitution = BTreeMap<String, Arc<Pattern>>;

/// A term in the rewrite calculus's core language.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// A constructor applied to ordered arguments.
    Composite {
        /// The constructor identity.
        constructor: Symbol,
        /// Ordered arguments; length equals the constructor's declared arity.
        args: Vec<Arc<Pattern>>,
    },
    /// A named variable.
    Variable {
        /// Variable name.
        name: String,
    },
    /// A string literal.
    String {
        /// Literal contents.
        contents: String,
    },
}

impl Pattern {
    /// Build a shared composite pattern.
    #[must_use]
    pub fn composite(constructor: Symbol, args: Vec<Arc<Self>>) -> Arc<Self> {
        Arc::new(Self::Composite { constructor, args })
    }

    /// Build a shared variable pattern.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::Variable { name: name.into() })
    }

    /// Build a shared string-literal pattern.
    #[must_use]
    pub fn string(contents: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::String {
            contents: contents.into(),
        })
    }

    /// Wrap a structural term with the engine's raw-payload convention.
    #[must_use]
    pub fn wrap_raw_term(structural: Arc<Self>, payload: impl Into<String>) -> Arc<Self> {
        let constructor = Symbol::with_sorts(
            RAW_TERM_SYMBOL,
            vec![crate::sort::Sort::variable("S")],
            vec![
                crate::sort::Sort::variable("S"),
                crate::sort::Sort::composite("String", vec![]),
            ],
        );
        Self::composite(constructor, vec![structural, Self::string(payload)])
    }

    /// If this node is a raw-term wrapper, return its structural child.
    #[must_use]
    pub fn raw_term_child(&self) -> Option<&Arc<Self>> {
        match self {
            Self::Composite { constructor, args }
                if constructor.name == RAW_TERM_SYMBOL
                    && args.len() == 2
                    && matches!(args[1].as_ref(), Self::String { .. }) =>
            {
                Some(&args[0])
            }
            _ => None,
        }
    }

    /// `true` iff this tree contains no variable named in `subst`.
    fn untouched_by(&self, subst: &Substitution) -> bool {
        match self {
            Self::Variable { name } => !subst.contains_key(name),
            Self::String { .. } => true,
            Self::Composite { args, .. } => args.iter().all(|a| a.untouched_by(subst)),
        }
    }

    /// Substitute variables, producing a new tree.
    ///
    /// Untouched subtrees are shared with the original (same allocation);
    /// replacement patterns are shared with the substitution's holders.
    #[must_use]
    pub fn substitute(self: &Arc<Self>, subst: &Substitution) -> Arc<Self> {
        if self.untouched_by(subst) {
            return Arc::clone(self);
        }
        match self.as_ref() {
            Self::Variable { name } => subst
                .get(name)
                .map_or_else(|| Arc::clone(self), Arc::clone),
            Self::String { .. } => Arc::clone(self),
            Self::Composite { constructor, args } => Self::composite(
                constructor.clone(),
                args.iter().map(|a| a.substitute(subst)).collect(),
            ),
        }
    }
}

// One formatting function per variant (closed set, exhaustive match).
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Composite { constructor, args } => write_composite(f, constructor, args),
            Self::Variable { name } => write_variable(f, name),
            Self::String { contents } => write_string_literal(f, contents),
        }
    }
}

fn write_composite(
    f: &mut fmt::Formatter<'_>,
    constructor: &Symbol,
    args: &[Arc<Pattern>],
) -> fmt::Result {
    write!(f, "{constructor}(")?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{arg}")?;
    }
    f.write_str(")")
}

fn write_variable(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    f.write_str(name)
}

fn write_string_literal(f: &mut fmt::Formatter<'_>, contents: &str) -> fmt::Result {
    write!(f, "\"{}\"", contents.escape_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::Sort;

    fn two_arg_symbol(name: &str) -> Symbol {
        let s = Sort::composite("S", vec![]);
        Symbol::with_sorts(name, vec![], vec![Arc::clone(&s), s])
    }

    #[test]
    fn display_composite() {
        let p = Pattern::composite(
            two_arg_symbol("f"),
            vec![Pattern::variable("x"), Pattern::string("s")],
        );
        assert_eq!(p.to_string(), "f{}(x,\"s\")");
    }

    #[test]
    fn substitute_shares_replacement_and_untouched_subtrees() {
        let replacement = Pattern::string("hello");
        let untouched = Pattern::variable("y");
        let p = Pattern::composite(
            two_arg_symbol("f"),
            vec![Pattern::variable("x"), Arc::clone(&untouched)],
        );

        let mut subst = Substitution::new();
        subst.insert("x".to_owned(), Arc::clone(&replacement));

        let out = p.substitute(&subst);
        let Pattern::Composite { args, .. } = out.as_ref() else {
            panic!("expected composite");
        };
        assert!(Arc::ptr_eq(&args[0], &replacement));
        assert!(Arc::ptr_eq(&args[1], &untouched));
    }

    #[test]
    fn substitute_without_hits_returns_same_allocation() {
        let p = Pattern::composite(
            two_arg_symbol("f"),
            vec![Pattern::variable("y"), Pattern::string("s")],
        );
        let subst = Substitution::new();
        assert!(Arc::ptr_eq(&p, &p.substitute(&subst)));
    }

    #[test]
    fn raw_term_wrapper_roundtrip() {
        let structural = Pattern::variable("x");
        let wrapped = Pattern::wrap_raw_term(Arc::clone(&structural), "\x01\x02");
        let child = wrapped.raw_term_child().expect("wrapper recognized");
        assert!(Arc::ptr_eq(child, &structural));

        // A plain composite is not mistaken for a wrapper.
        assert!(structural.raw_term_child().is_none());
    }
}
