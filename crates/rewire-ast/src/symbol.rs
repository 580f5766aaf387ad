// crates/rewire-ast/src/symbol.rs

//! Constructor identities (`Symbol`) with their sort signatures.

use crate::sort::{Sort, SortSubstitution};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A constructor identity: name plus the sorts of its arguments and the
/// formal sort parameters it was instantiated with.
///
/// The declared arity of a symbol is the length of `sort_arguments`; a
/// composite pattern built from this symbol must carry exactly that many
/// arguments.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Symbol {
    /// Constructor name.
    pub name: String,
    /// Formal sort parameters, e.g. the `{S}` in `cons{S}`.
    pub formal_parameters: Vec<Arc<Sort>>,
    /// Ordered sorts of the symbol's pattern arguments.
    pub sort_arguments: Vec<Arc<Sort>>,
}

impl Symbol {
    /// Construct a symbol with no sort information (arity 0).
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            formal_parameters: Vec::new(),
            sort_arguments: Vec::new(),
        }
    }

    /// Construct a symbol with explicit formal parameters and argument sorts.
    #[must_use]
    pub fn with_sorts(
        name: impl Into<String>,
        formal_parameters: Vec<Arc<Sort>>,
        sort_arguments: Vec<Arc<Sort>>,
    ) -> Self {
        Self {
            name: name.into(),
            formal_parameters,
            sort_arguments,
        }
    }

    /// Declared arity: the number of pattern arguments this symbol takes.
    #[inline]
    #[must_use]
    pub fn arity(&self) -> usize {
        self.sort_arguments.len()
    }

    /// `true` iff no free sort variable occurs in the signature.
    #[must_use]
    pub fn is_concrete(&self) -> bool {
        self.formal_parameters.iter().all(|s| s.is_concrete())
            && self.sort_arguments.iter().all(|s| s.is_concrete())
    }

    /// Instantiate the signature under a sort substitution.
    #[must_use]
    pub fn substitute(&self, subst: &SortSubstitution) -> Self {
        Self {
            name: self.name.clone(),
            formal_parameters: self
                .formal_parameters
                .iter()
                .map(|s| s.substitute(subst))
                .collect(),
            sort_arguments: self
                .sort_arguments
                .iter()
                .map(|s| s.substitute(subst))
                .collect(),
        }
    }
}

impl fmt::Display for Symbol {
    /// Textual form `name{P1,P2}` (formal parameters only, as in the
    /// calculus's surface syntax).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{", self.name)?;
        for (i, p) in self.formal_parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{p}")?;
        }
        f.write_str("}")
    }
}
