// crates/rewire-ast/src/sort.rs

//! Sort (type annotation) trees.
//!
//! A sort is either a variable or a name parameterized by other sorts, e.g.
//! `List{S}`. A sort is *concrete* iff no variable occurs transitively.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Mapping from sort-variable names to replacement sorts.
///
/// Ordered so that substitution and display are deterministic.
pub type SortSubstitution = BTreeMap<String, Arc<Sort>>;

/// A sort: the type annotation of a pattern.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Sort {
    /// A sort variable, e.g. `S`.
    Variable {
        /// Variable name.
        name: String,
    },
    /// A named sort applied to ordered sort arguments, e.g. `Map{K,V}`.
    Composite {
        /// Sort constructor name.
        name: String,
        /// Ordered sort arguments (empty for nullary sorts like `Int{}`).
        args: Vec<Arc<Sort>>,
    },
}

impl Sort {
    /// Build a shared sort variable.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::Variable { name: name.into() })
    }

    /// Build a shared composite sort.
    #[must_use]
    pub fn composite(name: impl Into<String>, args: Vec<Arc<Self>>) -> Arc<Self> {
        Arc::new(Self::Composite {
            name: name.into(),
            args,
        })
    }

    /// `true` iff no sort variable occurs anywhere in this sort.
    #[must_use]
    pub fn is_concrete(&self) -> bool {
        match self {
            Self::Variable { .. } => false,
            Self::Composite { args, .. } => args.iter().all(|a| a.is_concrete()),
        }
    }

    /// Substitute sort variables, sharing untouched subtrees.
    ///
    /// Variables absent from `subst` are left in place (and keep their
    /// original allocation).
    #[must_use]
    pub fn substitute(self: &Arc<Self>, subst: &SortSubstitution) -> Arc<Self> {
        match self.as_ref() {
            Self::Variable { name } => subst
                .get(name)
                .map_or_else(|| Arc::clone(self), Arc::clone),
            Self::Composite { name, args } => {
                if self.is_concrete() {
                    return Arc::clone(self);
                }
                let args = args.iter().map(|a| a.substitute(subst)).collect();
                Self::composite(name.clone(), args)
            }
        }
    }
}

// One formatting function per variant; the closed set makes dynamic
// dispatch over "print" behavior unnecessary.
impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable { name } => write_sort_variable(f, name),
            Self::Composite { name, args } => write_composite_sort(f, name, args),
        }
    }
}

fn write_sort_variable(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    f.write_str(name)
}

fn write_composite_sort(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    args: &[Arc<Sort>],
) -> fmt::Result {
    write!(f, "{name}{{")?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{arg}")?;
    }
    f.write_str("}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concreteness_is_transitive() {
        let int = Sort::composite("Int", vec![]);
        assert!(int.is_concrete());

        let list_of_var = Sort::composite("List", vec![Sort::variable("S")]);
        assert!(!list_of_var.is_concrete());

        let list_of_int = Sort::composite("List", vec![Sort::composite("Int", vec![])]);
        assert!(list_of_int.is_concrete());
    }

    #[test]
    fn substitute_shares_concrete_subtrees() {
        let int = Sort::composite("Int", vec![]);
        let list = Sort::composite("List", vec![Arc::clone(&int)]);

        let mut subst = SortSubstitution::new();
        subst.insert("S".to_owned(), Sort::composite("Bool", vec![]));

        let out = list.substitute(&subst);
        // No variables anywhere, so the original allocation is reused.
        assert!(Arc::ptr_eq(&list, &out));
    }

    #[test]
    fn substitute_replaces_variables() {
        let map = Sort::composite("Map", vec![Sort::variable("K"), Sort::variable("V")]);
        let mut subst = SortSubstitution::new();
        subst.insert("K".to_owned(), Sort::composite("Int", vec![]));

        let out = map.substitute(&subst);
        assert_eq!(out.to_string(), "Map{Int{},V}");
    }

    #[test]
    fn display_forms() {
        assert_eq!(Sort::variable("S").to_string(), "S");
        let m = Sort::composite("Map", vec![Sort::variable("K"), Sort::variable("V")]);
        assert_eq!(m.to_string(), "Map{K,V}");
    }
}
