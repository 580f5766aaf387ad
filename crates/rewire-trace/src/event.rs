// crates/rewire-trace/src/event.rs

//! The closed event model.
//!
//! Four event kinds cover everything the engine reports: rule application,
//! side-condition checks, function calls, and hook (builtin) calls. An
//! argument list entry is either a resolved term or a nested event, so a
//! trace records *how* a value was computed, not just its final value.

use rewire_ast::{Pattern, Substitution};
use rewire_binary::Version;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Path addressing a specific subterm within the configuration tree.
///
/// Each component selects one child, root-first; displayed as `0:1:2`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RelativePosition(pub Vec<u32>);

impl RelativePosition {
    /// The configuration root itself.
    #[inline]
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }
}

impl fmt::Display for RelativePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

/// One execution event, in chronological order within a trace.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TraceEvent {
    /// A rewrite rule fired.
    Rule {
        /// The rule's ordinal in the compiled definition.
        ordinal: u64,
        /// Variable bindings the match produced.
        substitution: Substitution,
    },
    /// A rule's side condition was checked.
    SideCondition {
        /// Ordinal of the rule whose condition was checked.
        ordinal: u64,
        /// Variable bindings in scope for the check.
        substitution: Substitution,
    },
    /// A user-defined function was evaluated.
    Function {
        /// Function name.
        name: String,
        /// Subterm of the configuration the call concerned.
        position: RelativePosition,
        /// Ordered arguments, possibly nested events.
        args: Vec<Argument>,
    },
    /// A builtin (hook) was invoked in place of user rules.
    Hook {
        /// Hook name.
        name: String,
        /// Subterm of the configuration the call concerned.
        position: RelativePosition,
        /// Ordered arguments, possibly nested events.
        args: Vec<Argument>,
        /// The value the hook returned.
        result: Arc<Pattern>,
    },
}

/// An argument list entry: a nested event or a resolved term leaf.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Argument {
    /// How the value was derived.
    Event(Box<TraceEvent>),
    /// The value itself.
    Term(Arc<Pattern>),
}

impl Argument {
    /// Whether this entry is a nested event.
    #[inline]
    #[must_use]
    pub const fn is_event(&self) -> bool {
        matches!(self, Self::Event(_))
    }

    /// Whether this entry is a resolved term.
    #[inline]
    #[must_use]
    pub const fn is_term(&self) -> bool {
        matches!(self, Self::Term(_))
    }
}

/// A fully decoded execution trace.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProofTrace {
    /// Format version the trace was written at.
    pub version: Version,
    /// Setup events preceding the first configuration, if the trace
    /// signalled any.
    pub pre_trace: Option<Vec<TraceEvent>>,
    /// The starting configuration.
    pub initial_config: Arc<Pattern>,
    /// Execution events, in chronological order.
    pub events: Vec<TraceEvent>,
}

// One compact formatting function per variant; intended for tooling
// summaries, not as a parseable syntax.
impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rule {
                ordinal,
                substitution,
            } => write_rewrite(f, "rule", *ordinal, substitution),
            Self::SideCondition {
                ordinal,
                substitution,
            } => write_rewrite(f, "side-condition", *ordinal, substitution),
            Self::Function {
                name,
                position,
                args,
            } => write_call(f, "function", name, position, args),
            Self::Hook {
                name,
                position,
                args,
                result,
            } => {
                write_call(f, "hook", name, position, args)?;
                write!(f, " => {result}")
            }
        }
    }
}

fn write_rewrite(
    f: &mut fmt::Formatter<'_>,
    kind: &str,
    ordinal: u64,
    substitution: &Substitution,
) -> fmt::Result {
    write!(f, "{kind} {ordinal} [{} bindings]", substitution.len())
}

fn write_call(
    f: &mut fmt::Formatter<'_>,
    kind: &str,
    name: &str,
    position: &RelativePosition,
    args: &[Argument],
) -> fmt::Result {
    write!(f, "{kind} {name} @ {position} ({} args)", args.len())
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Event(e) => write!(f, "{e}"),
            Self::Term(t) => write!(f, "{t}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewire_ast::Pattern;

    #[test]
    fn position_display() {
        assert_eq!(RelativePosition(vec![0, 1, 2]).to_string(), "0:1:2");
        assert_eq!(RelativePosition::root().to_string(), "");
    }

    #[test]
    fn event_display_forms() {
        let hook = TraceEvent::Hook {
            name: "MAP.lookup".to_owned(),
            position: RelativePosition(vec![0, 1]),
            args: vec![Argument::Term(Pattern::variable("m"))],
            result: Pattern::string("v"),
        };
        assert_eq!(hook.to_string(), "hook MAP.lookup @ 0:1 (1 args) => \"v\"");

        let rule = TraceEvent::Rule {
            ordinal: 42,
            substitution: Substitution::new(),
        };
        assert_eq!(rule.to_string(), "rule 42 [0 bindings]");
    }
}
