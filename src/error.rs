//! Error types for rule set construction and algebra operations.

use thiserror::Error;

/// Errors that can occur while building a [`RuleSet`](crate::rules::RuleSet).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("duplicate unit name `{0}` in rule set")]
    DuplicateUnitName(char),

    #[error("malformed rule key `{0}` (expected two unit symbols)")]
    MalformedPair(String),

    #[error("malformed rule result `{0}` (expected an optional sign and one unit symbol)")]
    MalformedResult(String),

    #[error("rule references unknown unit `{0}`")]
    UnknownUnit(char),
}

/// Errors that can occur when operating on units and algebra values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// The ordered unit pair has no entry in the multiplication table.
    #[error("no multiplication rule for ordered unit pair `{left}{right}`")]
    MissingRule { left: char, right: char },

    /// The operands were built against different rule set generations.
    #[error("operands belong to different rule set generations")]
    RuleSetMismatch,

    /// The unit name does not occur in the rule set.
    #[error("no unit named `{0}` in the rule set")]
    UnknownUnit(char),

    /// Attempted to invert a value with zero norm.
    #[error("cannot invert a value with zero norm")]
    DegenerateInversion,
}
