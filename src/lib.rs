//! Four-component hypercomplex numbers with a configurable multiplication
//! table.
//!
//! A [`RuleSet`] defines, for every ordered pair of four named basis units,
//! the signed unit resulting from their product. [`Quaternion`] values built
//! against a rule set support addition, scalar multiplication, the fixed
//! Hamilton product (`*`), the rule-driven
//! [`custom_multiply`](Quaternion::custom_multiply), conjugation, norm,
//! inversion and the derived scalar, vector and outer products. Swapping in
//! a different closed table over the same four symbols yields a different,
//! internally consistent algebra.

#[macro_use]
mod macros;

pub mod error;
pub mod quaternion;
pub mod rules;
pub mod unit;

pub use error::{AlgebraError, RuleError};
pub use quaternion::Quaternion;
pub use rules::{Rule, RuleSet, Sign};
pub use unit::UnitValue;
