//! Basis unit components.

use crate::{
    error::AlgebraError,
    rules::RuleSet,
};
use std::{fmt, sync::Arc};

/// One basis unit of the algebra carrying a signed scalar coefficient.
///
/// A unit's kind is the pair of its owning [`RuleSet`] generation and its
/// vector slot; multiplying two units looks the ordered pair of kinds up in
/// the generation's table. Units from different generations cannot be
/// multiplied.
///
/// The coefficient is kept in either an imaginary or a real storage flavor
/// depending on how the slot is configured in the rule set. This is pure
/// bookkeeping: [`UnitValue::value`] always returns the plain scalar.
#[derive(Debug, Clone)]
pub struct UnitValue {
    rules: Arc<RuleSet>,
    slot: usize,
    stored: Stored,
}

/// Storage flavor for a unit coefficient.
#[derive(Debug, Clone, Copy)]
enum Stored {
    Imaginary(f64),
    Real(f64),
}

impl Stored {
    #[inline]
    fn new(value: f64, real: bool) -> Self {
        if real {
            Self::Real(value)
        } else {
            Self::Imaginary(value)
        }
    }

    #[inline]
    fn value(self) -> f64 {
        match self {
            Self::Imaginary(value) | Self::Real(value) => value,
        }
    }

    #[inline]
    fn with_value(self, value: f64) -> Self {
        match self {
            Self::Imaginary(_) => Self::Imaginary(value),
            Self::Real(_) => Self::Real(value),
        }
    }
}

impl UnitValue {
    /// Creates a unit of the named kind with the given coefficient.
    ///
    /// # Errors
    /// [`AlgebraError::UnknownUnit`] if the rule set has no unit with this
    /// name.
    pub fn new(rules: &Arc<RuleSet>, name: char, value: f64) -> Result<Self, AlgebraError> {
        let slot = rules
            .slot_of(name)
            .ok_or(AlgebraError::UnknownUnit(name))?;
        Ok(Self::from_slot(Arc::clone(rules), slot, value))
    }

    pub(crate) fn from_slot(rules: Arc<RuleSet>, slot: usize, value: f64) -> Self {
        let stored = Stored::new(value, rules.is_real(slot));
        Self { rules, slot, stored }
    }

    /// The rule set generation this unit belongs to.
    #[inline]
    pub fn rules(&self) -> &Arc<RuleSet> {
        &self.rules
    }

    /// The symbol of this unit's kind.
    #[inline]
    pub fn name(&self) -> char {
        self.rules.name_of(self.slot)
    }

    /// The vector slot of this unit's kind.
    #[inline]
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// The scalar coefficient, independent of storage flavor.
    #[inline]
    pub fn value(&self) -> f64 {
        self.stored.value()
    }

    /// Whether the coefficient is kept in the imaginary storage flavor.
    #[inline]
    pub fn is_imaginary(&self) -> bool {
        matches!(self.stored, Stored::Imaginary(_))
    }

    /// Overwrites the coefficient in place.
    #[inline]
    pub fn reassign(&mut self, value: f64) -> &mut Self {
        self.stored = self.stored.with_value(value);
        self
    }

    /// Flips the sign of the coefficient in place.
    ///
    /// For a sign-flipped copy, use [`UnitValue::negated`].
    #[inline]
    pub fn negate(&mut self) -> &mut Self {
        self.stored = self.stored.with_value(-self.stored.value());
        self
    }

    /// Returns a copy with the sign of the coefficient flipped.
    #[inline]
    pub fn negated(&self) -> Self {
        let mut negated = self.clone();
        negated.negate();
        negated
    }

    /// Multiplies this unit by a plain scalar, yielding a plain scalar.
    ///
    /// This is the linear escape hatch of unit multiplication: the result
    /// is not a unit.
    #[inline]
    pub fn scale(&self, factor: f64) -> f64 {
        factor * self.value()
    }

    /// Multiplies this unit by another according to the rule table of their
    /// shared generation.
    ///
    /// The result is a unit of the kind the table names for the ordered
    /// kind pair, with coefficient `sign * self.value() * other.value()`.
    ///
    /// # Errors
    /// - [`AlgebraError::RuleSetMismatch`] if the operands belong to
    ///   different generations.
    /// - [`AlgebraError::MissingRule`] if the table has no entry for the
    ///   ordered pair.
    pub fn multiply(&self, other: &UnitValue) -> Result<UnitValue, AlgebraError> {
        if !Arc::ptr_eq(&self.rules, &other.rules) {
            return Err(AlgebraError::RuleSetMismatch);
        }

        let rule = self
            .rules
            .rule(self.slot, other.slot)
            .ok_or(AlgebraError::MissingRule {
                left: self.name(),
                right: other.name(),
            })?;

        Ok(Self::from_slot(
            Arc::clone(&self.rules),
            rule.result,
            rule.sign.as_f64() * self.value() * other.value(),
        ))
    }
}

impl fmt::Display for UnitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value(), self.name())
    }
}
