//! Multiplication rule sets over four basis units.

use crate::error::RuleError;
use lazy_static::lazy_static;
use std::sync::Arc;

/// The number of basis units in the algebra.
pub const UNIT_COUNT: usize = 4;

/// Sign of the product of two basis units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Pos,
    Neg,
}

impl Sign {
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Pos => 1.0,
            Self::Neg => -1.0,
        }
    }
}

/// Entry in the multiplication table: the signed unit resulting from
/// the product of an ordered pair of units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Sign of the product.
    pub sign: Sign,
    /// Vector slot of the resulting unit.
    pub result: usize,
}

/// A closed multiplication table over four named basis units.
///
/// The order of the unit names defines the vector slot (0..4) each unit's
/// coefficient occupies in a [`Quaternion`](crate::quaternion::Quaternion).
/// The table records, for every ordered pair of units it covers, the signed
/// unit resulting from their product. It need not be total; multiplying a
/// pair without an entry is a
/// [`MissingRule`](crate::error::AlgebraError::MissingRule) error.
///
/// A rule set is immutable once built and shared through an [`Arc`]. Each
/// call to [`RuleSet::new`] yields an independent generation, even for
/// identical configurations: values and units built against one generation
/// cannot be combined with those of another.
#[derive(Debug)]
pub struct RuleSet {
    unit_names: [char; UNIT_COUNT],
    real_units: [bool; UNIT_COUNT],
    table: [[Option<Rule>; UNIT_COUNT]; UNIT_COUNT],
}

lazy_static! {
    static ref HAMILTON: Arc<RuleSet> = Arc::new(RuleSet::hamilton_rule_set());
}

impl RuleSet {
    /// Builds a rule set from the given unit names and pairwise product
    /// rules, with every unit stored in the imaginary flavor.
    ///
    /// Each rule maps an ordered 2-character symbol pair (e.g. `"ij"`) to a
    /// signed 1-character result (`"-k"`, `"+k"`, `" k"` or `"k"`; a missing
    /// sign means positive).
    ///
    /// # Errors
    /// See [`RuleError`].
    pub fn new(
        unit_names: [char; UNIT_COUNT],
        rules: &[(&str, &str)],
    ) -> Result<Arc<Self>, RuleError> {
        Self::build(unit_names, rules, None)
    }

    /// Like [`RuleSet::new`], but marks the named unit's storage flavor as
    /// real instead of imaginary. Conventionally applied to the `r` symbol.
    pub fn with_real_unit(
        unit_names: [char; UNIT_COUNT],
        rules: &[(&str, &str)],
        real_unit: char,
    ) -> Result<Arc<Self>, RuleError> {
        Self::build(unit_names, rules, Some(real_unit))
    }

    /// The canonical Hamilton rule set over the units `r`, `i`, `j`, `k`,
    /// with all 16 ordered pairs defined and `r` marked real.
    ///
    /// All calls share one generation, so values built from separate calls
    /// can be combined freely.
    pub fn hamilton() -> Arc<Self> {
        Arc::clone(&HAMILTON)
    }

    fn build(
        unit_names: [char; UNIT_COUNT],
        rules: &[(&str, &str)],
        real_unit: Option<char>,
    ) -> Result<Arc<Self>, RuleError> {
        for (idx, name) in unit_names.iter().enumerate() {
            if unit_names[..idx].contains(name) {
                return Err(RuleError::DuplicateUnitName(*name));
            }
        }

        let slot_of = |name: char| {
            unit_names
                .iter()
                .position(|&n| n == name)
                .ok_or(RuleError::UnknownUnit(name))
        };

        let mut table = [[None; UNIT_COUNT]; UNIT_COUNT];
        for (pair, result) in rules {
            let mut pair_chars = pair.chars();
            let (Some(left), Some(right), None) =
                (pair_chars.next(), pair_chars.next(), pair_chars.next())
            else {
                return Err(RuleError::MalformedPair((*pair).to_owned()));
            };

            let mut result_chars = result.chars();
            let (sign, result_name) =
                match (result_chars.next(), result_chars.next(), result_chars.next()) {
                    (Some(name), None, None) => (Sign::Pos, name),
                    (Some('-'), Some(name), None) => (Sign::Neg, name),
                    (Some('+' | ' '), Some(name), None) => (Sign::Pos, name),
                    _ => return Err(RuleError::MalformedResult((*result).to_owned())),
                };

            table[slot_of(left)?][slot_of(right)?] = Some(Rule {
                sign,
                result: slot_of(result_name)?,
            });
        }

        let mut real_units = [false; UNIT_COUNT];
        if let Some(name) = real_unit {
            real_units[slot_of(name)?] = true;
        }

        log::debug!("Installed multiplication rules over units {unit_names:?}");

        Ok(Arc::new(Self {
            unit_names,
            real_units,
            table,
        }))
    }

    fn hamilton_rule_set() -> Self {
        use Sign::{Neg, Pos};

        const R: usize = 0;
        const I: usize = 1;
        const J: usize = 2;
        const K: usize = 3;
        let rule = |sign, result| Some(Rule { sign, result });

        Self {
            unit_names: ['r', 'i', 'j', 'k'],
            real_units: [true, false, false, false],
            table: [
                [rule(Pos, R), rule(Pos, I), rule(Pos, J), rule(Pos, K)],
                [rule(Pos, I), rule(Neg, R), rule(Pos, K), rule(Neg, J)],
                [rule(Pos, J), rule(Neg, K), rule(Neg, R), rule(Pos, I)],
                [rule(Pos, K), rule(Pos, J), rule(Neg, I), rule(Neg, R)],
            ],
        }
    }

    /// The unit names in vector slot order.
    #[inline]
    pub fn unit_names(&self) -> &[char; UNIT_COUNT] {
        &self.unit_names
    }

    /// The vector slot of the named unit, if it exists.
    #[inline]
    pub fn slot_of(&self, name: char) -> Option<usize> {
        self.unit_names.iter().position(|&n| n == name)
    }

    /// The name of the unit occupying the given slot.
    ///
    /// # Panics
    /// If `slot >= 4`.
    #[inline]
    pub fn name_of(&self, slot: usize) -> char {
        self.unit_names[slot]
    }

    /// Whether the unit in the given slot stores its coefficient in the
    /// real flavor.
    ///
    /// # Panics
    /// If `slot >= 4`.
    #[inline]
    pub fn is_real(&self, slot: usize) -> bool {
        self.real_units[slot]
    }

    /// The table entry for the ordered pair of unit slots, or `None` if the
    /// pair is not covered by the table.
    ///
    /// # Panics
    /// If either slot is `>= 4`.
    #[inline]
    pub fn rule(&self, left: usize, right: usize) -> Option<Rule> {
        self.table[left][right]
    }
}
