//! Algebra values over a configurable rule set.

use crate::{
    error::AlgebraError,
    rules::{RuleSet, UNIT_COUNT},
    unit::UnitValue,
};
use nalgebra::{Vector3, Vector4};
use std::{fmt, sync::Arc};

/// A general element of the configured four-component algebra.
///
/// The components are real coefficients indexed by the vector slots of the
/// owning [`RuleSet`] generation; slot 0 is the real part by convention.
/// The value keeps a shared handle to its generation, and operations that
/// combine two values require both to belong to the same generation.
///
/// The `*`, `+` and `-` operators use fixed linear-algebra formulas; in
/// particular `*` between two values is always the canonical Hamilton
/// product regardless of the configured table. The rule-driven alternative
/// is [`Quaternion::custom_multiply`].
///
/// Equality between values compares all components after rounding to 6
/// decimal digits. Equality against a plain `f64` compares the rounded real
/// part only and ignores the vector part entirely; this asymmetric rule is
/// deliberate and relied on by inverse round-trip checks.
#[derive(Debug, Clone)]
pub struct Quaternion {
    components: Vector4<f64>,
    rules: Arc<RuleSet>,
}

/// Rounds to 6 decimal digits, the tolerance used by value equality and
/// display.
#[inline]
fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

fn assert_same_rules(lhs: &Quaternion, rhs: &Quaternion) {
    assert!(
        Arc::ptr_eq(&lhs.rules, &rhs.rules),
        "operands belong to different rule set generations"
    );
}

/// The canonical Hamilton product of two coefficient vectors.
fn hamilton_product(a: &Vector4<f64>, b: &Vector4<f64>) -> Vector4<f64> {
    Vector4::new(
        a[0] * b[0] - a[1] * b[1] - a[2] * b[2] - a[3] * b[3],
        a[0] * b[1] + a[1] * b[0] + a[2] * b[3] - a[3] * b[2],
        a[0] * b[2] - a[1] * b[3] + a[2] * b[0] + a[3] * b[1],
        a[0] * b[3] + a[1] * b[2] - a[2] * b[1] + a[3] * b[0],
    )
}

impl Quaternion {
    /// Creates the zero value of the given generation.
    #[inline]
    pub fn zero(rules: Arc<RuleSet>) -> Self {
        Self::from_vector(rules, Vector4::zeros())
    }

    /// Creates a value from the four slot coefficients in rule set order.
    #[inline]
    pub fn new(rules: Arc<RuleSet>, a: f64, b: f64, c: f64, d: f64) -> Self {
        Self::from_vector(rules, Vector4::new(a, b, c, d))
    }

    /// Creates a value from a coefficient vector in rule set order.
    #[inline]
    pub fn from_vector(rules: Arc<RuleSet>, components: Vector4<f64>) -> Self {
        Self { components, rules }
    }

    /// Consuming variant of [`Quaternion::set_unit`] for named-coefficient
    /// construction: `Quaternion::zero(rules).with_unit('i', 2.0)?`.
    pub fn with_unit(mut self, name: char, value: f64) -> Result<Self, AlgebraError> {
        self.set_unit(name, value)?;
        Ok(self)
    }

    /// The rule set generation this value belongs to.
    #[inline]
    pub fn rules(&self) -> &Arc<RuleSet> {
        &self.rules
    }

    /// The coefficient vector in rule set order.
    #[inline]
    pub fn components(&self) -> &Vector4<f64> {
        &self.components
    }

    /// The coefficient of slot 0.
    #[inline]
    pub fn real_part(&self) -> f64 {
        self.components[0]
    }

    /// The coefficients of slots 1..4.
    #[inline]
    pub fn vector_part(&self) -> Vector3<f64> {
        Vector3::new(self.components[1], self.components[2], self.components[3])
    }

    /// The Euclidean length of the full coefficient vector.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.components.norm()
    }

    /// Returns the value with the vector part negated.
    pub fn conjugate(&self) -> Self {
        Self::new(
            Arc::clone(&self.rules),
            self.components[0],
            -self.components[1],
            -self.components[2],
            -self.components[3],
        )
    }

    /// Returns the multiplicative inverse, `conjugate / norm²`.
    ///
    /// # Errors
    /// [`AlgebraError::DegenerateInversion`] if the norm is zero.
    pub fn inverse(&self) -> Result<Self, AlgebraError> {
        let norm = self.norm();
        if norm == 0.0 {
            return Err(AlgebraError::DegenerateInversion);
        }
        Ok(self.conjugate() * (1.0 / (norm * norm)))
    }

    /// The coefficient of the named unit's slot.
    ///
    /// # Errors
    /// [`AlgebraError::UnknownUnit`] if the name is not in the rule set.
    pub fn component(&self, name: char) -> Result<f64, AlgebraError> {
        let slot = self.slot_of(name)?;
        Ok(self.components[slot])
    }

    /// Assigns the named unit's slot.
    ///
    /// # Errors
    /// [`AlgebraError::UnknownUnit`] if the name is not in the rule set.
    pub fn set_unit(&mut self, name: char, value: f64) -> Result<(), AlgebraError> {
        let slot = self.slot_of(name)?;
        self.components[slot] = value;
        Ok(())
    }

    /// The named unit's component wrapped in its unit kind.
    ///
    /// # Errors
    /// [`AlgebraError::UnknownUnit`] if the name is not in the rule set.
    pub fn unit(&self, name: char) -> Result<UnitValue, AlgebraError> {
        let slot = self.slot_of(name)?;
        Ok(UnitValue::from_slot(
            Arc::clone(&self.rules),
            slot,
            self.components[slot],
        ))
    }

    /// A new value holding only the named unit's component, all other slots
    /// zero.
    ///
    /// # Errors
    /// [`AlgebraError::UnknownUnit`] if the name is not in the rule set.
    pub fn unit_component(&self, name: char) -> Result<Quaternion, AlgebraError> {
        let slot = self.slot_of(name)?;
        let mut components = Vector4::zeros();
        components[slot] = self.components[slot];
        Ok(Self::from_vector(Arc::clone(&self.rules), components))
    }

    /// Iterates over the four components, each wrapped in its unit kind.
    ///
    /// The units are recomputed from the current components on every call,
    /// so the iterator is finite and restartable.
    pub fn units(&self) -> impl Iterator<Item = UnitValue> + '_ {
        (0..UNIT_COUNT)
            .map(|slot| UnitValue::from_slot(Arc::clone(&self.rules), slot, self.components[slot]))
    }

    /// Multiplies by expanding both operands into their unit components and
    /// applying the rule table to all 16 ordered unit pairs, summing the
    /// results.
    ///
    /// Unlike the `*` operator, the outcome depends on the configured table:
    /// under [`RuleSet::hamilton`] it coincides with the Hamilton product,
    /// under other tables it need not.
    ///
    /// # Errors
    /// - [`AlgebraError::RuleSetMismatch`] if the operands belong to
    ///   different generations.
    /// - [`AlgebraError::MissingRule`] if the table lacks an entry for a
    ///   required ordered unit pair.
    pub fn custom_multiply(&self, other: &Quaternion) -> Result<Quaternion, AlgebraError> {
        if !Arc::ptr_eq(&self.rules, &other.rules) {
            return Err(AlgebraError::RuleSetMismatch);
        }

        let mut accumulator = Self::zero(Arc::clone(&self.rules));
        for x in self.units() {
            for y in other.units() {
                let product = x.multiply(&y)?;
                accumulator.components[product.slot()] += product.value();
            }
        }
        Ok(accumulator)
    }

    /// The symmetrized product
    /// `(conjugate(self) ∘ other + conjugate(other) ∘ self) / 2`, with `∘`
    /// the rule-driven multiplication.
    pub fn scalar_product(&self, other: &Quaternion) -> Result<Quaternion, AlgebraError> {
        Ok((self.conjugate().custom_multiply(other)?
            + other.conjugate().custom_multiply(self)?)
            * 0.5)
    }

    /// The antisymmetrized product
    /// `(conjugate(self) ∘ other - conjugate(other) ∘ self) / 2`, with `∘`
    /// the rule-driven multiplication.
    pub fn outer_product(&self, other: &Quaternion) -> Result<Quaternion, AlgebraError> {
        Ok((self.conjugate().custom_multiply(other)?
            - other.conjugate().custom_multiply(self)?)
            * 0.5)
    }

    /// The commutator-based product `(self ∘ other - other ∘ self) / 2`,
    /// with `∘` the rule-driven multiplication.
    pub fn vector_product(&self, other: &Quaternion) -> Result<Quaternion, AlgebraError> {
        Ok((self.custom_multiply(other)? - other.custom_multiply(self)?) * 0.5)
    }

    fn slot_of(&self, name: char) -> Result<usize, AlgebraError> {
        self.rules
            .slot_of(name)
            .ok_or(AlgebraError::UnknownUnit(name))
    }
}

impl_binop!(Add, add, Quaternion, Quaternion, Quaternion, |a, b| {
    assert_same_rules(a, b);
    Quaternion::from_vector(Arc::clone(&a.rules), a.components + b.components)
});

impl_binop!(Add, add, Quaternion, f64, Quaternion, |a, b| {
    let mut components = a.components;
    components[0] += *b;
    Quaternion::from_vector(Arc::clone(&a.rules), components)
});

impl_binop!(Sub, sub, Quaternion, Quaternion, Quaternion, |a, b| {
    assert_same_rules(a, b);
    Quaternion::from_vector(Arc::clone(&a.rules), a.components - b.components)
});

impl_binop!(Sub, sub, Quaternion, f64, Quaternion, |a, b| {
    let mut components = a.components;
    components[0] -= *b;
    Quaternion::from_vector(Arc::clone(&a.rules), components)
});

impl_binop!(Mul, mul, Quaternion, Quaternion, Quaternion, |a, b| {
    assert_same_rules(a, b);
    Quaternion::from_vector(
        Arc::clone(&a.rules),
        hamilton_product(&a.components, &b.components),
    )
});

impl_binop!(Mul, mul, Quaternion, f64, Quaternion, |a, b| {
    Quaternion::from_vector(Arc::clone(&a.rules), a.components * *b)
});

impl_unary_op!(Neg, neg, Quaternion, Quaternion, |this| {
    Quaternion::from_vector(Arc::clone(&this.rules), -this.components)
});

impl_binop_assign!(AddAssign, add_assign, Quaternion, Quaternion, |lhs, rhs| {
    assert_same_rules(lhs, rhs);
    lhs.components += rhs.components;
});

impl_binop_assign!(AddAssign, add_assign, Quaternion, f64, |lhs, rhs| {
    lhs.components[0] += *rhs;
});

impl_binop_assign!(AddAssign, add_assign, Quaternion, UnitValue, |lhs, rhs| {
    assert!(
        Arc::ptr_eq(&lhs.rules, rhs.rules()),
        "unit operand belongs to a different rule set generation"
    );
    lhs.components[rhs.slot()] += rhs.value();
});

impl_binop_assign!(SubAssign, sub_assign, Quaternion, Quaternion, |lhs, rhs| {
    assert_same_rules(lhs, rhs);
    lhs.components -= rhs.components;
});

impl_binop_assign!(SubAssign, sub_assign, Quaternion, f64, |lhs, rhs| {
    lhs.components[0] -= *rhs;
});

impl_binop_assign!(SubAssign, sub_assign, Quaternion, UnitValue, |lhs, rhs| {
    assert!(
        Arc::ptr_eq(&lhs.rules, rhs.rules()),
        "unit operand belongs to a different rule set generation"
    );
    lhs.components[rhs.slot()] -= rhs.value();
});

impl_binop_assign!(MulAssign, mul_assign, Quaternion, Quaternion, |lhs, rhs| {
    assert_same_rules(lhs, rhs);
    lhs.components = hamilton_product(&lhs.components, &rhs.components);
});

impl_binop_assign!(MulAssign, mul_assign, Quaternion, f64, |lhs, rhs| {
    lhs.components *= *rhs;
});

impl PartialEq for Quaternion {
    fn eq(&self, other: &Self) -> bool {
        self.components
            .iter()
            .zip(other.components.iter())
            .all(|(a, b)| round6(*a) == round6(*b))
    }
}

impl PartialEq<f64> for Quaternion {
    /// Compares the rounded real part only; the vector part is ignored.
    fn eq(&self, other: &f64) -> bool {
        round6(self.real_part()) == *other
    }
}

impl PartialEq<Quaternion> for f64 {
    fn eq(&self, other: &Quaternion) -> bool {
        other == self
    }
}

impl_abs_diff_eq!(Quaternion, |a, b, epsilon| {
    a.components.abs_diff_eq(&b.components, epsilon)
});

impl_relative_eq!(Quaternion, |a, b, epsilon, max_relative| {
    a.components.relative_eq(&b.components, epsilon, max_relative)
});

impl fmt::Display for Quaternion {
    /// Renders as a signed sum of the nonzero `value·name` terms in slot
    /// order, values rounded to 6 digits, without a leading `+`. The zero
    /// value renders as `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut any_term = false;
        for (slot, name) in self.rules.unit_names().iter().enumerate() {
            let value = round6(self.components[slot]);
            if value == 0.0 {
                continue;
            }
            if any_term {
                write!(f, "{}", if value < 0.0 { " - " } else { " + " })?;
            } else if value < 0.0 {
                write!(f, "-")?;
            }
            write!(f, "{}{}", value.abs(), name)?;
            any_term = true;
        }
        if !any_term {
            write!(f, "0")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f64 = 1e-6;

    fn q(a: f64, b: f64, c: f64, d: f64) -> Quaternion {
        Quaternion::new(RuleSet::hamilton(), a, b, c, d)
    }

    #[test]
    fn construction_and_views_work() {
        let value = q(1.0, 2.0, 3.0, 4.0);

        assert_eq!(value.real_part(), 1.0);
        assert_eq!(value.vector_part(), Vector3::new(2.0, 3.0, 4.0));
        assert_abs_diff_eq!(value.norm(), 30.0_f64.sqrt(), epsilon = EPSILON);
    }

    #[test]
    fn zero_value_has_zero_components() {
        let zero = Quaternion::zero(RuleSet::hamilton());
        assert_eq!(zero.components(), &Vector4::zeros());
    }

    #[test]
    fn named_coefficient_construction_works() {
        let value = Quaternion::zero(RuleSet::hamilton())
            .with_unit('r', 1.0)
            .unwrap()
            .with_unit('j', -2.0)
            .unwrap();

        assert_eq!(value, q(1.0, 0.0, -2.0, 0.0));
    }

    #[test]
    fn set_unit_rejects_unknown_names() {
        let mut value = q(0.0, 0.0, 0.0, 0.0);
        assert_eq!(
            value.set_unit('x', 1.0).unwrap_err(),
            AlgebraError::UnknownUnit('x')
        );
    }

    #[test]
    fn component_reads_the_named_slot() {
        let value = q(1.0, 2.0, 3.0, 4.0);
        assert_eq!(value.component('r').unwrap(), 1.0);
        assert_eq!(value.component('k').unwrap(), 4.0);
        assert_eq!(
            value.component('x').unwrap_err(),
            AlgebraError::UnknownUnit('x')
        );
    }

    #[test]
    fn conjugate_negates_the_vector_part() {
        let value = q(1.0, 2.0, 3.0, 4.0);
        let conjugate = value.conjugate();

        assert_eq!(conjugate, q(1.0, -2.0, -3.0, -4.0));
    }

    #[test]
    fn conjugate_is_an_involution() {
        let value = q(1.5, -2.5, 3.5, -4.5);
        assert_eq!(value.conjugate().conjugate(), value);
    }

    #[test]
    fn norm_is_invariant_under_conjugation() {
        let value = q(1.0, -2.0, 3.0, -4.0);
        assert_abs_diff_eq!(value.norm(), value.conjugate().norm(), epsilon = EPSILON);
    }

    #[test]
    fn hamilton_product_matches_the_reference_scenario() {
        let q1 = q(1.0, 2.0, 3.0, 4.0);
        let q2 = q(5.0, 6.0, 7.0, 8.0);

        let product = &q1 * &q2;
        assert_eq!(product, q(-60.0, 12.0, 30.0, 24.0));
    }

    #[test]
    fn custom_multiply_reproduces_the_hamilton_product() {
        let q1 = q(1.0, 2.0, 3.0, 4.0);
        let q2 = q(5.0, 6.0, 7.0, 8.0);

        let standard = &q1 * &q2;
        let custom = q1.custom_multiply(&q2).unwrap();
        assert_eq!(custom, standard);
    }

    #[test]
    fn custom_multiply_follows_an_alternate_table() {
        // Like Hamilton, except i² = j, j² = k, k² = i.
        let rules = RuleSet::with_real_unit(
            ['r', 'i', 'j', 'k'],
            &[
                ("ij", " k"), ("jk", " i"), ("ki", " j"),
                ("ik", "-j"), ("kj", "-i"), ("ji", "-k"),
                ("ri", " i"), ("ir", " i"), ("jr", " j"),
                ("rj", " j"), ("kr", " k"), ("rk", " k"),
                ("ii", " j"), ("jj", " k"), ("kk", " i"), ("rr", " r"),
            ],
            'r',
        )
        .unwrap();

        let q1 = Quaternion::new(Arc::clone(&rules), 1.0, 2.0, 3.0, 4.0);
        let q2 = Quaternion::new(Arc::clone(&rules), 5.0, 6.0, 7.0, 8.0);

        let standard = &q1 * &q2;
        let custom = q1.custom_multiply(&q2).unwrap();

        // The changed squares move the a1*b1, a2*b2, a3*b3 terms out of the
        // real slot and into the j, k and i slots respectively.
        assert_ne!(custom, standard);
        assert_eq!(
            custom,
            Quaternion::new(Arc::clone(&rules), 5.0, 44.0, 42.0, 45.0)
        );
    }

    #[test]
    fn custom_multiply_with_a_partial_table_reports_the_missing_pair() {
        let rules = RuleSet::new(['r', 'i', 'j', 'k'], &[("rr", "r")]).unwrap();
        let q1 = Quaternion::new(Arc::clone(&rules), 1.0, 2.0, 0.0, 0.0);
        let q2 = Quaternion::new(Arc::clone(&rules), 3.0, 0.0, 0.0, 0.0);

        assert_eq!(
            q1.custom_multiply(&q2).unwrap_err(),
            AlgebraError::MissingRule { left: 'r', right: 'i' }
        );
    }

    #[test]
    fn custom_multiply_across_generations_is_rejected() {
        let first = RuleSet::new(['r', 'i', 'j', 'k'], &[]).unwrap();
        let second = RuleSet::new(['r', 'i', 'j', 'k'], &[]).unwrap();
        let q1 = Quaternion::zero(first);
        let q2 = Quaternion::zero(second);

        assert_eq!(
            q1.custom_multiply(&q2).unwrap_err(),
            AlgebraError::RuleSetMismatch
        );
    }

    #[test]
    fn scalar_multiplication_scales_all_components() {
        let value = q(1.0, 2.0, 3.0, 4.0);
        assert_eq!(&value * 2.0, q(2.0, 4.0, 6.0, 8.0));

        let mut scaled = value;
        scaled *= 0.5;
        assert_eq!(scaled, q(0.5, 1.0, 1.5, 2.0));
    }

    #[test]
    fn in_place_hamilton_product_matches_the_pure_one() {
        let q1 = q(1.0, 2.0, 3.0, 4.0);
        let q2 = q(5.0, 6.0, 7.0, 8.0);

        let mut in_place = q1.clone();
        in_place *= &q2;
        assert_eq!(in_place, &q1 * &q2);
    }

    #[test]
    fn addition_is_component_wise() {
        let q1 = q(1.0, 2.0, 3.0, 4.0);
        let q2 = q(5.0, 6.0, 7.0, 8.0);

        assert_eq!(&q1 + &q2, q(6.0, 8.0, 10.0, 12.0));
        assert_eq!(&q2 - &q1, q(4.0, 4.0, 4.0, 4.0));

        let mut sum = q1.clone();
        sum += &q2;
        assert_eq!(sum, q(6.0, 8.0, 10.0, 12.0));
        sum -= &q2;
        assert_eq!(sum, q1);
    }

    #[test]
    fn adding_a_scalar_only_touches_the_real_slot() {
        let value = q(1.0, 2.0, 3.0, 4.0);

        assert_eq!(&value + 10.0, q(11.0, 2.0, 3.0, 4.0));
        assert_eq!(&value - 1.0, q(0.0, 2.0, 3.0, 4.0));

        let mut shifted = value;
        shifted += 5.0;
        assert_eq!(shifted, q(6.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn adding_a_unit_mutates_its_slot_in_place() {
        let rules = RuleSet::hamilton();
        let mut value = Quaternion::new(Arc::clone(&rules), 1.0, 2.0, 3.0, 4.0);
        let bump = UnitValue::new(&rules, 'i', 5.0).unwrap();

        value += &bump;
        assert_eq!(value, Quaternion::new(Arc::clone(&rules), 1.0, 7.0, 3.0, 4.0));

        value -= &bump;
        assert_eq!(value, Quaternion::new(rules, 1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    #[should_panic(expected = "different rule set generations")]
    fn adding_values_across_generations_panics() {
        let first = RuleSet::new(['r', 'i', 'j', 'k'], &[]).unwrap();
        let second = RuleSet::new(['r', 'i', 'j', 'k'], &[]).unwrap();
        let _ = Quaternion::zero(first) + Quaternion::zero(second);
    }

    #[test]
    fn negation_negates_every_component() {
        let value = q(1.0, -2.0, 3.0, -4.0);
        assert_eq!(-&value, q(-1.0, 2.0, -3.0, 4.0));
    }

    #[test]
    fn inverse_round_trip_yields_the_scalar_one() {
        let value = q(1.0, 2.0, 3.0, 4.0);
        let product = value.inverse().unwrap() * &value;

        assert_eq!(product, 1.0);
        assert_eq!(product, q(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn inverting_a_zero_norm_value_fails() {
        let zero = Quaternion::zero(RuleSet::hamilton());
        assert_eq!(
            zero.inverse().unwrap_err(),
            AlgebraError::DegenerateInversion
        );
    }

    #[test]
    fn scalar_product_of_the_reference_values_is_their_dot_product() {
        let q1 = q(1.0, 2.0, 3.0, 4.0);
        let q2 = q(5.0, 6.0, 7.0, 8.0);

        let product = q1.scalar_product(&q2).unwrap();
        assert_eq!(product, q(70.0, 0.0, 0.0, 0.0));
        assert_eq!(product, 70.0);
    }

    #[test]
    fn vector_product_of_the_reference_values_is_their_cross_product() {
        let q1 = q(1.0, 2.0, 3.0, 4.0);
        let q2 = q(5.0, 6.0, 7.0, 8.0);

        let product = q1.vector_product(&q2).unwrap();
        assert_eq!(product, q(0.0, -4.0, 8.0, -4.0));
    }

    #[test]
    fn outer_product_of_the_reference_values_matches_the_closed_form() {
        let q1 = q(1.0, 2.0, 3.0, 4.0);
        let q2 = q(5.0, 6.0, 7.0, 8.0);

        let product = q1.outer_product(&q2).unwrap();
        assert_eq!(product, q(0.0, 0.0, -16.0, -8.0));
    }

    #[test]
    fn equality_tolerates_noise_below_the_rounding_threshold() {
        let value = q(1.0, 2.0, 3.0, 4.0);
        let noisy = q(1.0 + 1e-9, 2.0 - 1e-9, 3.0, 4.0);
        let off = q(1.001, 2.0, 3.0, 4.0);

        assert_eq!(value, noisy);
        assert_eq!(noisy, value);
        assert_ne!(value, off);
    }

    #[test]
    fn scalar_equality_ignores_the_vector_part() {
        let value = q(3.0, 1.0, 2.0, 3.0);
        assert_eq!(value, 3.0);
        assert_eq!(3.0, value);
        assert_ne!(value, 4.0);

        let pure = q(3.0, 0.0, 0.0, 0.0);
        assert_eq!(pure, 3.0);
    }

    #[test]
    fn units_iterator_is_finite_and_restartable() {
        let value = q(1.0, 2.0, 3.0, 4.0);

        let names: Vec<char> = value.units().map(|unit| unit.name()).collect();
        assert_eq!(names, vec!['r', 'i', 'j', 'k']);

        let values: Vec<f64> = value.units().map(|unit| unit.value()).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn unit_accessor_wraps_the_current_component() {
        let value = q(1.0, 2.0, 3.0, 4.0);
        let j = value.unit('j').unwrap();

        assert_eq!(j.name(), 'j');
        assert_eq!(j.value(), 3.0);
    }

    #[test]
    fn unit_component_projects_a_single_slot() {
        let value = q(1.0, 2.0, 3.0, 4.0);
        let projection = value.unit_component('j').unwrap();

        assert_eq!(projection, q(0.0, 0.0, 3.0, 0.0));
    }

    #[test]
    fn display_renders_nonzero_terms_in_slot_order() {
        assert_eq!(q(1.0, 2.0, 3.0, 4.0).to_string(), "1r + 2i + 3j + 4k");
        assert_eq!(q(-60.0, 12.0, 30.0, 24.0).to_string(), "-60r + 12i + 30j + 24k");
        assert_eq!(q(0.0, -2.5, 0.0, 4.0).to_string(), "-2.5i + 4k");
        assert_eq!(q(0.0, 0.0, 0.0, 0.0).to_string(), "0");
    }

    #[test]
    fn operations_with_different_reference_combinations_work() {
        let q1 = q(1.0, 0.0, 0.0, 0.0);
        let q2 = q(0.0, 1.0, 0.0, 0.0);

        let _result = &q1 + &q2;
        let _result = &q1 + q2.clone();
        let _result = q1.clone() + &q2;
        let _result = q1.clone() + q2.clone();

        let _result = &q1 * &q2;
        let _result = &q1 * q2.clone();
        let _result = q1.clone() * &q2;
        let _result = q1 * q2;
    }

    #[test]
    fn approximate_comparison_works() {
        let value = q(1.0, 2.0, 3.0, 4.0);
        let noisy = q(1.0 + 1e-9, 2.0, 3.0, 4.0);
        assert_abs_diff_eq!(value, noisy, epsilon = EPSILON);
    }
}
