//! # Electromagnetism
//!
//! Ohm's law and Coulomb's law. Coulomb's law here omits the constant `k`;
//! callers working in SI fold [`COULOMB_CONSTANT`](crate::constants::COULOMB_CONSTANT)
//! into the force or the charges themselves.

use super::sentinel_pivot;

// =============================================================================
// OHM'S LAW
// V = R·I
// =============================================================================

/// Solve Ohm's law for the quantity at `pivot`.
///
/// Quantity order: voltage, resistance, current.
pub(crate) fn solve_ohms_law(pivot: Option<usize>, q: &[f64]) -> f64 {
    let (voltage, resistance, current) = (q[0], q[1], q[2]);
    match pivot {
        Some(0) => resistance * current,
        Some(1) => voltage / current,
        Some(2) => voltage / resistance,
        _ => 0.0,
    }
}

/// Ohm's law, `V = R·I`.
///
/// # Formulas
/// - voltage = 0    → R·I
/// - resistance = 0 → V/I
/// - current = 0    → V/R
///
/// # Example
/// ```rust
/// use phys_core::laws::ohms_law;
///
/// assert_eq!(ohms_law(12.0, 4.0, 0.0), 3.0);
/// // Second zero is used literally: 5 / 0
/// assert_eq!(ohms_law(5.0, 0.0, 0.0), f64::INFINITY);
/// ```
#[inline]
pub fn ohms_law(voltage: f64, resistance: f64, current: f64) -> f64 {
    let q = [voltage, resistance, current];
    solve_ohms_law(sentinel_pivot(&q), &q)
}

// =============================================================================
// COULOMB'S LAW
// F = q₁·q₂ / d²
// =============================================================================

/// Solve Coulomb's law for the quantity at `pivot`.
///
/// Quantity order: electrostatic_force, charge_one, charge_two, distance.
pub(crate) fn solve_coulombs_law(pivot: Option<usize>, q: &[f64]) -> f64 {
    let (force, charge_one, charge_two, distance) = (q[0], q[1], q[2], q[3]);
    match pivot {
        Some(0) => (charge_one * charge_two) / distance.powi(2),
        Some(1) => force * distance.powi(2) / charge_two,
        Some(2) => force * distance.powi(2) / charge_one,
        Some(3) => ((charge_one * charge_two) / force).sqrt(),
        _ => 0.0,
    }
}

/// Coulomb's inverse-square law without the electrostatic constant.
///
/// # Formulas
/// - electrostatic_force = 0 → q₁·q₂/d²
/// - charge_one = 0          → F·d²/q₂
/// - charge_two = 0          → F·d²/q₁
/// - distance = 0            → √(q₁·q₂/F), NaN for a negative radicand
#[inline]
pub fn coulombs_law(electrostatic_force: f64, charge_one: f64, charge_two: f64, distance: f64) -> f64 {
    let q = [electrostatic_force, charge_one, charge_two, distance];
    solve_coulombs_law(sentinel_pivot(&q), &q)
}
