//! # Special Relativity
//!
//! Mass-energy equivalence, `E = m·c²`.
//!
//! The energy is an implicit third quantity. The two-argument function never
//! receives it, so it is always unknown and becomes the pivot once both mass
//! and the speed of light are supplied. Mass and speed of light are not
//! solved for; those pivots return 0.

use super::sentinel_pivot;

/// Solve mass-energy equivalence for the quantity at `pivot`.
///
/// Quantity order: mass, speed_of_light, energy.
pub(crate) fn solve_mass_energy_equivalence(pivot: Option<usize>, q: &[f64]) -> f64 {
    let (mass, speed_of_light) = (q[0], q[1]);
    match pivot {
        Some(0) | Some(1) => 0.0,
        Some(2) => mass * speed_of_light.powi(2),
        _ => 0.0,
    }
}

/// Mass-energy equivalence, `E = m·c²`.
///
/// # Formulas
/// - mass = 0           → 0
/// - speed_of_light = 0 → 0
/// - both supplied      → m·c²
///
/// # Example
/// ```rust
/// use phys_core::laws::mass_energy_equivalence;
///
/// assert_eq!(mass_energy_equivalence(5.0, 3e8), 5.0 * 3e8 * 3e8);
/// assert_eq!(mass_energy_equivalence(0.0, 3e8), 0.0);
/// ```
#[inline]
pub fn mass_energy_equivalence(mass: f64, speed_of_light: f64) -> f64 {
    let q = [mass, speed_of_light, 0.0];
    solve_mass_energy_equivalence(sentinel_pivot(&q), &q)
}
