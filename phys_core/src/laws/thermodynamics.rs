//! # Thermodynamics
//!
//! Equation of state for an ideal gas, `P·V = n·R·T`. The gas constant is an
//! ordinary quantity here, so it can be solved for like any other.

use super::sentinel_pivot;

/// Solve the ideal gas law for the quantity at `pivot`.
///
/// Quantity order: pressure, volume, number_of_moles, gas_constant, temperature.
pub(crate) fn solve_ideal_gas_law(pivot: Option<usize>, q: &[f64]) -> f64 {
    let (pressure, volume, moles, gas_constant, temperature) = (q[0], q[1], q[2], q[3], q[4]);
    match pivot {
        Some(0) => (moles * gas_constant * temperature) / volume,
        Some(1) => (moles * gas_constant * temperature) / pressure,
        Some(2) => (pressure * volume) / (gas_constant * temperature),
        Some(3) => (pressure * volume) / (moles * temperature),
        Some(4) => (pressure * volume) / (moles * gas_constant),
        _ => 0.0,
    }
}

/// Ideal gas law, `P·V = n·R·T`.
///
/// # Formulas
/// - pressure = 0        → nRT/V
/// - volume = 0          → nRT/P
/// - number_of_moles = 0 → PV/(RT)
/// - gas_constant = 0    → PV/(nT)
/// - temperature = 0     → PV/(nR)
///
/// # Example
/// ```rust
/// use phys_core::constants::MOLAR_GAS_CONSTANT;
/// use phys_core::laws::ideal_gas_law;
///
/// // One mole at 273.15 K in 22.4 L
/// let p = ideal_gas_law(0.0, 0.0224, 1.0, MOLAR_GAS_CONSTANT, 273.15);
/// assert!((p - 101_388.0).abs() < 10.0);
/// ```
#[inline]
pub fn ideal_gas_law(
    pressure: f64,
    volume: f64,
    number_of_moles: f64,
    gas_constant: f64,
    temperature: f64,
) -> f64 {
    let q = [pressure, volume, number_of_moles, gas_constant, temperature];
    solve_ideal_gas_law(sentinel_pivot(&q), &q)
}
