//! # Physical Laws
//!
//! One pure evaluator per physical law. Each law has an ordered list of
//! quantities; a call solves for exactly one of them (the pivot) using the
//! others.
//!
//! ## Modules
//!
//! - [`mechanics`] - Newton's second law, projectile motion, SHM, work-energy
//! - [`electromagnetism`] - Ohm's law, Coulomb's law
//! - [`thermodynamics`] - Ideal gas law
//! - [`relativity`] - Mass-energy equivalence
//! - [`registry`] - The [`Law`] enum, quantity metadata, LAWS.md generation
//!
//! ## Sentinel Convention
//!
//! The free functions re-exported here take every quantity positionally and
//! treat `0.0` (or `-0.0`) as "unknown":
//!
//! - The first zero argument in declared order is the pivot
//! - Any later zero argument enters the arithmetic as a literal zero
//! - With no zero argument the result is `0.0`
//! - Division by zero and negative square roots propagate as infinity/NaN
//!
//! These functions never log and never fail. For explicit absence and
//! structured errors use [`crate::solver`].

pub mod electromagnetism;
pub mod mechanics;
pub mod registry;
pub mod relativity;
pub mod thermodynamics;

pub use electromagnetism::{coulombs_law, ohms_law};
pub use mechanics::{newton_second_law, projectile_motion, simple_harmonic_motion, work_energy_theorem};
pub use registry::{
    generate_laws_markdown, Law, LawCategory, LawMetadata, Quantity, ALL_LAWS,
};
pub use relativity::mass_energy_equivalence;
pub use thermodynamics::ideal_gas_law;

/// Index of the first quantity equal to the unknown sentinel (`0.0`).
///
/// `-0.0 == 0.0`, so negative zero is also the sentinel. NaN never is.
#[inline]
pub(crate) fn sentinel_pivot(values: &[f64]) -> Option<usize> {
    values.iter().position(|&v| v == 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_pivot_picks_first_zero() {
        assert_eq!(sentinel_pivot(&[1.0, 0.0, 0.0]), Some(1));
        assert_eq!(sentinel_pivot(&[-0.0, 2.0]), Some(0));
        assert_eq!(sentinel_pivot(&[1.0, f64::NAN]), None);
        assert_eq!(sentinel_pivot(&[]), None);
    }
}
