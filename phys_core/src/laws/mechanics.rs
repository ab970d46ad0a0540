//! # Classical Mechanics
//!
//! Newton's second law, projectile displacement, simple harmonic motion and
//! the work-energy theorem.
//!
//! ## Notation
//!
//! - `F` = Force (N)
//! - `m` = Mass (kg)
//! - `a` = Acceleration (m/s²)
//! - `v₀` = Initial velocity (m/s)
//! - `t` = Time (s)
//! - `A` = Amplitude (m)
//! - `ω` = Angular frequency (rad/s)
//! - `φ` = Phase (rad)
//! - `W`, `KE`, `PE` = Work, kinetic and potential energy (J)
//!
//! Every public function follows the sentinel convention: an argument equal
//! to `0.0` is the unknown, the first such argument in declared order is the
//! pivot, and a call with no zero argument returns `0.0`.

use super::sentinel_pivot;

// =============================================================================
// NEWTON'S SECOND LAW
// F = m·a
// =============================================================================

/// Solve Newton's second law for the quantity at `pivot`.
///
/// Quantity order: force, mass, acceleration.
pub(crate) fn solve_newton_second_law(pivot: Option<usize>, q: &[f64]) -> f64 {
    let (force, mass, acceleration) = (q[0], q[1], q[2]);
    match pivot {
        Some(0) => mass * acceleration,
        Some(1) => force / acceleration,
        Some(2) => force / mass,
        _ => 0.0,
    }
}

/// Newton's second law, `F = m·a`.
///
/// # Formulas
/// - force = 0        → m·a
/// - mass = 0         → F/a
/// - acceleration = 0 → F/m
///
/// # Example
/// ```rust
/// use phys_core::laws::newton_second_law;
///
/// assert_eq!(newton_second_law(10.0, 2.0, 0.0), 5.0);
/// ```
#[inline]
pub fn newton_second_law(force: f64, mass: f64, acceleration: f64) -> f64 {
    let q = [force, mass, acceleration];
    solve_newton_second_law(sentinel_pivot(&q), &q)
}

// =============================================================================
// PROJECTILE MOTION (DISPLACEMENT)
// s = v₀·t + ½·a·t²
// =============================================================================

/// Solve projectile displacement for the quantity at `pivot`.
///
/// Quantity order: initial_velocity, time, acceleration. The pivot enters
/// the arithmetic as 0, so the `time` branch always evaluates to 0.
pub(crate) fn solve_projectile_motion(pivot: Option<usize>, q: &[f64]) -> f64 {
    let (initial_velocity, time, acceleration) = (q[0], q[1], q[2]);
    match pivot {
        Some(0) => 0.5 * acceleration * time.powi(2),
        Some(1) => initial_velocity * time + 0.5 * acceleration * time.powi(2),
        Some(2) => initial_velocity * time,
        _ => 0.0,
    }
}

/// Displacement of a projectile under constant acceleration.
///
/// # Formulas
/// - initial_velocity = 0 → ½·a·t²
/// - time = 0             → v₀·t + ½·a·t² (always 0, t is the sentinel)
/// - acceleration = 0     → v₀·t
#[inline]
pub fn projectile_motion(initial_velocity: f64, time: f64, acceleration: f64) -> f64 {
    let q = [initial_velocity, time, acceleration];
    solve_projectile_motion(sentinel_pivot(&q), &q)
}

// =============================================================================
// SIMPLE HARMONIC MOTION
// x(t) = A·sin(ω·t + φ)
// =============================================================================

/// Solve simple harmonic motion for the quantity at `pivot`.
///
/// Quantity order: amplitude, angular_frequency, time, phase. Amplitude and
/// angular frequency are never solved for; those pivots return 0.
pub(crate) fn solve_simple_harmonic_motion(pivot: Option<usize>, q: &[f64]) -> f64 {
    let (amplitude, angular_frequency, time, phase) = (q[0], q[1], q[2], q[3]);
    match pivot {
        Some(0) | Some(1) => 0.0,
        Some(2) => amplitude * (angular_frequency * time + phase).sin(),
        Some(3) => amplitude * (angular_frequency * time).sin(),
        _ => 0.0,
    }
}

/// Displacement of a simple harmonic oscillator.
///
/// # Formulas
/// - amplitude = 0         → 0
/// - angular_frequency = 0 → 0
/// - time = 0              → A·sin(ω·t + φ), i.e. A·sin(φ)
/// - phase = 0             → A·sin(ω·t)
#[inline]
pub fn simple_harmonic_motion(amplitude: f64, angular_frequency: f64, time: f64, phase: f64) -> f64 {
    let q = [amplitude, angular_frequency, time, phase];
    solve_simple_harmonic_motion(sentinel_pivot(&q), &q)
}

// =============================================================================
// WORK-ENERGY THEOREM
// W = KE + PE
// =============================================================================

/// Solve the work-energy balance for the quantity at `pivot`.
///
/// Quantity order: work, kinetic_energy, potential_energy.
pub(crate) fn solve_work_energy_theorem(pivot: Option<usize>, q: &[f64]) -> f64 {
    let (work, kinetic_energy, potential_energy) = (q[0], q[1], q[2]);
    match pivot {
        Some(0) => kinetic_energy + potential_energy,
        Some(1) => work - potential_energy,
        Some(2) => work - kinetic_energy,
        _ => 0.0,
    }
}

/// Work-energy theorem, `W = KE + PE`.
///
/// # Formulas
/// - work = 0             → KE + PE
/// - kinetic_energy = 0   → W − PE
/// - potential_energy = 0 → W − KE
#[inline]
pub fn work_energy_theorem(work: f64, kinetic_energy: f64, potential_energy: f64) -> f64 {
    let q = [work, kinetic_energy, potential_energy];
    solve_work_energy_theorem(sentinel_pivot(&q), &q)
}
