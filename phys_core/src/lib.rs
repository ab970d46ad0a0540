//! # phys_core - Physics Formula Evaluators
//!
//! `phys_core` evaluates named physical laws. Each law relates a small fixed
//! set of quantities; given all but one, it returns the missing one by
//! rearranging the equation.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Every evaluator is a pure function
//! - **Two entry points**: sentinel functions (`0.0` means unknown) and a
//!   typed solver (a missing input means unknown)
//! - **JSON-First**: Requests, results and errors implement Serialize/Deserialize
//! - **Rich Errors**: The typed solver returns structured errors, not strings
//!
//! ## Quick Start
//!
//! ```rust
//! use phys_core::laws::ohms_law;
//! use phys_core::solver::{evaluate, Inputs};
//! use phys_core::{Law, Settings};
//!
//! // Sentinel convention: current is the unknown
//! assert_eq!(ohms_law(12.0, 4.0, 0.0), 3.0);
//!
//! // Typed: a supplied zero voltage is a real value
//! let inputs = Inputs::new().with("voltage", 0.0).with("resistance", 4.0);
//! let eval = evaluate(Law::OhmsLaw, &inputs, &Settings::default()).unwrap();
//! assert_eq!(eval.solved_for.as_deref(), Some("current"));
//! assert_eq!(eval.value, 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`laws`] - Per-law evaluators and the law registry
//! - [`solver`] - Explicit-absence solver, pivot policies, JSON requests
//! - [`settings`] - TOML-backed evaluation settings
//! - [`constants`] - SI physical constants
//! - [`errors`] - Structured error types

pub mod constants;
pub mod errors;
pub mod laws;
pub mod settings;
pub mod solver;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use laws::{
    coulombs_law, ideal_gas_law, mass_energy_equivalence, newton_second_law, ohms_law, projectile_motion,
    simple_harmonic_motion, work_energy_theorem, Law, ALL_LAWS,
};
pub use settings::Settings;
pub use solver::{evaluate, evaluate_by_name, Evaluation, EvaluationRequest, Inputs, PivotPolicy};
