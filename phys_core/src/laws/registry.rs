//! # Law Registry
//!
//! Central registry of every physical law Physeq can evaluate. Each law has
//! metadata: its quantities in pivot-scan order, formula, assumptions and
//! the function that implements it.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe law identification via the `Law` enum
//! - Name lookup (`"ohms_law"`, `"ohms-law"`) via `FromStr`
//! - The single dispatch point from a pivot to a rearrangement (`Law::solve`)
//! - Markdown generation for LAWS.md
//!
//! ## Usage
//!
//! ```rust
//! use phys_core::laws::Law;
//!
//! let law: Law = "ohms-law".parse().unwrap();
//! assert_eq!(law, Law::OhmsLaw);
//! assert_eq!(law.quantity_names(), vec!["voltage", "resistance", "current"]);
//!
//! // Solve for current (index 2) with V = 12, R = 4
//! assert_eq!(law.solve(Some(2), &[12.0, 4.0, 0.0]), 3.0);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::{electromagnetism, mechanics, relativity, thermodynamics};
use crate::errors::CalcError;

// ============================================================================
// Law Categories
// ============================================================================

/// Branch of physics a law belongs to, used to group LAWS.md.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LawCategory {
    /// Forces, motion, energy
    Mechanics,
    /// Charges and circuits
    Electromagnetism,
    /// Gases and heat
    Thermodynamics,
    /// Special relativity
    Relativity,
}

impl LawCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            LawCategory::Mechanics => "Mechanics",
            LawCategory::Electromagnetism => "Electromagnetism",
            LawCategory::Thermodynamics => "Thermodynamics",
            LawCategory::Relativity => "Relativity",
        }
    }

    /// Sort order for LAWS.md (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            LawCategory::Mechanics => 1,
            LawCategory::Electromagnetism => 2,
            LawCategory::Thermodynamics => 3,
            LawCategory::Relativity => 4,
        }
    }
}

// ============================================================================
// Quantity Definition
// ============================================================================

/// A named quantity taking part in a law.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity {
    /// Input name (e.g., "force", "charge_one")
    pub name: &'static str,
    /// Symbol (e.g., "F", "q1")
    pub symbol: &'static str,
    /// SI unit label, informational only
    pub units: &'static str,
    /// Description
    pub description: &'static str,
}

impl Quantity {
    pub const fn new(name: &'static str, symbol: &'static str, units: &'static str, description: &'static str) -> Self {
        Self { name, symbol, units, description }
    }
}

const NEWTON_SECOND_LAW: &[Quantity] = &[
    Quantity::new("force", "F", "N", "Net force on the body"),
    Quantity::new("mass", "m", "kg", "Mass of the body"),
    Quantity::new("acceleration", "a", "m/s^2", "Acceleration of the body"),
];

const PROJECTILE_MOTION: &[Quantity] = &[
    Quantity::new("initial_velocity", "v0", "m/s", "Initial velocity of the projectile"),
    Quantity::new("time", "t", "s", "Time in flight"),
    Quantity::new("acceleration", "a", "m/s^2", "Constant acceleration"),
];

const OHMS_LAW: &[Quantity] = &[
    Quantity::new("voltage", "V", "V", "Voltage across the conductor"),
    Quantity::new("resistance", "R", "ohm", "Resistance of the conductor"),
    Quantity::new("current", "I", "A", "Current through the conductor"),
];

const MASS_ENERGY_EQUIVALENCE: &[Quantity] = &[
    Quantity::new("mass", "m", "kg", "Rest mass"),
    Quantity::new("speed_of_light", "c", "m/s", "Speed of light"),
    Quantity::new("energy", "E", "J", "Rest energy"),
];

const SIMPLE_HARMONIC_MOTION: &[Quantity] = &[
    Quantity::new("amplitude", "A", "m", "Amplitude of the oscillation"),
    Quantity::new("angular_frequency", "w", "rad/s", "Angular frequency"),
    Quantity::new("time", "t", "s", "Elapsed time"),
    Quantity::new("phase", "phi", "rad", "Phase offset"),
];

const COULOMBS_LAW: &[Quantity] = &[
    Quantity::new("electrostatic_force", "F", "N", "Force between the charges"),
    Quantity::new("charge_one", "q1", "C", "First charge"),
    Quantity::new("charge_two", "q2", "C", "Second charge"),
    Quantity::new("distance", "d", "m", "Separation of the charges"),
];

const WORK_ENERGY_THEOREM: &[Quantity] = &[
    Quantity::new("work", "W", "J", "Work done by all forces"),
    Quantity::new("kinetic_energy", "KE", "J", "Kinetic energy"),
    Quantity::new("potential_energy", "PE", "J", "Potential energy"),
];

const IDEAL_GAS_LAW: &[Quantity] = &[
    Quantity::new("pressure", "P", "Pa", "Pressure of the gas"),
    Quantity::new("volume", "V", "m^3", "Volume of the gas"),
    Quantity::new("number_of_moles", "n", "mol", "Amount of gas"),
    Quantity::new("gas_constant", "R", "J/(mol*K)", "Gas constant"),
    Quantity::new("temperature", "T", "K", "Absolute temperature"),
];

// ============================================================================
// Law Metadata
// ============================================================================

/// Complete metadata for a physical law.
#[derive(Debug, Clone)]
pub struct LawMetadata {
    /// Human-readable name (e.g., "Ohm's Law")
    pub name: &'static str,
    /// Brief description of the law
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Quantities in pivot-scan order
    pub quantities: &'static [Quantity],
    /// Assumptions, limitations and degenerate branches
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: LawCategory,
    /// Source module where the law is implemented
    pub source_module: &'static str,
    /// Sentinel-convention function implementing the law
    pub source_function: &'static str,
}

// ============================================================================
// Law Enum
// ============================================================================

/// Every physical law in the registry.
///
/// Serialized as its snake_case identifier, e.g. `"newton_second_law"`.
/// Deserializes through [`FromStr`], so kebab-case names are accepted too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Law {
    /// F = m·a
    NewtonSecondLaw,
    /// s = v₀·t + ½·a·t²
    ProjectileMotion,
    /// V = R·I
    OhmsLaw,
    /// E = m·c²
    MassEnergyEquivalence,
    /// x = A·sin(ω·t + φ)
    SimpleHarmonicMotion,
    /// F = q₁·q₂/d²
    CoulombsLaw,
    /// W = KE + PE
    WorkEnergyTheorem,
    /// P·V = n·R·T
    IdealGasLaw,
}

/// All laws in declaration order.
pub static ALL_LAWS: &[Law] = &[
    Law::NewtonSecondLaw,
    Law::ProjectileMotion,
    Law::OhmsLaw,
    Law::MassEnergyEquivalence,
    Law::SimpleHarmonicMotion,
    Law::CoulombsLaw,
    Law::WorkEnergyTheorem,
    Law::IdealGasLaw,
];

impl Law {
    /// Snake_case identifier used in JSON and on the command line
    pub fn id(&self) -> &'static str {
        match self {
            Law::NewtonSecondLaw => "newton_second_law",
            Law::ProjectileMotion => "projectile_motion",
            Law::OhmsLaw => "ohms_law",
            Law::MassEnergyEquivalence => "mass_energy_equivalence",
            Law::SimpleHarmonicMotion => "simple_harmonic_motion",
            Law::CoulombsLaw => "coulombs_law",
            Law::WorkEnergyTheorem => "work_energy_theorem",
            Law::IdealGasLaw => "ideal_gas_law",
        }
    }

    /// Quantities in the order the pivot scan visits them
    pub fn quantities(&self) -> &'static [Quantity] {
        match self {
            Law::NewtonSecondLaw => NEWTON_SECOND_LAW,
            Law::ProjectileMotion => PROJECTILE_MOTION,
            Law::OhmsLaw => OHMS_LAW,
            Law::MassEnergyEquivalence => MASS_ENERGY_EQUIVALENCE,
            Law::SimpleHarmonicMotion => SIMPLE_HARMONIC_MOTION,
            Law::CoulombsLaw => COULOMBS_LAW,
            Law::WorkEnergyTheorem => WORK_ENERGY_THEOREM,
            Law::IdealGasLaw => IDEAL_GAS_LAW,
        }
    }

    pub fn quantity_names(&self) -> Vec<&'static str> {
        self.quantities().iter().map(|q| q.name).collect()
    }

    /// Position of `name` in the quantity order
    pub fn quantity_index(&self, name: &str) -> Option<usize> {
        self.quantities().iter().position(|q| q.name == name)
    }

    /// Evaluate the rearrangement for `pivot`.
    ///
    /// `values` holds one entry per quantity in declared order; entries that
    /// are unknown (including the pivot itself) must be `0.0`. `None` is the
    /// degenerate "nothing to solve" case and yields `0.0`.
    ///
    /// # Panics
    ///
    /// If `values` is shorter than [`Law::quantities`].
    pub fn solve(&self, pivot: Option<usize>, values: &[f64]) -> f64 {
        match self {
            Law::NewtonSecondLaw => mechanics::solve_newton_second_law(pivot, values),
            Law::ProjectileMotion => mechanics::solve_projectile_motion(pivot, values),
            Law::OhmsLaw => electromagnetism::solve_ohms_law(pivot, values),
            Law::MassEnergyEquivalence => relativity::solve_mass_energy_equivalence(pivot, values),
            Law::SimpleHarmonicMotion => mechanics::solve_simple_harmonic_motion(pivot, values),
            Law::CoulombsLaw => electromagnetism::solve_coulombs_law(pivot, values),
            Law::WorkEnergyTheorem => mechanics::solve_work_energy_theorem(pivot, values),
            Law::IdealGasLaw => thermodynamics::solve_ideal_gas_law(pivot, values),
        }
    }

    /// Get the full metadata for this law
    pub fn metadata(&self) -> LawMetadata {
        match self {
            Law::NewtonSecondLaw => LawMetadata {
                name: "Newton's Second Law",
                description: "Acceleration of a body depends on the net force acting on it and its mass",
                formula_plain: "F = m * a",
                quantities: NEWTON_SECOND_LAW,
                assumptions: vec!["Constant mass", "Inertial frame of reference"],
                category: LawCategory::Mechanics,
                source_module: "laws/mechanics.rs",
                source_function: "newton_second_law",
            },

            Law::ProjectileMotion => LawMetadata {
                name: "Projectile Motion",
                description: "Displacement of a projectile moving under constant acceleration",
                formula_plain: "s = v0 * t + 0.5 * a * t^2",
                quantities: PROJECTILE_MOTION,
                assumptions: vec![
                    "Air resistance is negligible",
                    "Solving for initial_velocity returns 0.5 * a * t^2",
                    "Solving for time evaluates the displacement at t = 0, which is 0",
                    "Solving for acceleration returns v0 * t",
                ],
                category: LawCategory::Mechanics,
                source_module: "laws/mechanics.rs",
                source_function: "projectile_motion",
            },

            Law::OhmsLaw => LawMetadata {
                name: "Ohm's Law",
                description: "Current through a conductor is proportional to the voltage across it",
                formula_plain: "V = R * I",
                quantities: OHMS_LAW,
                assumptions: vec!["Ohmic (linear) conductor"],
                category: LawCategory::Electromagnetism,
                source_module: "laws/electromagnetism.rs",
                source_function: "ohms_law",
            },

            Law::MassEnergyEquivalence => LawMetadata {
                name: "Mass-Energy Equivalence",
                description: "Rest energy of a body with mass m",
                formula_plain: "E = m * c^2",
                quantities: MASS_ENERGY_EQUIVALENCE,
                assumptions: vec![
                    "Body at rest",
                    "Only energy is solved for; solving for mass or speed_of_light returns 0",
                ],
                category: LawCategory::Relativity,
                source_module: "laws/relativity.rs",
                source_function: "mass_energy_equivalence",
            },

            Law::SimpleHarmonicMotion => LawMetadata {
                name: "Simple Harmonic Motion",
                description: "Displacement of an oscillator whose restoring force is proportional to displacement",
                formula_plain: "x = A * sin(w * t + phi)",
                quantities: SIMPLE_HARMONIC_MOTION,
                assumptions: vec![
                    "Undamped oscillation",
                    "Solving for amplitude or angular_frequency returns 0",
                    "Solving for time returns the displacement at t = 0: A * sin(phi)",
                    "Solving for phase returns the displacement with phi = 0: A * sin(w * t)",
                ],
                category: LawCategory::Mechanics,
                source_module: "laws/mechanics.rs",
                source_function: "simple_harmonic_motion",
            },

            Law::CoulombsLaw => LawMetadata {
                name: "Coulomb's Law",
                description: "Force between two stationary point charges",
                formula_plain: "F = q1 * q2 / d^2",
                quantities: COULOMBS_LAW,
                assumptions: vec![
                    "Electrostatic constant k is folded into the inputs",
                    "Solving for distance takes sqrt(q1 * q2 / F); a negative radicand yields NaN",
                ],
                category: LawCategory::Electromagnetism,
                source_module: "laws/electromagnetism.rs",
                source_function: "coulombs_law",
            },

            Law::WorkEnergyTheorem => LawMetadata {
                name: "Work-Energy Theorem",
                description: "Work done on a particle balances its kinetic and potential energy",
                formula_plain: "W = KE + PE",
                quantities: WORK_ENERGY_THEOREM,
                assumptions: vec!["Conservative system"],
                category: LawCategory::Mechanics,
                source_module: "laws/mechanics.rs",
                source_function: "work_energy_theorem",
            },

            Law::IdealGasLaw => LawMetadata {
                name: "Ideal Gas Law",
                description: "Equation of state of a hypothetical ideal gas",
                formula_plain: "P * V = n * R * T",
                quantities: IDEAL_GAS_LAW,
                assumptions: vec!["Ideal gas behaviour", "Absolute temperature"],
                category: LawCategory::Thermodynamics,
                source_module: "laws/thermodynamics.rs",
                source_function: "ideal_gas_law",
            },
        }
    }

    /// Get all laws in a specific category
    pub fn in_category(category: LawCategory) -> Vec<Law> {
        ALL_LAWS
            .iter()
            .filter(|law| law.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories in sort order
    pub fn all_categories() -> Vec<LawCategory> {
        let mut categories = vec![
            LawCategory::Mechanics,
            LawCategory::Electromagnetism,
            LawCategory::Thermodynamics,
            LawCategory::Relativity,
        ];
        categories.sort_by_key(|c| c.sort_order());
        categories
    }
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Law {
    type Err = CalcError;

    /// Accepts the snake_case id, case-insensitively, with `-` or `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        ALL_LAWS
            .iter()
            .copied()
            .find(|law| law.id() == normalized)
            .ok_or_else(|| CalcError::unknown_law(s))
    }
}

impl<'de> Deserialize<'de> for Law {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Markdown Generation for LAWS.md
// ============================================================================

/// Generate a complete LAWS.md reference from the registry.
///
/// # Example
///
/// ```rust
/// use phys_core::laws::generate_laws_markdown;
///
/// let markdown = generate_laws_markdown();
/// assert!(markdown.contains("Physeq Laws Reference"));
/// assert!(markdown.contains("## Mechanics"));
/// ```
pub fn generate_laws_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str(r#"# Physeq Laws Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-laws`

Each law lists its quantities in pivot-scan order. A call solves for the
first unknown quantity in that order; any later unknown is treated as zero.
With nothing unknown the result is 0.

---

"#);

    let categories = Law::all_categories();

    for category in &categories {
        let laws = Law::in_category(*category);
        if laws.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for law in laws {
            let meta = law.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));
            output.push_str(&format!("**Identifier:** `{}`\n\n", law.id()));

            output.push_str("**Quantities:**\n\n");
            output.push_str("| # | Name | Symbol | Units | Description |\n");
            output.push_str("|---|------|--------|-------|-------------|\n");
            for (i, q) in meta.quantities.iter().enumerate() {
                output.push_str(&format!(
                    "| {} | `{}` | {} | {} | {} |\n",
                    i + 1,
                    q.name,
                    q.symbol,
                    q.units,
                    q.description
                ));
            }
            output.push('\n');

            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Laws:** {}\n- **Categories:** {}\n",
        ALL_LAWS.len(),
        categories.len()
    ));

    output
}

// ============================================================================
// Tests
// ============================================================================
