//! # Typed Solver
//!
//! Evaluates a [`Law`] from a partial mapping of named quantities. A quantity
//! that is missing from the mapping is unknown; a quantity present with the
//! value `0.0` is a genuine zero and is never chosen as the pivot.
//!
//! ## Pivot Policies
//!
//! - [`PivotPolicy::FirstInOrder`] (default): the first missing quantity in
//!   declared order is solved for. Other missing quantities enter the
//!   arithmetic as zero and are reported in [`Evaluation::assumed_zero`].
//!   Nothing missing is the degenerate case: value `0.0`, no pivot.
//! - [`PivotPolicy::ExactlyOne`]: anything other than exactly one missing
//!   quantity is an error.
//!
//! ## Example
//!
//! ```rust
//! use phys_core::solver::{evaluate, Inputs};
//! use phys_core::{Law, Settings};
//!
//! let inputs = Inputs::new().with("force", 10.0).with("mass", 2.0);
//! let eval = evaluate(Law::NewtonSecondLaw, &inputs, &Settings::default()).unwrap();
//!
//! assert_eq!(eval.solved_for.as_deref(), Some("acceleration"));
//! assert_eq!(eval.value, 5.0);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{CalcError, CalcResult};
use crate::laws::Law;
use crate::settings::Settings;

// ============================================================================
// Inputs
// ============================================================================

/// Partial mapping of quantity name to value.
///
/// ## JSON Example
///
/// ```json
/// { "voltage": 12.0, "resistance": 4.0 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inputs(BTreeMap<String, f64>);

impl Inputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.0.insert(name.into(), value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.0.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Parse a `name=value` pair, as typed on the command line.
    pub fn parse_pair(pair: &str) -> CalcResult<(String, f64)> {
        let (name, raw) = pair
            .split_once('=')
            .ok_or_else(|| CalcError::invalid_input(pair, pair, "Expected name=value"))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(CalcError::invalid_input(pair, pair, "Quantity name is empty"));
        }
        let value = raw
            .trim()
            .parse::<f64>()
            .map_err(|e| CalcError::invalid_input(name, raw, e.to_string()))?;
        Ok((name.to_string(), value))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Inputs {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

// ============================================================================
// Pivot Policy
// ============================================================================

/// How the pivot is chosen when the number of missing quantities is not one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotPolicy {
    /// First missing quantity wins; nothing missing returns 0
    #[default]
    FirstInOrder,
    /// Exactly one quantity must be missing
    ExactlyOne,
}

/// Choose the pivot among the `absent` quantity indices of `law`.
///
/// `absent` must be in declared order. Returns `Ok(None)` for the
/// degenerate case under [`PivotPolicy::FirstInOrder`].
pub fn select_pivot(law: Law, absent: &[usize], policy: PivotPolicy) -> CalcResult<Option<usize>> {
    match policy {
        PivotPolicy::FirstInOrder => Ok(absent.first().copied()),
        PivotPolicy::ExactlyOne => match absent {
            [] => Err(CalcError::nothing_to_solve(law.id())),
            [only] => Ok(Some(*only)),
            _ => {
                let quantities = law.quantities();
                let unknowns = absent.iter().map(|&i| quantities[i].name.to_string()).collect();
                Err(CalcError::underdetermined(law.id(), unknowns))
            }
        },
    }
}

// ============================================================================
// Evaluation
// ============================================================================

/// Outcome of a typed solve.
///
/// Non-finite values serialize as the strings `"inf"`, `"-inf"` and `"NaN"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Law that was evaluated
    pub law: Law,
    /// Quantity solved for, `None` in the degenerate case
    pub solved_for: Option<String>,
    /// Computed value
    #[serde(with = "float_repr")]
    pub value: f64,
    /// Whether `value` is finite
    pub finite: bool,
    /// Other missing quantities that were treated as zero
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assumed_zero: Vec<String>,
}

/// JSON numbers cannot hold infinity or NaN, so those travel as strings.
/// `null` reads back as NaN.
mod float_repr {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value.is_sign_positive() {
            serializer.serialize_str("inf")
        } else {
            serializer.serialize_str("-inf")
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Option::<Repr>::deserialize(deserializer)? {
            None => Ok(f64::NAN),
            Some(Repr::Number(v)) => Ok(v),
            Some(Repr::Text(text)) => text
                .parse::<f64>()
                .ok()
                .filter(|v| !v.is_finite())
                .ok_or_else(|| serde::de::Error::custom(format!("expected a number, \"inf\", \"-inf\" or \"NaN\", got \"{text}\""))),
        }
    }
}

impl Evaluation {
    /// True when every quantity was supplied and nothing was solved
    pub fn is_degenerate(&self) -> bool {
        self.solved_for.is_none()
    }
}

/// Evaluate `law` from `inputs`.
///
/// # Errors
///
/// - [`CalcError::UnknownQuantity`] if an input name is not a quantity of `law`
/// - [`CalcError::NothingToSolve`] / [`CalcError::Underdetermined`] under
///   [`PivotPolicy::ExactlyOne`]
/// - [`CalcError::NonFiniteResult`] if `settings.reject_non_finite` is set
pub fn evaluate(law: Law, inputs: &Inputs, settings: &Settings) -> CalcResult<Evaluation> {
    if let Some((name, _)) = inputs.iter().find(|(name, _)| law.quantity_index(name).is_none()) {
        return Err(CalcError::unknown_quantity(law.id(), name, &law.quantity_names()));
    }

    let quantities = law.quantities();
    let supplied: Vec<Option<f64>> = quantities.iter().map(|q| inputs.get(q.name)).collect();
    let absent: Vec<usize> = supplied
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_none())
        .map(|(i, _)| i)
        .collect();

    let pivot = select_pivot(law, &absent, settings.pivot_policy)?;
    let values: Vec<f64> = supplied.iter().map(|v| v.unwrap_or(0.0)).collect();
    let value = law.solve(pivot, &values);

    let Some(pivot) = pivot else {
        debug!(law = %law, "all quantities supplied, nothing to solve");
        return Ok(Evaluation {
            law,
            solved_for: None,
            value,
            finite: value.is_finite(),
            assumed_zero: Vec::new(),
        });
    };

    let solved_for = quantities[pivot].name;
    let assumed_zero: Vec<String> = absent
        .iter()
        .filter(|&&i| i != pivot)
        .map(|&i| quantities[i].name.to_string())
        .collect();

    debug!(law = %law, pivot = solved_for, value, "solved");
    if !assumed_zero.is_empty() {
        warn!(law = %law, pivot = solved_for, assumed_zero = ?assumed_zero, "missing quantities treated as zero");
    }
    if !value.is_finite() {
        warn!(law = %law, pivot = solved_for, value, "non-finite result");
        if settings.reject_non_finite {
            return Err(CalcError::non_finite(law.id(), solved_for, value));
        }
    }

    Ok(Evaluation {
        law,
        solved_for: Some(solved_for.to_string()),
        value,
        finite: value.is_finite(),
        assumed_zero,
    })
}

/// Evaluate a law looked up by name (`"ohms_law"` or `"ohms-law"`).
pub fn evaluate_by_name(law_name: &str, inputs: &Inputs, settings: &Settings) -> CalcResult<Evaluation> {
    let law: Law = law_name.parse()?;
    evaluate(law, inputs, settings)
}

// ============================================================================
// JSON Requests
// ============================================================================

/// A self-contained evaluation request.
///
/// ## JSON Example
///
/// ```json
/// {
///   "law": "coulombs_law",
///   "inputs": { "electrostatic_force": 10.0, "charge_one": 2.0, "charge_two": 3.0 },
///   "policy": "exactly_one"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub law: Law,
    #[serde(default)]
    pub inputs: Inputs,
    /// Overrides the policy from settings for this request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<PivotPolicy>,
}

impl EvaluationRequest {
    pub fn new(law: Law, inputs: Inputs) -> Self {
        Self { law, inputs, policy: None }
    }

    pub fn evaluate(&self, settings: &Settings) -> CalcResult<Evaluation> {
        match self.policy {
            Some(policy) => evaluate(self.law, &self.inputs, &settings.clone().with_policy(policy)),
            None => evaluate(self.law, &self.inputs, settings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::laws::*;

    fn strict() -> Settings {
        Settings::default().with_policy(PivotPolicy::ExactlyOne)
    }

    #[test]
    fn test_single_unknown() {
        let inputs = Inputs::new().with("force", 10.0).with("mass", 2.0);
        let eval = evaluate(Law::NewtonSecondLaw, &inputs, &Settings::default()).unwrap();
        assert_eq!(eval.solved_for.as_deref(), Some("acceleration"));
        assert_eq!(eval.value, 5.0);
        assert!(eval.finite);
        assert!(eval.assumed_zero.is_empty());
    }

    #[test]
    fn test_genuine_zero_is_not_pivot() {
        // V = 0 is a real value here; solve for R = 0 / 2
        let inputs = Inputs::new().with("voltage", 0.0).with("current", 2.0);
        let eval = evaluate(Law::OhmsLaw, &inputs, &Settings::default()).unwrap();
        assert_eq!(eval.solved_for.as_deref(), Some("resistance"));
        assert_eq!(eval.value, 0.0);
    }

    #[test]
    fn test_all_supplied_is_degenerate() {
        let inputs = Inputs::new().with("force", 10.0).with("mass", 2.0).with("acceleration", 5.0);
        let eval = evaluate(Law::NewtonSecondLaw, &inputs, &Settings::default()).unwrap();
        assert!(eval.is_degenerate());
        assert_eq!(eval.value, 0.0);
    }

    #[test]
    fn test_first_in_order_with_several_unknowns() {
        let inputs = Inputs::new().with("current", 2.0);
        let eval = evaluate(Law::OhmsLaw, &inputs, &Settings::default()).unwrap();
        assert_eq!(eval.solved_for.as_deref(), Some("voltage"));
        assert_eq!(eval.value, 0.0);
        assert_eq!(eval.assumed_zero, vec!["resistance".to_string()]);
    }

    #[test]
    fn test_exactly_one_rejects_nothing_to_solve() {
        let inputs = Inputs::new().with("voltage", 12.0).with("resistance", 4.0).with("current", 3.0);
        let err = evaluate(Law::OhmsLaw, &inputs, &strict()).unwrap_err();
        assert_eq!(err, CalcError::nothing_to_solve("ohms_law"));
    }

    #[test]
    fn test_exactly_one_rejects_several_unknowns() {
        let inputs = Inputs::new().with("current", 2.0);
        let err = evaluate(Law::OhmsLaw, &inputs, &strict()).unwrap_err();
        assert_eq!(
            err,
            CalcError::underdetermined("ohms_law", vec!["voltage".into(), "resistance".into()])
        );
    }

    #[test]
    fn test_unknown_quantity_is_rejected() {
        let inputs = Inputs::new().with("power", 1.0);
        let err = evaluate(Law::OhmsLaw, &inputs, &Settings::default()).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_QUANTITY");
    }

    #[test]
    fn test_non_finite_propagates_by_default() {
        let inputs = Inputs::new().with("voltage", 5.0);
        let eval = evaluate(Law::OhmsLaw, &inputs, &Settings::default()).unwrap();
        assert_eq!(eval.solved_for.as_deref(), Some("resistance"));
        assert_eq!(eval.value, f64::INFINITY);
        assert!(!eval.finite);
    }

    #[test]
    fn test_non_finite_rejected_when_configured() {
        let settings = Settings {
            reject_non_finite: true,
            ..Settings::default()
        };
        let inputs = Inputs::new().with("electrostatic_force", 10.0).with("charge_one", -2.0).with("charge_two", 3.0);
        let err = evaluate(Law::CoulombsLaw, &inputs, &settings).unwrap_err();
        assert_eq!(err.error_code(), "NON_FINITE_RESULT");
    }

    #[test]
    fn test_mass_energy_energy_is_implicit_pivot() {
        let inputs = Inputs::new().with("mass", 5.0).with("speed_of_light", 3e8);
        let eval = evaluate(Law::MassEnergyEquivalence, &inputs, &Settings::default()).unwrap();
        assert_eq!(eval.solved_for.as_deref(), Some("energy"));
        assert_eq!(eval.value, mass_energy_equivalence(5.0, 3e8));
    }

    #[test]
    fn test_agrees_with_sentinel_functions_for_nonzero_inputs() {
        let cases: Vec<(Law, Vec<f64>)> = vec![
            (Law::NewtonSecondLaw, vec![10.0, 2.0, 5.0]),
            (Law::ProjectileMotion, vec![10.0, 3.0, 9.8]),
            (Law::OhmsLaw, vec![12.0, 4.0, 3.0]),
            (Law::SimpleHarmonicMotion, vec![3.0, 2.0, 0.25, 0.1]),
            (Law::CoulombsLaw, vec![0.375, 2.0, 3.0, 4.0]),
            (Law::WorkEnergyTheorem, vec![50.0, 30.0, 20.0]),
            (Law::IdealGasLaw, vec![100.0, 2.0, 4.0, 5.0, 10.0]),
        ];

        for (law, full) in cases {
            for pivot in 0..full.len() {
                let names = law.quantity_names();
                let inputs: Inputs = names
                    .iter()
                    .zip(&full)
                    .enumerate()
                    .filter(|(i, _)| *i != pivot)
                    .map(|(_, (name, v))| (*name, *v))
                    .collect();
                let mut sentinel = full.clone();
                sentinel[pivot] = 0.0;

                let typed = evaluate(law, &inputs, &Settings::default()).unwrap().value;
                let legacy = match law {
                    Law::NewtonSecondLaw => newton_second_law(sentinel[0], sentinel[1], sentinel[2]),
                    Law::ProjectileMotion => projectile_motion(sentinel[0], sentinel[1], sentinel[2]),
                    Law::OhmsLaw => ohms_law(sentinel[0], sentinel[1], sentinel[2]),
                    Law::SimpleHarmonicMotion => {
                        simple_harmonic_motion(sentinel[0], sentinel[1], sentinel[2], sentinel[3])
                    }
                    Law::CoulombsLaw => coulombs_law(sentinel[0], sentinel[1], sentinel[2], sentinel[3]),
                    Law::WorkEnergyTheorem => work_energy_theorem(sentinel[0], sentinel[1], sentinel[2]),
                    Law::IdealGasLaw => {
                        ideal_gas_law(sentinel[0], sentinel[1], sentinel[2], sentinel[3], sentinel[4])
                    }
                    Law::MassEnergyEquivalence => unreachable!(),
                };
                assert_eq!(typed, legacy, "{:?} pivot {}", law, pivot);
            }
        }
    }

    #[test]
    fn test_evaluate_by_name() {
        let inputs = Inputs::new().with("voltage", 12.0).with("resistance", 4.0);
        let eval = evaluate_by_name("ohms-law", &inputs, &Settings::default()).unwrap();
        assert_eq!(eval.value, 3.0);

        let err = evaluate_by_name("hookes_law", &inputs, &Settings::default()).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_LAW");
    }

    #[test]
    fn test_request_json_with_policy_override() {
        let json = r#"{
            "law": "coulombs_law",
            "inputs": { "charge_one": 2.0, "charge_two": 3.0 },
            "policy": "exactly_one"
        }"#;
        let request: EvaluationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.policy, Some(PivotPolicy::ExactlyOne));

        let err = request.evaluate(&Settings::default()).unwrap_err();
        assert_eq!(err.error_code(), "UNDERDETERMINED");
    }

    #[test]
    fn test_evaluation_serialization() {
        let request = EvaluationRequest::new(
            Law::CoulombsLaw,
            Inputs::new().with("charge_one", 2.0).with("charge_two", 3.0).with("distance", 4.0),
        );
        let eval = request.evaluate(&Settings::default()).unwrap();
        let json = serde_json::to_string(&eval).unwrap();
        assert!(json.contains("\"law\":\"coulombs_law\""));
        assert!(json.contains("\"solved_for\":\"electrostatic_force\""));
        assert!(json.contains("\"value\":0.375"));
        assert!(!json.contains("assumed_zero"));
    }

    #[test]
    fn test_infinite_evaluation_roundtrips() {
        let inputs = Inputs::new().with("voltage", 5.0);
        let eval = evaluate(Law::OhmsLaw, &inputs, &Settings::default()).unwrap();
        let json = serde_json::to_string(&eval).unwrap();
        assert!(json.contains("\"value\":\"inf\""));

        let roundtrip: Evaluation = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, eval);
    }

    #[test]
    fn test_nan_evaluation_roundtrips_from_string_or_null() {
        let inputs = Inputs::new().with("electrostatic_force", 10.0).with("charge_one", -2.0).with("charge_two", 3.0);
        let eval = evaluate(Law::CoulombsLaw, &inputs, &Settings::default()).unwrap();
        let json = serde_json::to_string(&eval).unwrap();
        assert!(json.contains("\"value\":\"NaN\""));
        assert!(serde_json::from_str::<Evaluation>(&json).unwrap().value.is_nan());

        let null_json = json.replace("\"NaN\"", "null");
        assert!(serde_json::from_str::<Evaluation>(&null_json).unwrap().value.is_nan());
    }

    #[test]
    fn test_finite_value_must_be_a_number() {
        let json = r#"{"law":"ohms_law","solved_for":"current","value":"3","finite":true}"#;
        assert!(serde_json::from_str::<Evaluation>(json).is_err());
    }

    #[test]
    fn test_request_accepts_kebab_case_law() {
        let json = r#"{"law":"ohms-law","inputs":{"voltage":12.0,"resistance":4.0}}"#;
        let request: EvaluationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.law, Law::OhmsLaw);
        assert_eq!(request.evaluate(&Settings::default()).unwrap().value, 3.0);
    }

    #[test]
    fn test_parse_pair() {
        assert_eq!(Inputs::parse_pair("mass=2.5").unwrap(), ("mass".to_string(), 2.5));
        assert_eq!(Inputs::parse_pair(" q = -1e-6 ").unwrap(), ("q".to_string(), -1e-6));
        assert!(Inputs::parse_pair("mass").is_err());
        assert!(Inputs::parse_pair("=2").is_err());
        assert!(Inputs::parse_pair("mass=heavy").is_err());
    }
}
