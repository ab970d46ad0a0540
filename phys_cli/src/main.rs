//! # Physeq CLI
//!
//! Command-line front end for `phys_core`.
//!
//! ```bash
//! physeq list
//! physeq solve ohms_law voltage=12 resistance=4
//! physeq solve coulombs-law charge_one=2 charge_two=3 distance=4 --json
//! echo '{"law":"newton_second_law","inputs":{"force":10,"mass":2}}' | physeq eval
//! ```
//!
//! Set `RUST_LOG=debug` to see which quantity each solve pivots on.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use phys_core::laws::{Law, ALL_LAWS};
use phys_core::solver::{evaluate, Evaluation, EvaluationRequest, Inputs, PivotPolicy};
use phys_core::settings::CONFIG_ENV_VAR;
use phys_core::{CalcError, Settings};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(author, version, about = "Solve physical laws for one unknown quantity")]
struct Cli {
    /// Settings file (TOML)
    #[arg(long, global = true, env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every law with its quantities in pivot order
    List,

    /// Solve one law; quantities left out are unknown
    Solve {
        /// Law identifier, e.g. ohms_law or ohms-law
        law: String,

        /// Known quantities
        #[arg(value_name = "NAME=VALUE")]
        quantities: Vec<String>,

        /// Require exactly one unknown quantity
        #[arg(long, default_value_t = false)]
        strict: bool,

        /// Print the evaluation as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Evaluate a JSON request (or an array of them) from FILE or stdin
    Eval {
        /// Request file; reads stdin when omitted
        file: Option<PathBuf>,
    },
}

/// Per-request result in batch output.
#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum Outcome {
    Ok(Evaluation),
    Error(CalcError),
}

/// Exit code for errors the caller can fix by changing the request
const EXIT_REQUEST_ERROR: u8 = 2;

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_error(&err),
    }
}

/// Print the error chain without a backtrace and pick the exit code.
fn report_error(err: &anyhow::Error) -> ExitCode {
    eprintln!("Error: {}", err);
    for cause in err.chain().skip(1) {
        eprintln!("  caused by: {}", cause);
    }

    if let Some(calc) = err.downcast_ref::<CalcError>() {
        if let Ok(json) = serde_json::to_string_pretty(calc) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
    }
    ExitCode::from(exit_code(err))
}

fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<CalcError>() {
        Some(calc) if calc.is_request_error() => EXIT_REQUEST_ERROR,
        _ => 1,
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Command::List => list_laws(),
        Command::Solve {
            law,
            quantities,
            strict,
            json,
        } => {
            let settings = if strict {
                settings.with_policy(PivotPolicy::ExactlyOne)
            } else {
                settings
            };
            solve(&law, &quantities, &settings, json)
        }
        Command::Eval { file } => eval_requests(file.as_deref(), &settings),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading settings");
            Ok(Settings::load(path)?)
        }
        None => Ok(Settings::default()),
    }
}

fn list_laws() -> Result<()> {
    for law in ALL_LAWS {
        let meta = law.metadata();
        println!("{:<24} {}  [{}]", law.id(), meta.name, meta.formula_plain);
        for (i, q) in meta.quantities.iter().enumerate() {
            println!("    {}. {:<20} {:<4} {}", i + 1, q.name, q.symbol, q.units);
        }
    }
    Ok(())
}

fn parse_inputs(pairs: &[String]) -> Result<Inputs> {
    let mut inputs = Inputs::new();
    for pair in pairs {
        let (name, value) = Inputs::parse_pair(pair)?;
        if inputs.insert(name.clone(), value).is_some() {
            return Err(CalcError::invalid_input(name, pair.as_str(), "Quantity given more than once").into());
        }
    }
    Ok(inputs)
}

fn solve(law_name: &str, pairs: &[String], settings: &Settings, json: bool) -> Result<()> {
    let law: Law = law_name.parse()?;
    let inputs = parse_inputs(pairs)?;
    let eval = evaluate(law, &inputs, settings)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&eval)?);
        return Ok(());
    }

    let meta = law.metadata();
    println!("{} ({})", meta.name, meta.formula_plain);
    match &eval.solved_for {
        Some(name) => println!("  {} = {}", name, format_value(eval.value, settings.display_precision)),
        None => println!("  all quantities supplied, nothing to solve (result 0)"),
    }
    for name in &eval.assumed_zero {
        println!("  note: {} was not supplied and was taken as 0", name);
    }
    Ok(())
}

fn eval_requests(file: Option<&Path>, settings: &Settings) -> Result<()> {
    let text = match file {
        Some(path) => fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            buf
        }
    };

    let document: Value = serde_json::from_str(&text).map_err(CalcError::from)?;
    match document {
        Value::Array(items) => {
            let outcomes = evaluate_batch(items, settings);
            println!("{}", serde_json::to_string_pretty(&outcomes)?);
        }
        single => {
            let eval = evaluate_value(single, settings)?;
            println!("{}", serde_json::to_string_pretty(&eval)?);
        }
    }
    Ok(())
}

fn evaluate_value(item: Value, settings: &Settings) -> Result<Evaluation, CalcError> {
    let request: EvaluationRequest = serde_json::from_value(item)?;
    request.evaluate(settings)
}

/// Each element is parsed and evaluated on its own, so one bad entry
/// does not hide the others.
fn evaluate_batch(items: Vec<Value>, settings: &Settings) -> Vec<Outcome> {
    items
        .into_iter()
        .map(|item| match evaluate_value(item, settings) {
            Ok(eval) => Outcome::Ok(eval),
            Err(err) => Outcome::Error(err),
        })
        .collect()
}

/// Fixed notation for ordinary magnitudes, scientific for very large or small ones.
fn format_value(value: f64, precision: usize) -> String {
    let magnitude = value.abs();
    if value.is_finite() && value != 0.0 && !(1e-4..1e9).contains(&magnitude) {
        format!("{:.*e}", precision, value)
    } else {
        format!("{:.*}", precision, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(3.0, 2), "3.00");
        assert_eq!(format_value(0.0, 3), "0.000");
        assert_eq!(format_value(4.5e17, 2), "4.50e17");
        assert_eq!(format_value(f64::INFINITY, 2), "inf");
        assert_eq!(format_value(f64::NAN, 2), "NaN");
    }

    #[test]
    fn test_parse_inputs_rejects_duplicates() {
        let pairs = vec!["mass=2".to_string(), "mass=3".to_string()];
        assert!(parse_inputs(&pairs).is_err());

        let pairs = vec!["mass=2".to_string(), "force=10".to_string()];
        let inputs = parse_inputs(&pairs).unwrap();
        assert_eq!(inputs.get("force"), Some(10.0));
    }

    #[test]
    fn test_batch_keeps_going_past_bad_entries() {
        let items: Vec<Value> = serde_json::from_str(
            r#"[
                {"law": "ohms_law", "inputs": {"voltage": 12, "resistance": 4}},
                {"law": "hookes_law", "inputs": {}},
                {"law": "ohms-law", "inputs": {"current": 2}, "policy": "exactly_one"}
            ]"#,
        )
        .unwrap();

        let outcomes = evaluate_batch(items, &Settings::default());
        assert_eq!(outcomes.len(), 3);
        match &outcomes[0] {
            Outcome::Ok(eval) => assert_eq!(eval.value, 3.0),
            Outcome::Error(err) => panic!("unexpected error: {err}"),
        }
        match &outcomes[1] {
            Outcome::Error(err) => {
                assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
                assert!(err.to_string().contains("Unknown law: hookes_law"));
            }
            Outcome::Ok(_) => panic!("expected an error"),
        }
        match &outcomes[2] {
            Outcome::Error(err) => assert_eq!(err.error_code(), "UNDERDETERMINED"),
            Outcome::Ok(_) => panic!("expected an error"),
        }
    }

    #[test]
    fn test_request_errors_exit_with_code_two() {
        let err = anyhow::Error::from(CalcError::unknown_law("hookes_law"));
        assert_eq!(exit_code(&err), EXIT_REQUEST_ERROR);

        let err = anyhow::Error::from(CalcError::config_error("physeq.toml", "missing"));
        assert_eq!(exit_code(&err), 1);

        let err = anyhow::anyhow!("reading stdin");
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn test_cli_parses_solve() {
        let cli = Cli::try_parse_from(["physeq", "solve", "ohms_law", "voltage=12", "--strict"]).unwrap();
        match cli.command {
            Command::Solve { law, quantities, strict, json } => {
                assert_eq!(law, "ohms_law");
                assert_eq!(quantities, vec!["voltage=12"]);
                assert!(strict);
                assert!(!json);
            }
            _ => panic!("expected solve"),
        }
    }
}
