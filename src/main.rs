//! Payroll CLI - weekly payroll run over an employee records file
//!
//! Usage: payroll <INPUT> [--policy FILE | --preset basic|extended]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use payroll_engine::config::{ConfigLoader, PayrollPolicy};
use payroll_engine::error::EngineError;
use payroll_engine::input::load_input;
use payroll_engine::payroll::PayrollRun;
use payroll_engine::report::DiagnosticLines;

/// Payroll - validate employee records and issue weekly pay reports
#[derive(Parser, Debug)]
#[command(name = "payroll")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Employee records file
    input: PathBuf,

    /// YAML policy file (overrides --preset)
    #[arg(long, conflicts_with = "preset")]
    policy: Option<PathBuf>,

    /// Built-in company policy
    #[arg(long, value_enum)]
    preset: Option<Preset>,

    /// Whether commission is paid on sales reported with zero hours
    #[arg(long, value_enum)]
    commission_without_hours: Option<CommissionMode>,

    /// Print the run as JSON instead of text reports
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum Preset {
    #[default]
    Basic,
    Extended,
}

impl Preset {
    fn name(self) -> &'static str {
        match self {
            Preset::Basic => "basic",
            Preset::Extended => "extended",
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CommissionMode {
    Allow,
    Deny,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {:#}", err);
            let code = err
                .downcast_ref::<EngineError>()
                .map(EngineError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("payroll_engine={level},payroll={level}").into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_policy(cli: &Cli) -> Result<PayrollPolicy> {
    let loader = match &cli.policy {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("failed to load policy from {}", path.display()))?,
        None => ConfigLoader::preset(cli.preset.unwrap_or_default().name())?,
    };
    let mut policy = loader.into_policy();
    if let Some(mode) = cli.commission_without_hours {
        policy = policy.with_commission_requires_hours(matches!(mode, CommissionMode::Deny));
    }
    Ok(policy)
}

fn run(cli: &Cli) -> Result<()> {
    let policy = resolve_policy(cli)?;
    debug!(policy = %policy.name, "Using payroll policy");

    let input = load_input(&cli.input)
        .with_context(|| format!("failed to read employee records from {}", cli.input.display()))?;
    let mut run = PayrollRun::new(policy);
    if let Err(err) = run.admit_input(&input) {
        print!("{}", DiagnosticLines::new(run.diagnostics()));
        return Err(err).context("payroll run aborted");
    }

    if cli.json {
        let json = serde_json::to_string_pretty(&run.outcome())?;
        println!("{}", json);
    } else {
        print!("{}", run.issue_reports());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_default_preset_is_basic() {
        let policy = resolve_policy(&parse(&["payroll", "employees.txt"])).unwrap();
        assert_eq!(policy.name, "basic");
        assert!(policy.rules.commission_requires_hours);
    }

    #[test]
    fn test_extended_preset_pays_commission_without_hours() {
        let policy =
            resolve_policy(&parse(&["payroll", "employees.txt", "--preset", "extended"])).unwrap();
        assert_eq!(policy.name, "extended");
        assert!(!policy.rules.commission_requires_hours);
    }

    #[test]
    fn test_allow_lifts_the_hours_requirement() {
        let cli = parse(&["payroll", "employees.txt", "--commission-without-hours", "allow"]);
        assert!(!resolve_policy(&cli).unwrap().rules.commission_requires_hours);
    }

    #[test]
    fn test_deny_sets_the_hours_requirement() {
        let cli = parse(&[
            "payroll",
            "employees.txt",
            "--preset",
            "extended",
            "--commission-without-hours",
            "deny",
        ]);
        assert!(resolve_policy(&cli).unwrap().rules.commission_requires_hours);
    }

    #[test]
    fn test_policy_file_conflicts_with_preset() {
        let result = Cli::try_parse_from([
            "payroll",
            "employees.txt",
            "--policy",
            "policy.yaml",
            "--preset",
            "basic",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity_counts() {
        assert_eq!(parse(&["payroll", "employees.txt", "-vv"]).verbose, 2);
    }
}
