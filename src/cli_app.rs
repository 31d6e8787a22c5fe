//! Top-level CLI definition and dispatch.

use std::path::PathBuf;
use std::str::FromStr;

use chrono::Utc;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use serde_json::json;

use crate::core::config::Config;
use crate::core::errors::{BiqError, Result};
use crate::engine;
use crate::logger::JsonlLogger;
use crate::model::{Adjustment, AdjustmentKind, Scenario, ScenarioResults};
use crate::narrative::{self, InsightRequest, UnconfiguredInsight};
use crate::report;
use crate::sample;
use crate::store;

/// Benefits IQ — deterministic benefits scenario projection.
#[derive(Parser)]
#[command(name = "biq", version, about)]
pub struct Cli {
    /// TOML config file (default: ~/.config/biq/config.toml when present).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Project scenario costs from a plans file and adjustment specs.
    Project(ProjectArgs),
    /// Show baseline costs with no adjustments applied.
    Baseline(BaselineArgs),
    /// Write a seeded sample plans file for experimentation.
    Sample(SampleArgs),
    /// Show or locate configuration.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

/// Arguments for `biq project`.
#[derive(Args)]
pub struct ProjectArgs {
    /// Plans JSON file (falls back to `plans_path` from config).
    #[arg(long, value_name = "FILE")]
    pub plans: Option<PathBuf>,

    /// Adjustment spec, repeatable: `kind=value[@plan-id]`, e.g.
    /// `premium_change=0.10` or `deductible_change=-0.2@plan-7`.
    #[arg(long = "adjust", value_name = "SPEC")]
    pub adjustments: Vec<AdjustmentSpec>,

    /// Adjustment list JSON file, applied before any `--adjust` specs.
    #[arg(long, value_name = "FILE")]
    pub adjust_file: Option<PathBuf>,

    /// Restrict plans to one organization id.
    #[arg(long, value_name = "ORG")]
    pub org: Option<String>,

    /// Scenario name used in output and narrative.
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Append a narrative insight paragraph.
    #[arg(long)]
    pub narrate: bool,

    /// Emit a structured JSON payload instead of the summary table.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `biq baseline`.
#[derive(Args)]
pub struct BaselineArgs {
    /// Plans JSON file (falls back to `plans_path` from config).
    #[arg(long, value_name = "FILE")]
    pub plans: Option<PathBuf>,

    /// Restrict plans to one organization id.
    #[arg(long, value_name = "ORG")]
    pub org: Option<String>,

    /// Emit a structured JSON payload instead of the summary table.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `biq sample`.
#[derive(Args)]
pub struct SampleArgs {
    /// Output file for the generated plans JSON.
    #[arg(long, value_name = "FILE")]
    pub out: PathBuf,

    /// Organization id stamped on every generated plan.
    #[arg(long, default_value = "org-sample")]
    pub org: String,

    /// Plan year.
    #[arg(long, default_value_t = 2025)]
    pub year: i32,

    /// Number of plans to generate.
    #[arg(long = "plans", default_value_t = 6)]
    pub count: usize,

    /// RNG seed; identical seeds produce identical files.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Config subcommands.
#[derive(Subcommand, Clone, Copy)]
pub enum ConfigAction {
    /// Print the resolved configuration as TOML.
    Show,
    /// Print the default config file location.
    Path,
}

/// One `kind=value[@plan-id]` adjustment spec from the command line.
#[derive(Debug, Clone)]
pub struct AdjustmentSpec(pub Adjustment);

impl FromStr for AdjustmentSpec {
    type Err = BiqError;

    fn from_str(spec: &str) -> Result<Self> {
        let fail = |details: &str| BiqError::AdjustmentSpec {
            spec: spec.to_string(),
            details: details.to_string(),
        };
        let (kind_raw, rest) = spec
            .split_once('=')
            .ok_or_else(|| fail("expected kind=value"))?;
        let kind = match kind_raw.trim() {
            "premium_change" => AdjustmentKind::PremiumChange,
            "deductible_change" => AdjustmentKind::DeductibleChange,
            "enrollment_shift" => AdjustmentKind::EnrollmentShift,
            _ => {
                return Err(fail(
                    "unknown kind (expected premium_change, deductible_change, or enrollment_shift)",
                ));
            }
        };
        let (value_raw, target) = match rest.split_once('@') {
            Some((value, target)) => (value, Some(target)),
            None => (rest, None),
        };
        let magnitude: f64 = value_raw
            .trim()
            .parse()
            .map_err(|_| fail("magnitude must be a decimal fraction, e.g. 0.10"))?;

        let adjustment = match target {
            Some(plan_id) if !plan_id.trim().is_empty() => {
                Adjustment::with_target(kind, magnitude, plan_id.trim())
            }
            _ => Adjustment::new(kind, magnitude),
        };
        Ok(Self(adjustment))
    }
}

/// Dispatch CLI commands.
///
/// # Errors
/// Returns an error if the subcommand fails.
pub fn run(cli: &Cli) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;
    let logger = config
        .log_path
        .clone()
        .map_or_else(JsonlLogger::disabled, JsonlLogger::new);

    match &cli.command {
        Command::Project(args) => project_command(args, &config, &logger),
        Command::Baseline(args) => baseline_command(args, &config, &logger),
        Command::Sample(args) => sample_command(args),
        Command::Config { action } => config_command(*action, &config),
        Command::Completions { shell } => {
            clap_complete::generate(*shell, &mut Cli::command(), "biq", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn project_command(args: &ProjectArgs, config: &Config, logger: &JsonlLogger) -> Result<()> {
    let plans = load_baseline(args.plans.as_ref(), args.org.as_deref(), config)?;

    let mut adjustments = match args.adjust_file.as_ref() {
        Some(path) => store::load_adjustments(path)?,
        None => Vec::new(),
    };
    adjustments.extend(args.adjustments.iter().map(|spec| spec.0.clone()));

    let baseline = engine::project(&plans, &[]);
    let results = engine::project(&plans, &adjustments);
    let scenario = Scenario {
        name: args
            .name
            .clone()
            .unwrap_or_else(|| config.narrative.default_scenario_name.clone()),
        description: None,
        adjustments,
        results,
        created_at: Utc::now(),
    };

    let insight = (args.narrate && config.narrative.enabled).then(|| {
        let request = InsightRequest {
            scenario_name: scenario.name.clone(),
            baseline_cost: baseline.projected_total_cost,
            projected_cost: results.projected_total_cost,
            adjustments: scenario.adjustments.iter().map(narrative::describe).collect(),
        };
        narrative::insight_or_fallback(&UnconfiguredInsight, &request)
    });

    logger.info(
        "scenario projected",
        json!({
            "scenario": scenario.name,
            "plans": plans.len(),
            "adjustments": scenario.adjustments.len(),
            "delta": results.delta_from_baseline,
        }),
    );

    if args.json {
        emit_json(&report::json_payload("project", &scenario, insight.as_deref()))
    } else {
        print_summary(&scenario, &baseline, insight.as_deref());
        Ok(())
    }
}

fn baseline_command(args: &BaselineArgs, config: &Config, logger: &JsonlLogger) -> Result<()> {
    let plans = load_baseline(args.plans.as_ref(), args.org.as_deref(), config)?;
    let results = engine::project(&plans, &[]);
    let scenario = Scenario {
        name: "Baseline".to_string(),
        description: None,
        adjustments: Vec::new(),
        results,
        created_at: Utc::now(),
    };

    logger.info(
        "baseline computed",
        json!({ "plans": plans.len(), "total": results.projected_total_cost }),
    );

    if args.json {
        emit_json(&report::json_payload("baseline", &scenario, None))
    } else {
        print_summary(&scenario, &results, None);
        Ok(())
    }
}

fn sample_command(args: &SampleArgs) -> Result<()> {
    let plans = sample::sample_plans(&args.org, args.year, args.count, args.seed);
    let payload = serde_json::to_string_pretty(&plans)?;
    std::fs::write(&args.out, payload).map_err(|source| BiqError::io(&args.out, source))?;
    println!(
        "wrote {} plans for {} to {}",
        plans.len(),
        args.org,
        args.out.display()
    );
    Ok(())
}

fn config_command(action: ConfigAction, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let rendered = toml::to_string_pretty(config).map_err(|error| BiqError::Serialization {
                context: "toml",
                details: error.to_string(),
            })?;
            print!("{rendered}");
        }
        ConfigAction::Path => match Config::default_path() {
            Some(path) => println!("{}", path.display()),
            None => println!("(no home directory; built-in defaults apply)"),
        },
    }
    Ok(())
}

fn load_baseline(
    plans_arg: Option<&PathBuf>,
    org_arg: Option<&str>,
    config: &Config,
) -> Result<Vec<crate::model::PlanRecord>> {
    let path = plans_arg
        .cloned()
        .or_else(|| config.plans_path.clone())
        .ok_or_else(|| BiqError::InvalidConfig {
            details: "no plans file: pass --plans or set plans_path in config".to_string(),
        })?;
    let plans = store::load_plans(&path)?;
    let organization = org_arg.or(config.organization.as_deref());
    Ok(store::baseline_view(plans, organization))
}

fn emit_json(payload: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(payload)?);
    Ok(())
}

fn print_summary(scenario: &Scenario, baseline: &ScenarioResults, insight: Option<&str>) {
    println!("{}", scenario.name.bold());
    println!(
        "  baseline total   {}",
        report::format_currency(baseline.projected_total_cost)
    );
    println!(
        "  projected total  {}",
        report::format_currency(scenario.results.projected_total_cost).bold()
    );
    println!(
        "  employer share   {}",
        report::format_currency(scenario.results.projected_employer_cost)
    );
    println!(
        "  employee share   {}",
        report::format_currency(scenario.results.projected_employee_cost)
    );

    let delta = scenario.results.delta_from_baseline;
    let delta_text = format!(
        "{} ({})",
        report::format_currency(delta),
        report::format_delta_percent(&scenario.results)
    );
    let delta_colored = match delta.cmp(&0) {
        std::cmp::Ordering::Greater => delta_text.red(),
        std::cmp::Ordering::Less => delta_text.green(),
        std::cmp::Ordering::Equal => delta_text.normal(),
    };
    println!("  delta            {delta_colored}");

    if !scenario.adjustments.is_empty() {
        println!("  adjustments");
        for adjustment in &scenario.adjustments {
            println!("    - {}", narrative::describe(adjustment));
        }
    }

    if let Some(text) = insight {
        println!();
        println!("{}", "Insight".bold());
        println!("{text}");
    }
}
