// crates/zeroes-cli/src/main.rs

#![forbid(unsafe_code)]
#![deny(
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo
)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zeroes_core::{
    check_moved,
    generator::generate_array,
    invariants::zero_count,
    verify::{self, ScenarioReport},
    CursorSteps, Element, SpaceOptimized, Strategy,
};

#[derive(Parser, Debug)]
#[command(
    name = "zeroes-cli",
    about = "Move all zero values in an array to its beginning",
    long_about = "Move all zero values in an array to its beginning.\n\nWithout a subcommand, runs the built-in self-test against every strategy.",
    version = env!("CARGO_PKG_VERSION"),
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Run the pass/fail scenarios against every strategy (default).
    Selftest {
        /// Print the reports as JSON instead of status lines
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Move the zeros of the given values to the front
    Run {
        /// Strategy to use (all strategies when omitted)
        #[arg(value_enum, long)]
        strategy: Option<StrategyOpt>,

        /// Values, separated by spaces or commas (e.g. `1,0,-3 0`)
        #[arg(
            required = true,
            value_delimiter = ',',
            allow_negative_numbers = true
        )]
        values: Vec<Element>,
    },

    /// Generate a seeded array and move its zeros to the front
    Generate {
        /// Number of elements (>0)
        #[arg(long, default_value_t = 32, value_parser = clap::value_parser!(u32).range(1..))]
        len: u32,

        /// Probability that an element is zero, in [0, 1]
        #[arg(long, default_value_t = 0.3)]
        zero_ratio: f64,

        /// RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Strategy to use (all strategies when omitted)
        #[arg(value_enum, long)]
        strategy: Option<StrategyOpt>,

        /// Also print the input and output arrays
        #[arg(long, default_value_t = false)]
        print: bool,
    },
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
enum StrategyOpt {
    /// Scratch buffer, O(n) extra space
    RuntimeOptimized,
    /// In place, O(1) extra space
    SpaceOptimized,
}

impl From<StrategyOpt> for Strategy {
    fn from(opt: StrategyOpt) -> Self {
        match opt {
            StrategyOpt::RuntimeOptimized => Self::RuntimeOptimized,
            StrategyOpt::SpaceOptimized => Self::SpaceOptimized,
        }
    }
}

/// Selected strategies, or all of them.
fn selected(opt: Option<StrategyOpt>) -> Vec<Strategy> {
    opt.map_or_else(|| Strategy::ALL.to_vec(), |s| vec![s.into()])
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.cmd.unwrap_or(Cmd::Selftest { json: false }) {
        Cmd::Selftest { json } => selftest(json),

        Cmd::Run { strategy, values } => run(strategy, &values),

        Cmd::Generate {
            len,
            zero_ratio,
            seed,
            strategy,
            print,
        } => generate(len, zero_ratio, seed, strategy, print),
    }
}

/// Initialize tracing with an env-driven filter (default INFO).
///
/// Logs go to stderr so `selftest --json` keeps stdout machine-readable.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn selftest(json: bool) -> Result<()> {
    info!(json, "running self-test scenarios");
    let reports = verify::run_all();
    report(&mut std::io::stdout().lock(), &reports, json)
}

/// Print every report, then fail if any scenario failed.
///
/// All reports are written before the outcome is decided, so one failing
/// scenario never hides the ones after it.
fn report<W: Write>(out: &mut W, reports: &[ScenarioReport], json: bool) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(reports).context("serialize scenario reports")?;
        writeln!(out, "{text}")?;
    } else {
        writeln!(out)?;
        writeln!(out, "Move all zero values in a random array to its beginning")?;
        writeln!(out)?;
        for r in reports {
            writeln!(out, "{r}")?;
            if let Some(detail) = &r.detail {
                warn!(strategy = %r.strategy, scenario = ?r.scenario, "{detail}");
            }
        }
        writeln!(out)?;
        writeln!(out, "Execution finished")?;
        writeln!(out)?;
    }
    out.flush()?;

    let failed = reports.iter().filter(|r| !r.passed).count();
    if failed > 0 {
        bail!("{failed} of {} scenarios failed", reports.len());
    }
    Ok(())
}

/// Move `input` with `strategy`, check the result, and return it with the
/// cursor counts when the strategy reports them.
fn move_checked(
    strategy: Strategy,
    input: &[Element],
) -> Result<(Vec<Element>, Option<CursorSteps>)> {
    let mut out = input.to_vec();
    let steps = match strategy {
        Strategy::SpaceOptimized => Some(
            SpaceOptimized
                .move_zeroes_counted(&mut out)
                .with_context(|| format!("{strategy} rejected the input"))?,
        ),
        Strategy::RuntimeOptimized => {
            strategy
                .mover()
                .move_zeroes(&mut out)
                .with_context(|| format!("{strategy} rejected the input"))?;
            None
        }
    };
    check_moved(input, &out)
        .with_context(|| format!("{strategy} produced an invalid arrangement"))?;
    Ok((out, steps))
}

fn run(strategy: Option<StrategyOpt>, values: &[Element]) -> Result<()> {
    info!(len = values.len(), zeros = zero_count(values), "moving zeros");
    for s in selected(strategy) {
        let (out, _) = move_checked(s, values)?;
        println!("{s}: {out:?}");
    }
    Ok(())
}

fn generate(
    len: u32,
    zero_ratio: f64,
    seed: u64,
    strategy: Option<StrategyOpt>,
    print: bool,
) -> Result<()> {
    if !(0.0..=1.0).contains(&zero_ratio) {
        bail!("--zero-ratio must be within [0, 1], got {zero_ratio}");
    }

    info!(len, zero_ratio, seed, "generating array");
    let input = generate_array(len as usize, zero_ratio, seed);
    let zeros = zero_count(&input);
    if print {
        println!("input: {input:?}");
    }

    for s in selected(strategy) {
        let (out, steps) = move_checked(s, &input)?;
        match steps {
            Some(st) => println!(
                "{s}: len={}, zeros={zeros}, cursor steps={} (outer={}, inner={})",
                out.len(),
                st.total(),
                st.outer,
                st.inner
            ),
            None => println!("{s}: len={}, zeros={zeros}", out.len()),
        }
        if print {
            println!("  {out:?}");
        }
    }
    Ok(())
}
