//! zeroes-bench-harness
//!
//! Time both movers on generated arrays (generate -> move -> check) and
//! append CSV rows into `benchmarks/reports/bench-<unix>.csv`.
//!
//! Usage examples:
//!   cargo run -p zeroes-bench-harness -- --profile benchmarks/configs/profiles/small.toml
//!   cargo run -p zeroes-bench-harness -- --profile benchmarks/configs/profiles/medium.toml --strategy space-optimized

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Deserialize;

use zeroes_core::{check_moved, generator::generate_array, SpaceOptimized, Strategy};

#[derive(Debug, Deserialize)]
struct Profile {
    /// Array lengths to benchmark
    lens: Vec<usize>,
    /// Probability that a generated element is zero
    zero_ratio: f64,
    /// RNG seed (offset by the repeat index)
    seed: u64,
    /// Repetitions per (length, strategy)
    repeats: u32,
    /// Strategies to run; all when omitted
    #[serde(default)]
    strategies: Option<Vec<Strategy>>,
}

fn parse_flag(name: &str, default: &str) -> String {
    let mut it = std::env::args().skip(1);
    while let Some(k) = it.next() {
        if k == format!("--{name}") {
            return it.next().unwrap_or_else(|| default.to_string());
        }
    }
    default.to_string()
}

fn dur_us(d: Duration) -> u128 {
    d.as_micros()
}

/// Parse a profile and reject entries the movers cannot run.
fn load_profile(src: &str) -> Result<Profile> {
    let profile: Profile = toml::from_str(src).context("parse profile toml")?;
    if let Some(i) = profile.lens.iter().position(|&len| len == 0) {
        anyhow::bail!("profile lens[{i}] is 0; every length must be at least 1");
    }
    Ok(profile)
}

/// Strategies selected by `--strategy` (overrides the profile) or the profile.
fn resolve_strategies(flag: &str, profile: &Profile) -> Result<Vec<Strategy>> {
    if flag == "all" {
        return Ok(profile
            .strategies
            .clone()
            .unwrap_or_else(|| Strategy::ALL.to_vec()));
    }
    let s = flag.parse::<Strategy>().with_context(|| {
        format!(
            "bad --strategy (use all|{}|{})",
            Strategy::RuntimeOptimized.slug(),
            Strategy::SpaceOptimized.slug()
        )
    })?;
    Ok(vec![s])
}

fn main() -> Result<()> {
    let profile_path = PathBuf::from(parse_flag(
        "profile",
        "benchmarks/configs/profiles/small.toml",
    ));
    let strategy_str = parse_flag("strategy", "all");

    let profile_src = fs::read_to_string(&profile_path)
        .with_context(|| format!("read profile {}", profile_path.display()))?;
    let profile = load_profile(&profile_src)
        .with_context(|| format!("load profile {}", profile_path.display()))?;
    let strategies = resolve_strategies(&strategy_str, &profile)?;
    println!(
        "Profile: lens={:?}, zero_ratio={}, seed={}, repeats={}, strategies={strategies:?}",
        profile.lens, profile.zero_ratio, profile.seed, profile.repeats
    );

    fs::create_dir_all("benchmarks/reports").context("create benchmarks/reports")?;

    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before the unix epoch")?
        .as_secs();
    let csv_path = PathBuf::from(format!("benchmarks/reports/bench-{ts}.csv"));
    let mut csv = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&csv_path)
        .with_context(|| format!("open {}", csv_path.display()))?;
    writeln!(csv, "timestamp,strategy,len,zero_ratio,repeat,stage,us,extra")?;

    for &len in &profile.lens {
        for rep in 0..profile.repeats {
            // 1) generate (shared by every strategy in this repeat)
            let t0 = Instant::now();
            let input = generate_array(len, profile.zero_ratio, profile.seed + u64::from(rep));
            let t_gen = t0.elapsed();
            writeln!(
                csv,
                "{ts},-,{len},{},{rep},gen,{},",
                profile.zero_ratio,
                dur_us(t_gen)
            )?;

            for &s in &strategies {
                let mut a = input.clone();

                // 2) move
                let t0 = Instant::now();
                let extra = match s {
                    Strategy::SpaceOptimized => {
                        let steps = SpaceOptimized.move_zeroes_counted(&mut a)?;
                        format!("cursor_steps={}", steps.total())
                    }
                    Strategy::RuntimeOptimized => {
                        s.mover().move_zeroes(&mut a)?;
                        String::new()
                    }
                };
                let t_move = t0.elapsed();
                writeln!(
                    csv,
                    "{ts},{s},{len},{},{rep},move,{},{extra}",
                    profile.zero_ratio,
                    dur_us(t_move)
                )?;

                // 3) check invariants
                let t0 = Instant::now();
                check_moved(&input, &a)
                    .with_context(|| format!("{s} broke invariants at len {len}"))?;
                let t_check = t0.elapsed();
                writeln!(
                    csv,
                    "{ts},{s},{len},{},{rep},check,{},",
                    profile.zero_ratio,
                    dur_us(t_check)
                )?;
            }
        }
    }

    println!("Wrote report → {}", csv_path.display());
    Ok(())
}
