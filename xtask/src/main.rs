//! Custom cargo commands for retort.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (cargo check + test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run every fuzz target briefly (needs cargo-fuzz)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Blend weights that must be present in the scoring module.
const WEIGHT_NAMES: &[&str] = &["TEXT_WEIGHT", "TOPIC_WEIGHT", "LENGTH_WEIGHT", "TOPIC_COUNT_WEIGHT"];

const FUZZ_TARGETS: &[&str] = &["correction_input", "candidate_scoring", "ranking_output"];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (contracts + tests + clippy + weights)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  fuzz      Run each fuzz target for 30 seconds
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("retort Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking contract markers...");
    check_contract_markers()?;
    println!("✓ Contract checks present\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ All Rust tests passed (default and minimal features)\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Verifying scoring weights...");
    verify_weights()?;
    println!("✓ Weights sum to 1\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

fn test() -> Result<()> {
    run_cargo(&["test"])
}

fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

fn fuzz() -> Result<()> {
    let fuzz_dir = project_root()?.join("fuzz");
    for target in FUZZ_TARGETS {
        println!("fuzzing {target}...");
        let status = Command::new("cargo")
            .args(["+nightly", "fuzz", "run", target, "--", "-max_total_time=30"])
            .current_dir(&fuzz_dir)
            .status()
            .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;
        if !status.success() {
            bail!("fuzz target {} failed", target);
        }
    }
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// The ranking engine calls the output contracts; losing them silently is a regression.
fn check_contract_markers() -> Result<()> {
    let root = project_root()?;
    let contracts = std::fs::read_to_string(root.join("src/contracts.rs"))
        .context("Failed to read contracts.rs")?;
    let engine = std::fs::read_to_string(root.join("src/engine.rs"))
        .context("Failed to read engine.rs")?;

    let count = contracts.matches("Contract violation").count();
    if count < 3 {
        bail!(
            "Expected at least 3 contract assertions, found {}. Someone may have removed them!",
            count
        );
    }
    if !engine.contains("check_answers_well_formed") {
        bail!("engine.rs no longer checks its output contract");
    }
    Ok(())
}

fn verify_weights() -> Result<()> {
    let root = project_root()?;
    let components = std::fs::read_to_string(root.join("src/scoring/components.rs"))
        .context("Failed to read scoring/components.rs")?;

    let mut total = 0.0;
    for name in WEIGHT_NAMES {
        let Some(value) = extract_const(&components, name) else {
            bail!("weight {} not found in scoring/components.rs", name);
        };
        if value <= 0.0 {
            bail!("weight {} = {} must be positive", name, value);
        }
        println!("  {name:<20} {value}");
        total += value;
    }

    if (total - 1.0).abs() > 1e-9 {
        bail!("weights sum to {}, expected 1.0", total);
    }
    Ok(())
}

/// Value of `pub const NAME: f32 = 0.4;`
fn extract_const(content: &str, name: &str) -> Option<f64> {
    let prefix = format!("pub const {}:", name);
    content
        .lines()
        .find(|line| line.trim_start().starts_with(&prefix))
        .and_then(|line| line.split('=').nth(1))
        .and_then(|rhs| rhs.trim().trim_end_matches(';').trim().parse().ok())
}
