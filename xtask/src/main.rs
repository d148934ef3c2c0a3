//! Custom cargo commands for sortsearch.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests (default and no-default features)
//!   cargo xtask kani      - Run Kani model checking proofs
//!   cargo xtask fuzz <t>  - Run a fuzz target for 60 seconds
//!   cargo xtask check     - Quick check (no Kani)
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Minimum number of "Contract violation:" messages expected in the contracts module.
const MIN_CONTRACT_MARKERS: usize = 3;

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("kani") => kani()?,
        Some("fuzz") => fuzz(args.next().as_deref())?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify       Run full verification suite (contracts + tests + clippy + Kani)
  test         Run all Rust tests, with and without the parallel feature
  kani         Run Kani proofs only
  fuzz <name>  Run one fuzz target (merge_sort, binary_search, strategies)
  check        Quick check (cargo test + clippy, no Kani)
  bench        Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("sortsearch Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking contract markers...");
    check_contract_markers()?;
    println!("✓ Contract markers present\n");

    println!("[2/4] Running Rust tests...");
    test()?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Running Kani proofs...");
    kani()?;
    println!("✓ Kani proofs pass\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests, both feature sets
fn test() -> Result<()> {
    run_cargo(&["test", "--quiet"])?;
    run_cargo(&["test", "--quiet", "--no-default-features"])
}

/// Run Kani proofs
fn kani() -> Result<()> {
    let kani_dir = project_root()?.join("kani-proofs");
    if !kani_dir.exists() {
        println!("  (no kani-proofs directory, skipping)");
        return Ok(());
    }
    if !has_cargo_subcommand("kani") {
        println!("  (cargo-kani not installed, skipping)");
        return Ok(());
    }

    run_cargo_in(&kani_dir, &["kani"])
}

/// Run a fuzz target for a bounded time
fn fuzz(target: Option<&str>) -> Result<()> {
    let Some(target) = target else {
        bail!("usage: cargo xtask fuzz <merge_sort|binary_search|strategies>");
    };

    let fuzz_dir = project_root()?.join("fuzz");
    run_cargo_in(
        &fuzz_dir,
        &["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"],
    )
}

/// Quick check (no Kani)
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

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
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
    run_cargo_in(&project_root()?, args)
}

fn run_cargo_in(dir: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn has_cargo_subcommand(name: &str) -> bool {
    Command::new("cargo")
        .args([name, "--version"])
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

fn check_contract_markers() -> Result<()> {
    let path = project_root()?.join("src/verify/contracts.rs");
    let source = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let count = source.matches("Contract violation:").count();
    if count < MIN_CONTRACT_MARKERS {
        bail!(
            "Expected at least {} contract checks, found {}. Someone may have removed a post-condition!",
            MIN_CONTRACT_MARKERS,
            count
        );
    }

    Ok(())
}
