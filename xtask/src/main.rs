//! Custom cargo commands for papershelf.
//!
//! Usage:
//!   cargo xtask verify      - Run full verification suite
//!   cargo xtask test        - Run all tests
//!   cargo xtask check       - Quick check (check + test + clippy)
//!   cargo xtask bench       - Run benchmarks
//!   cargo xtask build-wasm  - Build the browser package with wasm-pack

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Fixtures every verification run loads through the CLI.
const FIXTURES: &[&str] = &[
    "data/fixtures/shelf.json",
    "data/fixtures/sparse.json",
    "data/fixtures/no_index.json",
];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("build-wasm") => build_wasm()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify      Run full verification suite (contracts + tests + clippy + wasm + fixtures)
  test        Run all Rust tests
  check       Quick check (cargo check + test + clippy)
  bench       Run benchmarks
  build-wasm  Build the browser package (needs wasm-pack)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("papershelf Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking contract assertions...");
    check_contract_markers()?;
    println!("✓ Contract assertions present\n");

    println!("[2/5] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/5] Checking the wasm build...");
    run_cargo(&[
        "check",
        "--quiet",
        "--lib",
        "--no-default-features",
        "--features",
        "wasm",
        "--target",
        "wasm32-unknown-unknown",
    ])?;
    println!("✓ wasm target builds\n");

    println!("[5/5] Loading fixtures through the CLI...");
    for fixture in FIXTURES {
        run_cargo(&["run", "--quiet", "--", "inspect", fixture])?;
    }
    println!("✓ Fixtures load\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
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

/// Build the npm-style package the page imports.
fn build_wasm() -> Result<()> {
    let root = project_root()?;
    let status = Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "pkg",
            "--",
            "--no-default-features",
            "--features",
            "wasm",
        ])
        .current_dir(&root)
        .status()
        .context("Failed to run wasm-pack (is it installed?)")?;

    if !status.success() {
        bail!("wasm-pack build failed");
    }
    println!("✓ Package written to {}", root.join("pkg").display());
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

/// Each contract in `src/contracts.rs` must still assert something.
fn check_contract_markers() -> Result<()> {
    let root = project_root()?;
    let path = root.join("src/contracts.rs");
    let source = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let count = count_markers(&source);
    if count < 4 {
        bail!(
            "Expected at least 4 contract assertions in {}, found {}. Someone may have removed a check!",
            display_relative(&root, &path),
            count
        );
    }
    Ok(())
}

fn count_markers(source: &str) -> usize {
    source
        .lines()
        .filter(|line| line.contains("\"Contract violation:"))
        .count()
}

fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
