//! Custom cargo commands for folio.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz [T]  - Run fuzz targets (needs cargo-fuzz and nightly)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Fuzz targets declared in fuzz/Cargo.toml.
const FUZZ_TARGETS: &[&str] = &["tokenize_input", "search_queries", "corpus_parsing"];

/// Seconds each fuzz target runs for under `cargo xtask fuzz`.
const FUZZ_SECONDS: u32 = 60;

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.next().as_deref())?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (contracts + tests + clippy + wasm build)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  fuzz [T]  Run one fuzz target, or all of them for {}s each
"#,
        FUZZ_SECONDS
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Folio Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking contract markers...");
    check_contract_markers()?;
    println!("✓ Contract markers present\n");

    println!("[2/5] Running Rust tests (debug, contracts on)...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/5] Running Rust tests (release, contracts off)...");
    run_cargo(&["test", "--quiet", "--release"])?;
    println!("✓ Release tests passed\n");

    println!("[4/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[5/5] Checking wasm feature...");
    run_cargo(&["check", "--quiet", "--lib", "--features", "wasm"])?;
    println!("✓ wasm feature builds\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    println!("\nSafe to commit changes.");

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
    run_cargo(&["check"])?;

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

/// Run fuzz targets through cargo-fuzz.
fn fuzz(target: Option<&str>) -> Result<()> {
    let targets: Vec<&str> = match target {
        Some(name) if FUZZ_TARGETS.contains(&name) => vec![name],
        Some(name) => bail!(
            "Unknown fuzz target '{}'. Available: {}",
            name,
            FUZZ_TARGETS.join(", ")
        ),
        None => FUZZ_TARGETS.to_vec(),
    };

    let max_time = format!("-max_total_time={}", FUZZ_SECONDS);
    for (i, name) in targets.iter().enumerate() {
        println!("[{}/{}] Fuzzing {}...", i + 1, targets.len(), name);
        run_cargo(&["+nightly", "fuzz", "run", name, "--", &max_time])?;
        println!("✓ {} survived {}s\n", name, FUZZ_SECONDS);
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

/// The ranking contracts live in `src/contracts.rs` and are called from the
/// search path. Fail loudly if someone strips the calls out.
fn check_contract_markers() -> Result<()> {
    let root = project_root()?;
    let search_rs = std::fs::read_to_string(root.join("src/search/mod.rs"))
        .context("Failed to read src/search/mod.rs")?;

    let required = [
        "check_score_valid",
        "check_ranking_sorted",
        "check_ranking_bounds",
    ];
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|name| !search_rs.contains(name))
        .collect();

    if !missing.is_empty() {
        bail!(
            "Search path no longer calls contract checks: {}",
            missing.join(", ")
        );
    }

    Ok(())
}
