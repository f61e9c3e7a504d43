//! Custom cargo commands for guardrail.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask levels    - Run tests under every build level and mode
//!   cargo xtask check     - Quick check
//!   cargo xtask kani      - Run Kani proofs

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("levels") => levels()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("kani") => kani()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (markers + levels + clippy)
  test      Run all Rust tests
  levels    Run tests at build levels 0, 1, 2 and in continue/compliant modes
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  kani      Run Kani proofs in kani-proofs/
"#
    );
}

/// One configuration the test suite must pass under.
struct Level {
    name: &'static str,
    /// Value for `GUARDRAIL_BUILD_LEVEL`, if the features should be overridden.
    env_level: Option<&'static str>,
    features: &'static [&'static str],
}

const LEVELS: &[Level] = &[
    Level {
        name: "level 0 (checks off)",
        env_level: Some("0"),
        features: &[],
    },
    Level {
        name: "level 1 (default features)",
        env_level: None,
        features: &[],
    },
    Level {
        name: "level 2 (audit)",
        env_level: None,
        features: &["audit"],
    },
    Level {
        name: "level 1, continue-on-violation",
        env_level: None,
        features: &["continue-on-violation"],
    },
    Level {
        name: "level 2, autosar-compliant",
        env_level: Some("2"),
        features: &["autosar-compliant"],
    },
];

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("guardrail Verification Suite");
    println!("==========================================\n");

    println!("[1/3] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/3] Running tests at every build level...");
    levels()?;
    println!("✓ All build levels passed\n");

    println!("[3/3] Running clippy...");
    run_cargo(&["clippy", "--workspace", "--quiet", "--", "-D", "warnings"], None)?;
    println!("✓ Clippy passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test", "--workspace"], None)
}

/// Run the suite once per entry in [`LEVELS`]
fn levels() -> Result<()> {
    for (i, level) in LEVELS.iter().enumerate() {
        println!("  [{}/{}] {}", i + 1, LEVELS.len(), level.name);

        let features = level.features.join(",");
        let mut args = vec!["test", "--quiet"];
        if !features.is_empty() {
            args.push("--features");
            args.push(&features);
        }
        run_cargo(&args, level.env_level)
            .with_context(|| format!("test suite failed at {}", level.name))?;
    }
    Ok(())
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--workspace"], None)?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"], None)?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--workspace", "--quiet", "--", "-D", "warnings"], None)?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"], None)
}

/// Run Kani proofs (requires cargo-kani)
fn kani() -> Result<()> {
    let dir = project_root()?.join("kani-proofs");

    let status = Command::new("cargo")
        .arg("kani")
        .current_dir(&dir)
        .status()
        .context("Failed to run cargo kani (is cargo-kani installed?)")?;

    if !status.success() {
        bail!("Kani proofs failed");
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

fn run_cargo(args: &[&str], build_level: Option<&str>) -> Result<()> {
    let root = project_root()?;

    let mut cmd = Command::new("cargo");
    cmd.args(args).current_dir(&root);
    match build_level {
        Some(level) => cmd.env("GUARDRAIL_BUILD_LEVEL", level),
        None => cmd.env_remove("GUARDRAIL_BUILD_LEVEL"),
    };

    let status = cmd
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output.stdout.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();

    if count < 5 {
        bail!(
            "Expected at least 5 INVARIANT markers, found {}. Someone may have removed safety comments!",
            count
        );
    }

    Ok(())
}
