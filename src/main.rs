//! CLI entry point for `mocksweep`.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use mocksweep::audit::cell;
use mocksweep::audit::grant::GrantExtractor;
use mocksweep::audit::report as audit_report;
use mocksweep::routes::report as routes_report;
use mocksweep::routes::RouteConfig;
use mocksweep::scrub::else_promoter;
use mocksweep::scrub::import_stripper::{self, StripStatus};
use mocksweep::scrub::line_stripper;
use mocksweep::scrub::pattern_stripper;
use mocksweep::scrub::scanner;

#[derive(Parser)]
#[command(
    name = "mocksweep",
    about = "Strip mock scaffolding out of a frontend API layer and audit permission seed data"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report mock residue left behind by earlier passes (detect-only)
    Scan {
        /// Directory tree to scan
        root: PathBuf,
    },
    /// Remove if (useMock) blocks up to the real-API return, line by line
    Sweep {
        /// Directory tree to rewrite
        root: PathBuf,
    },
    /// Remove the two multi-line mock residue shapes
    Patch {
        /// Directory tree to rewrite
        root: PathBuf,
    },
    /// Remove useMock guard blocks from an explicit file list
    Strip {
        /// Base directory the listed files resolve against
        #[arg(long, default_value = ".")]
        root: PathBuf,
        /// Files to rewrite, relative to --root
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Remove if (useMock) {...} else {...}, keeping the else body
    Promote {
        /// File to rewrite
        file: PathBuf,
    },
    /// Compare the permission seed file against the access-control matrix
    Audit {
        /// Permission seed SQL file
        seed: PathBuf,
    },
    /// Compare a route permission configuration against the reference table
    Routes {
        /// Route configuration JSON (route path to role list)
        config: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Scan { root } => run_scan(root),
        Command::Sweep { root } => run_sweep(root),
        Command::Patch { root } => run_patch(root),
        Command::Strip { root, files } => run_strip(root, files),
        Command::Promote { file } => run_promote(file),
        Command::Audit { seed } => run_audit(seed),
        Command::Routes { config } => run_routes(config),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        process::exit(2);
    }
}

fn run_scan(root: &Path) -> Result<(), String> {
    let findings = scanner::scan_tree(root)?;

    for finding in &findings {
        println!("❌ {}", finding.path.display());
        for residue in &finding.residues {
            println!("   - {residue}");
        }
    }

    if findings.is_empty() {
        println!("✅ No syntax residue found");
    } else {
        println!();
        println!("⚠️  Found {} files with problems", findings.len());
    }
    Ok(())
}

fn run_sweep(root: &Path) -> Result<(), String> {
    let cleaned = line_stripper::sweep_tree(root)?;

    for path in &cleaned {
        println!("✅ Cleaned: {}", path.display());
    }
    println!();
    println!("📊 Total: Fixed {} files", cleaned.len());
    Ok(())
}

fn run_patch(root: &Path) -> Result<(), String> {
    let fixed = pattern_stripper::patch_tree(root)?;

    for path in &fixed {
        println!("✅ Fixed: {}", path.display());
    }
    println!();
    println!("📊 Total: Fixed {} files", fixed.len());
    Ok(())
}

fn run_strip(root: &Path, files: &[PathBuf]) -> Result<(), String> {
    let outcomes = import_stripper::strip_files(root, files)?;

    let mut fixed_files = 0;
    let mut removed_blocks = 0;
    for outcome in &outcomes {
        match outcome.status {
            StripStatus::Missing => println!("❌ File not found: {}", outcome.path.display()),
            StripStatus::Clean => println!("✅ Clean: {}", outcome.path.display()),
            StripStatus::Fixed(blocks) => {
                println!("✅ Fixed: {} ({blocks} blocks)", outcome.path.display());
                fixed_files += 1;
                removed_blocks += blocks;
            }
        }
    }
    println!();
    println!("📊 Total: Fixed {fixed_files} files, removed {removed_blocks} blocks");
    Ok(())
}

fn run_promote(file: &Path) -> Result<(), String> {
    else_promoter::promote_file(file)?;
    println!(
        "✅ Fixed: {} - removed all useMock guard blocks",
        file.display()
    );
    Ok(())
}

fn run_audit(seed: &Path) -> Result<(), String> {
    let sql = std::fs::read_to_string(seed)
        .map_err(|e| format!("Failed to read {}: {e}", seed.display()))?;

    let grants = GrantExtractor::new().extract(&sql);
    let derived = cell::derive_table(&grants);
    print!("{}", audit_report::build_report(&derived));
    Ok(())
}

fn run_routes(config: &Path) -> Result<(), String> {
    let json = std::fs::read_to_string(config)
        .map_err(|e| format!("Failed to read {}: {e}", config.display()))?;

    let config = RouteConfig::load_from_json(&json)?;
    print!("{}", routes_report::build_report(&config));
    Ok(())
}
