mod config;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use uifix_core::{logo, mojibake};

#[derive(Debug, Parser)]
#[command(
    name = "uifix",
    version,
    about = "One-shot text repairs for the Orbit LMS web UI source tree."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Repair mis-decoded emoji sequences in the landing page source.
    FixEncoding(FixEncodingArgs),
    /// Swap the placeholder logo <div> for the real <img> tag across markup files.
    ReplaceLogo(ReplaceLogoArgs),
}

#[derive(Debug, Parser)]
struct FixEncodingArgs {
    /// Repository root (default: current directory).
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// File to repair (default: app/page.tsx under the repo root).
    #[arg(long)]
    file: Option<Utf8PathBuf>,
}

#[derive(Debug, Parser)]
struct ReplaceLogoArgs {
    /// Repository root (default: current directory).
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Directory to search (default: app under the repo root).
    #[arg(long)]
    root: Option<Utf8PathBuf>,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::FixEncoding(args) => cmd_fix_encoding(args),
        Command::ReplaceLogo(args) => cmd_replace_logo(args),
    }
}

/// Best-effort: every failure is reported as one stdout line and the process
/// still exits cleanly.
fn cmd_fix_encoding(args: FixEncodingArgs) -> anyhow::Result<()> {
    match fix_encoding(&args.repo_root, args.file) {
        Ok(()) => println!("Successfully fixed encoding issues."),
        Err(e) => println!("Error: {:#}", e),
    }
    Ok(())
}

fn fix_encoding(repo_root: &Utf8Path, file: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let file_config = config::load_or_default(repo_root).context("load uifix.toml config")?;
    let target = config::resolve_page_file(repo_root, file, &file_config);

    let report = mojibake::fix_file(&target)?;
    debug!(
        "fixed {} ({} garbled runs replaced)",
        target, report.occurrences
    );
    Ok(())
}

/// Fail-fast: the first error aborts the run. Files already rewritten stay
/// rewritten, and their paths have already been printed.
fn cmd_replace_logo(args: ReplaceLogoArgs) -> anyhow::Result<()> {
    let file_config =
        config::load_or_default(&args.repo_root).context("load uifix.toml config")?;
    let search_root = config::resolve_search_root(&args.repo_root, args.root, &file_config);

    let count = logo::replace_under(&search_root, |path| println!("Updated {}", path))
        .with_context(|| format!("replace logo under {}", search_root))?;

    println!("Total files updated: {}", count);
    Ok(())
}
