mod config;
mod explain;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Utc;
use clap::{Parser, Subcommand};
use fs_err as fs;
use sahayak_catalog::Catalog;
use sahayak_engine::match_report;
use sahayak_render::{render_match_md, render_profile_md};
use sahayak_types::profile::Profile;
use sahayak_types::report::{MatchReport, ToolInfo};
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "sahayak",
    version,
    about = "Welfare-scheme eligibility matcher and OCR profile extractor."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Match a profile JSON file against the scheme catalog.
    Match(MatchArgs),
    /// Extract a profile from raw OCR text, then match it.
    Scan(ScanArgs),
    /// Extract a profile from raw OCR text and print it.
    Extract(ExtractArgs),
    /// List the schemes in the resolved catalog.
    ListSchemes(ListSchemesArgs),
    /// Explain one scheme: benefit, link, and eligibility rules.
    Explain(ExplainArgs),
}

#[derive(Debug, Parser)]
struct MatchArgs {
    /// Profile JSON file.
    #[arg(long)]
    profile: Utf8PathBuf,

    /// Working root for sahayak.toml discovery (default: current directory).
    #[arg(long, default_value = ".")]
    dir: Utf8PathBuf,

    /// Directory of extra scheme JSON files (appended after built-ins).
    #[arg(long)]
    schemes_dir: Option<Utf8PathBuf>,

    /// Output directory for match artifacts (default: <dir>/artifacts/sahayak).
    #[arg(long)]
    out_dir: Option<Utf8PathBuf>,
}

#[derive(Debug, Parser)]
struct ScanArgs {
    /// Raw OCR text file.
    #[arg(long)]
    text: Utf8PathBuf,

    /// Optional base profile JSON; extracted attributes overlay it.
    #[arg(long)]
    profile: Option<Utf8PathBuf>,

    /// Working root for sahayak.toml discovery (default: current directory).
    #[arg(long, default_value = ".")]
    dir: Utf8PathBuf,

    /// Directory of extra scheme JSON files (appended after built-ins).
    #[arg(long)]
    schemes_dir: Option<Utf8PathBuf>,

    /// Output directory for match artifacts (default: <dir>/artifacts/sahayak).
    #[arg(long)]
    out_dir: Option<Utf8PathBuf>,
}

#[derive(Debug, Parser)]
struct ExtractArgs {
    /// Raw OCR text file.
    #[arg(long)]
    text: Utf8PathBuf,

    /// Also write profile.json and profile.md here.
    #[arg(long)]
    out_dir: Option<Utf8PathBuf>,
}

#[derive(Debug, Parser)]
struct ListSchemesArgs {
    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Working root for sahayak.toml discovery (default: current directory).
    #[arg(long, default_value = ".")]
    dir: Utf8PathBuf,

    /// Directory of extra scheme JSON files (appended after built-ins).
    #[arg(long)]
    schemes_dir: Option<Utf8PathBuf>,
}

#[derive(Debug, Parser)]
struct ExplainArgs {
    /// Scheme id to explain (e.g. "pm_kisan").
    scheme_id: String,

    /// Working root for sahayak.toml discovery (default: current directory).
    #[arg(long, default_value = ".")]
    dir: Utf8PathBuf,

    /// Directory of extra scheme JSON files (appended after built-ins).
    #[arg(long)]
    schemes_dir: Option<Utf8PathBuf>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
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
        Command::Match(args) => cmd_match(args),
        Command::Scan(args) => cmd_scan(args),
        Command::Extract(args) => cmd_extract(args),
        Command::ListSchemes(args) => cmd_list_schemes(args),
        Command::Explain(args) => cmd_explain(args),
    }
}

fn resolve_catalog(
    dir: &Utf8Path,
    schemes_dir_arg: Option<Utf8PathBuf>,
    out_dir_arg: Option<Utf8PathBuf>,
) -> anyhow::Result<(Catalog, Utf8PathBuf)> {
    let file_config = config::load_or_default(dir).context("load sahayak.toml config")?;
    let merged = config::merge(file_config, schemes_dir_arg, out_dir_arg);
    debug!(
        "merged config: schemes_dir={:?}, out_dir={}",
        merged.schemes_dir, merged.out_dir
    );

    let catalog = Catalog::resolve(merged.schemes_dir.as_deref()).context("resolve catalog")?;
    let out_dir = if merged.out_dir.is_absolute() {
        merged.out_dir
    } else {
        dir.join(merged.out_dir)
    };
    Ok((catalog, out_dir))
}

fn run_match(profile: Profile, catalog: &Catalog, out_dir: &Utf8Path) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir).with_context(|| format!("create {}", out_dir))?;

    let started_at = Utc::now();
    let mut report = match_report(tool_info(), profile, catalog.schemes());
    report.run.started_at = Some(started_at);
    report.run.ended_at = Some(Utc::now());

    write_json(&out_dir.join("match.json"), &report)?;
    fs::write(out_dir.join("match.md"), render_match_md(&report))?;

    print_match_summary(&report);
    info!("wrote match artifacts to {}", out_dir);
    Ok(())
}

fn print_match_summary(report: &MatchReport) {
    println!(
        "{} of {} schemes matched",
        report.summary.schemes_matched, report.summary.schemes_checked
    );
    for m in &report.matches {
        println!("  - {} ({})", m.name, m.scheme_id);
    }
}

fn cmd_match(args: MatchArgs) -> anyhow::Result<()> {
    let (catalog, out_dir) = resolve_catalog(&args.dir, args.schemes_dir, args.out_dir)?;
    let profile = read_profile(&args.profile)?;
    run_match(profile, &catalog, &out_dir)
}

fn cmd_scan(args: ScanArgs) -> anyhow::Result<()> {
    let (catalog, out_dir) = resolve_catalog(&args.dir, args.schemes_dir, args.out_dir)?;

    let text =
        fs::read_to_string(&args.text).with_context(|| format!("read text {}", args.text))?;
    let extracted = sahayak_extract::extract(&text);

    // Manual entry is the base; extracted attributes overlay it.
    let profile = match &args.profile {
        Some(path) => read_profile(path)?.merged_with(&extracted),
        None => extracted,
    };

    fs::create_dir_all(&out_dir).with_context(|| format!("create {}", out_dir))?;
    write_json(&out_dir.join("profile.json"), &profile)?;

    run_match(profile, &catalog, &out_dir)
}

fn cmd_extract(args: ExtractArgs) -> anyhow::Result<()> {
    let text =
        fs::read_to_string(&args.text).with_context(|| format!("read text {}", args.text))?;
    let profile = sahayak_extract::extract(&text);

    println!("{}", serde_json::to_string_pretty(&profile)?);

    if let Some(out_dir) = &args.out_dir {
        fs::create_dir_all(out_dir).with_context(|| format!("create {}", out_dir))?;
        write_json(&out_dir.join("profile.json"), &profile)?;
        fs::write(out_dir.join("profile.md"), render_profile_md(&profile))?;
        info!("wrote profile artifacts to {}", out_dir);
    }
    Ok(())
}

fn cmd_list_schemes(args: ListSchemesArgs) -> anyhow::Result<()> {
    let (catalog, _) = resolve_catalog(&args.dir, args.schemes_dir, None)?;

    match args.format {
        OutputFormat::Text => {
            println!("Available schemes:\n");
            println!("  {:<20} {:<20} NAME", "ID", "CATEGORY");
            println!("  {:<20} {:<20} ----", "--", "--------");
            for s in catalog.schemes() {
                println!("  {:<20} {:<20} {}", s.id, s.category, s.name);
            }
            println!();
            println!("Use 'sahayak explain <id>' for details.");
        }
        OutputFormat::Json => {
            let schemes: Vec<_> = catalog
                .schemes()
                .iter()
                .map(|s| {
                    serde_json::json!({
                        "id": s.id,
                        "name": s.name,
                        "category": s.category,
                        "rule_count": s.rules.len(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&schemes)?);
        }
    }
    Ok(())
}

fn cmd_explain(args: ExplainArgs) -> anyhow::Result<()> {
    let (catalog, _) = resolve_catalog(&args.dir, args.schemes_dir, None)?;

    let Some(scheme) = catalog.get(&args.scheme_id) else {
        let available: Vec<&str> = catalog.schemes().iter().map(|s| s.id.as_str()).collect();
        anyhow::bail!(
            "Unknown scheme id: '{}'\n\nAvailable schemes: {}",
            args.scheme_id,
            available.join(", ")
        );
    };

    explain::print_explanation(scheme);
    Ok(())
}

fn read_profile(path: &Utf8Path) -> anyhow::Result<Profile> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read profile {}", path))?;
    serde_json::from_str(&contents).with_context(|| format!("parse profile {}", path))
}

fn write_json<T: serde::Serialize>(path: &Utf8Path, v: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(v).context("serialize json")?;
    fs::write(path, s).with_context(|| format!("write {}", path))?;
    Ok(())
}

fn tool_info() -> ToolInfo {
    ToolInfo {
        name: "sahayak".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    }
}
