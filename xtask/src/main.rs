use anyhow::Context;
use clap::{Parser, Subcommand};
use sahayak_catalog::builtin_schemes;
use std::process::Command as ProcessCommand;

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Workspace helper tasks")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print schema identifiers used by sahayak.
    PrintSchemas,
    /// Dump the built-in scheme catalog as JSON.
    DumpCatalog,
    /// Bless golden fixtures (overwrite expected outputs).
    BlessFixtures,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::PrintSchemas => {
            println!("{}", sahayak_types::schema::SAHAYAK_MATCH_V1);
            println!("{}", sahayak_types::schema::SAHAYAK_PROFILE_V1);
        }
        Command::DumpCatalog => {
            let schemes = builtin_schemes();
            println!("{}", serde_json::to_string_pretty(&schemes)?);
        }
        Command::BlessFixtures => {
            let status = ProcessCommand::new("cargo")
                .args(["test", "-p", "sahayak-engine", "--test", "golden_fixtures"])
                .env("SAHAYAK_BLESS", "1")
                .status()
                .context("run golden fixture blessing")?;
            if !status.success() {
                anyhow::bail!("bless-fixtures failed");
            }
        }
    }
    Ok(())
}
