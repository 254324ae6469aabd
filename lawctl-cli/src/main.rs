//! lawctl CLI - administrative tool for the law/party database
//!
//! This is the entry point for the lawctl command-line tool, which provides:
//! - Connectivity checking (`connect-db`)
//! - Schema creation and destructive reset (`init-db`, `reset-db`)
//! - Schema inspection without touching the database (`list-models`, `show-sql`)

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "lawctl",
    author,
    version,
    about = "Administrative CLI for the legislative bill / party database",
    long_about = "Manage the law, category and party schema: check connectivity, \
                  create or reset tables, and inspect the table definitions and \
                  the DDL they generate."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check database connectivity and print the server version
    ConnectDb,
    /// Create all missing tables (existing tables are kept untouched)
    InitDb,
    /// Drop every known table, then recreate the schema empty
    ResetDb(ResetDbArgs),
    /// Print each table with its column names and physical types
    ListModels,
    /// Preview the CREATE TABLE statements without executing anything
    ShowSql,
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct ResetDbArgs {
    /// Skip the interactive confirmation prompt
    #[arg(long)]
    yes: bool,
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::ConnectDb => commands::run_connect_db().await?,
        Commands::InitDb => commands::run_init_db().await?,
        Commands::ResetDb(args) => commands::run_reset_db(args.yes).await?,
        Commands::ListModels => commands::run_list_models(),
        Commands::ShowSql => commands::run_show_sql(),
        Commands::Completions(args) => run_completions(args)?,
    }
    Ok(())
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
