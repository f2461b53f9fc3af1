//! Ladder CLI - ladder command

use anyhow::Result;
use clap::{Parser, Subcommand};
use ladder_core::TimeUnit;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cmd;
mod system_config;
mod util;

/// Ladder - Edit tiered backup retention schedules
#[derive(Parser)]
#[command(name = "ladder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new draft from the default ladder
    Open {
        /// Environment label (default: draft.default_label from config)
        #[arg(short, long)]
        label: Option<String>,

        /// Replace an existing draft
        #[arg(long)]
        force: bool,
    },
    /// Show the draft with each row's allowed range
    Show,
    /// Change how often a row runs
    SetEvery {
        /// Row position (1-based) or id prefix
        row: String,
        /// Requested interval, clamped to the allowed range
        every: u32,
    },
    /// Change the unit of the last row
    SetUnit {
        /// Row position (1-based) or id prefix
        row: String,
        /// minutes, hours, days, weeks or months
        unit: TimeUnit,
    },
    /// Raise or lower how many backups a row keeps
    Repeat {
        /// Row position (1-based) or id prefix
        row: String,
        /// Change in retained backups, e.g. 2 or -1
        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },
    /// Append the suggested next row
    Add,
    /// Remove a row
    Remove {
        /// Row position (1-based) or id prefix
        row: String,
    },
    /// Change the environment label
    Label {
        /// Built-in or configured environment type
        label: String,
    },
    /// Restore the default ladder, keeping the label
    Reset,
    /// Check the draft against the ladder rules
    Validate,
    /// Preview the row 'ladder add' would append
    Suggest,
    /// Print the submission payload
    Export {
        /// Use the backend's interval/unit/retention row shape
        #[arg(long)]
        public: bool,
    },
    /// Submit the draft and remove it
    Submit {
        /// Directory to write the schedule to (default: config or .ladder/outbox)
        #[arg(long)]
        outbox: Option<PathBuf>,
    },
    /// Discard the draft without submitting
    Cancel,
    /// Manage system configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// List all configuration values
    List,
    /// Get a single value, e.g. draft.default_label
    Get {
        key: String,
    },
    /// Set a single value
    Set {
        key: String,
        value: String,
    },
    /// Show the config file path
    Path {
        /// Create the file with defaults if missing
        #[arg(long)]
        create: bool,
    },
    /// Print an annotated example config
    Example,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json = cli.json;

    match cli.command {
        Commands::Open { label, force } => cmd::open::run(label, force, json).await,
        Commands::Show => cmd::show::run(json).await,
        Commands::SetEvery { row, every } => cmd::edit::set_every(&row, every, json).await,
        Commands::SetUnit { row, unit } => cmd::edit::set_unit(&row, unit, json).await,
        Commands::Repeat { row, delta } => cmd::edit::repeat(&row, delta, json).await,
        Commands::Add => cmd::edit::add(json).await,
        Commands::Remove { row } => cmd::edit::remove(&row, json).await,
        Commands::Label { label } => cmd::edit::label(&label).await,
        Commands::Reset => cmd::edit::reset().await,
        Commands::Validate => cmd::validate::run(json).await,
        Commands::Suggest => cmd::suggest::run(json).await,
        Commands::Export { public } => cmd::export::run(public).await,
        Commands::Submit { outbox } => cmd::submit::run(outbox, json).await,
        Commands::Cancel => cmd::cancel::run().await,
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::List => cmd::config::run_list().await,
            ConfigCommands::Get { key } => cmd::config::run_get(&key).await,
            ConfigCommands::Set { key, value } => cmd::config::run_set(&key, &value).await,
            ConfigCommands::Path { create } => cmd::config::run_path(create).await,
            ConfigCommands::Example => cmd::config::run_example().await,
        },
    }
}
