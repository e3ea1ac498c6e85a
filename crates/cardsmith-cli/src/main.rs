mod commands;
mod logging;
mod workspace;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;

use cardsmith_check::CheckError;
use cardsmith_generate::GenerationError;
use workspace::WorkspaceError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("workspace error: {0}")]
    Workspace(#[from] WorkspaceError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("check error: {0}")]
    Check(#[from] CheckError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "cardsmith",
    version,
    about = "Synthetic card numbers, identities and simulated checks for test data"
)]
struct Cli {
    /// Settings file.
    #[arg(long, global = true, default_value = "cardsmith.toml")]
    config: PathBuf,
    /// Append JSON log lines to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    /// Log progress events on stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Expand a card pattern into checksum-valid lines.
    Generate(GenerateArgs),
    /// Run pipe-delimited lines through the outcome simulator.
    Check(CheckArgs),
    /// Generate synthetic identities.
    Identity(IdentityArgs),
    /// Report checksum validity and network for card numbers.
    Validate(ValidateArgs),
    /// Write a settings file with the default values.
    InitConfig(InitConfigArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Masked pattern; `x` marks a random digit.
    #[arg(long)]
    pub pattern: Option<String>,
    /// Card length including the check digit.
    #[arg(long)]
    pub length: Option<usize>,
    /// Expiry month (`01`..`12`) or `random`.
    #[arg(long, default_value = "random")]
    pub month: String,
    /// Expiry year (`YYYY`) or `random`.
    #[arg(long, default_value = "random")]
    pub year: String,
    /// Security code; empty or `random` draws one per card.
    #[arg(long, default_value = "")]
    pub cvv: String,
    #[arg(short, long)]
    pub quantity: Option<u32>,
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = CardFormat::Pipe)]
    pub format: CardFormat,
    /// Write the export here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Input file with one `NUMBER|MM|YYYY|CVV` per line; `-` or absent reads stdin.
    #[arg(long)]
    pub input: Option<PathBuf>,
    #[arg(long)]
    pub seed: Option<u64>,
    /// Override the configured per-line delay.
    #[arg(long)]
    pub delay_ms: Option<u64>,
    /// Write the JSON report here.
    #[arg(long)]
    pub report: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct IdentityArgs {
    /// Country code (US, UK, ID, DE, BR, FR, JP, AU); others fall back to US.
    #[arg(long)]
    pub country: Option<String>,
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: u32,
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = IdentityFormat::Text)]
    pub format: IdentityFormat,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[arg(required = true)]
    pub numbers: Vec<String>,
}

#[derive(Args, Debug)]
pub struct InitConfigArgs {
    /// Overwrite an existing file.
    #[arg(long, default_value_t = false)]
    pub force: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CardFormat {
    Pipe,
    Csv,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum IdentityFormat {
    Text,
    Json,
    Csv,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_file.as_deref(), cli.verbose)?;

    match cli.command {
        Command::Generate(args) => commands::run_generate(&cli.config, args),
        Command::Check(args) => commands::run_check(&cli.config, args).await,
        Command::Identity(args) => commands::run_identity(&cli.config, args),
        Command::Validate(args) => commands::run_validate(args),
        Command::InitConfig(args) => commands::run_init_config(&cli.config, args),
    }
}
