#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use clap::{Parser, Subcommand};
use command::{
    BankAction, BanksStrategy, CommandStrategy, DrawStrategy, ExportStrategy, ImportStrategy,
    InfoStrategy, IngestInput, IngestStrategy, InitStrategy, QuickStrategy, VersionStrategy,
};
use gerador_core::BankKey;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "gerador")]
#[command(about = "Gerador de Nome e CPF com múltiplos bancos", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize configuration
    Init,
    /// Show configuration and store summary
    Info,
    /// Show version
    Version,
    /// List banks with their record counts and profile names
    Banks,
    /// Append a new empty bank
    AddBank,
    /// Select the active bank
    Use {
        /// Bank key (B-n, P-n or n)
        key: BankKey,
    },
    /// Rename the profile of a bank; omit the name to restore the default
    Rename {
        key: BankKey,
        name: Option<String>,
    },
    /// Clear the records and draw history of one bank
    ResetBank {
        key: BankKey,
        #[arg(long)]
        senha: String,
    },
    /// Delete a bank and renumber the ones after it
    DeleteBank {
        key: BankKey,
        #[arg(long)]
        senha: String,
    },
    /// Discard every bank and start over with the default set
    ResetAll {
        #[arg(long)]
        senha: String,
    },
    /// Extract records from pasted text into a bank
    Ingest {
        /// Target bank (defaults to the active bank)
        #[arg(short, long)]
        bank: Option<BankKey>,
        /// Read text from this file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Draw a record not yet drawn from a bank
    Draw {
        /// Source bank (defaults to the active bank)
        #[arg(short, long)]
        bank: Option<BankKey>,
    },
    /// Pick the first name and CPF lines out of free text
    Quick {
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Write a backup of all banks
    Export {
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
    /// Replace all banks with the contents of a backup
    Import { file: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => InitStrategy.execute(()),
        Commands::Info => InfoStrategy.execute(()),
        Commands::Version => VersionStrategy.execute(()),
        Commands::Banks => BanksStrategy.execute(BankAction::List),
        Commands::AddBank => BanksStrategy.execute(BankAction::Add),
        Commands::Use { key } => BanksStrategy.execute(BankAction::Use(key)),
        Commands::Rename { key, name } => BanksStrategy.execute(BankAction::Rename { key, name }),
        Commands::ResetBank { key, senha } => {
            BanksStrategy.execute(BankAction::Reset { key, senha })
        }
        Commands::DeleteBank { key, senha } => {
            BanksStrategy.execute(BankAction::Delete { key, senha })
        }
        Commands::ResetAll { senha } => BanksStrategy.execute(BankAction::ResetAll { senha }),
        Commands::Ingest { bank, file } => IngestStrategy.execute(IngestInput { bank, file }),
        Commands::Draw { bank } => DrawStrategy.execute(bank),
        Commands::Quick { file } => QuickStrategy.execute(file),
        Commands::Export { dir } => ExportStrategy.execute(dir),
        Commands::Import { file } => ImportStrategy.execute(file),
    }
}
