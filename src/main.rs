use anyhow::Result;
use clap::{Parser, Subcommand};

use pocket_ledger::audit::AuditLogger;
use pocket_ledger::cli::{
    handle_entry_command, handle_export_command, handle_history_command, EntryCommands,
    ExportCommands,
};
use pocket_ledger::config::{LedgerPaths, Settings};
use pocket_ledger::logging::init_tracing;
use pocket_ledger::services::Ledger;
use pocket_ledger::storage::FileStore;

#[derive(Parser)]
#[command(
    name = "pocket",
    author = "Kaylee Beyene",
    version,
    about = "Local-first income and expense ledger",
    long_about = "pocket keeps a personal ledger of income and expenses on your \
                  machine. Record entries, filter them by category, month or \
                  search text, see your balance and export to CSV or a report."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Entry(EntryCommands),

    /// Export the ledger to a file
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show recent changes from the audit journal
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Create the data directory and default settings
    Init,

    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let audit = AuditLogger::new(paths.audit_log());

    match cli.command {
        Some(Commands::Entry(cmd)) => {
            let mut ledger = open_ledger(&paths, &settings, &audit)?;
            handle_entry_command(&mut ledger, &settings, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            let ledger = open_ledger(&paths, &settings, &audit)?;
            handle_export_command(&ledger, &settings, cmd)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&audit, limit)?;
        }
        Some(Commands::Init) => {
            println!("Initializing pocket-ledger at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'pocket add 500 Salary --kind income' to record your first entry.");
        }
        Some(Commands::Config) => {
            println!("pocket-ledger Configuration");
            println!("===========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Storage key:     {}", settings.storage_key);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
        None => {
            println!("pocket - local-first income and expense ledger");
            println!();
            println!("Run 'pocket --help' for usage information.");
        }
    }

    Ok(())
}

fn open_ledger(
    paths: &LedgerPaths,
    settings: &Settings,
    audit: &AuditLogger,
) -> pocket_ledger::LedgerResult<Ledger<FileStore>> {
    let ledger = Ledger::load(FileStore::new(paths.data_dir()), settings.storage_key.as_str())?;

    Ok(if settings.audit_enabled {
        ledger.with_audit(audit.clone())
    } else {
        ledger
    })
}
