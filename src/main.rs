use anyhow::Result;
use clap::{Parser, Subcommand};

use kakeibo::cli::{
    AddArgs, CalendarArgs, ClearArgs, DayArgs, DeleteArgs, ExportArgs, ListArgs, StatsArgs,
};
use kakeibo::config::{paths::KakeiboPaths, settings::Settings};
use kakeibo::storage::Storage;

#[derive(Parser)]
#[command(
    name = "kakeibo",
    version,
    about = "Terminal-based daily expense diary",
    long_about = "kakeibo is a terminal-based daily expense diary. Log cash and \
                  card expenses as they happen, browse them by day or on a month \
                  calendar, and review spending stats over daily, weekly, monthly, \
                  and yearly windows."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a new expense
    Add(AddArgs),

    /// Show one day of the diary
    Day(DayArgs),

    /// List expenses
    #[command(alias = "ls")]
    List(ListArgs),

    /// Delete an expense
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Delete all expenses
    Clear(ClearArgs),

    /// Show spending statistics
    Stats(StatsArgs),

    /// Show a month calendar with daily totals
    #[command(alias = "cal")]
    Calendar(CalendarArgs),

    /// Export expenses (csv, json, or yaml)
    Export(ExportArgs),

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = KakeiboPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    let load_report = storage.load_all()?;
    for skip in &load_report.skipped {
        eprintln!("Warning: {}", skip);
    }

    match cli.command {
        Some(Commands::Add(args)) => {
            kakeibo::cli::handle_add(&storage, &settings, args)?;
        }
        Some(Commands::Day(args)) => {
            kakeibo::cli::handle_day(&storage, &settings, args)?;
        }
        Some(Commands::List(args)) => {
            kakeibo::cli::handle_list(&storage, &settings, args)?;
        }
        Some(Commands::Delete(args)) => {
            kakeibo::cli::handle_delete(&storage, &settings, args)?;
        }
        Some(Commands::Clear(args)) => {
            kakeibo::cli::handle_clear(&storage, args)?;
        }
        Some(Commands::Stats(args)) => {
            kakeibo::cli::handle_stats(&storage, &settings, args)?;
        }
        Some(Commands::Calendar(args)) => {
            kakeibo::cli::handle_calendar(&storage, &settings, args)?;
        }
        Some(Commands::Export(args)) => {
            kakeibo::cli::handle_export(&storage, args)?;
        }
        Some(Commands::Init) => {
            println!("Initializing kakeibo at: {}", paths.data_dir().display());
            settings.save(&paths)?;
            storage.save_all()?;
            println!("Initialization complete!");
            println!();
            println!("Log your first expense with 'kakeibo add 120 \"Coffee\"'.");
        }
        Some(Commands::Config) => {
            println!("kakeibo Configuration");
            println!("=====================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Default view:    {}", settings.default_view);
        }
        None => {
            println!("kakeibo - Terminal-based daily expense diary");
            println!();
            println!("Run 'kakeibo --help' for usage information.");
            println!("Run 'kakeibo add 120 \"Coffee\"' to log an expense.");
        }
    }

    Ok(())
}
