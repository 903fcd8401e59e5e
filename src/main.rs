use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_expense_command, handle_export_command, handle_history_command, handle_user_command,
    ExpenseCommands, ExportArgs, UserCommands,
};
use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
use expense_tracker::error::ExpenseResult;
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "A personal expense tracker for the terminal. Record expenses per \
                  user, see them grouped by month with a running total, and edit or \
                  delete them from the interactive interface or the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// User management commands
    #[command(subcommand)]
    User(UserCommands),

    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Export one user's expenses
    Export(ExportArgs),

    /// Show recent changes from the audit log
    History {
        /// Only show entries for this user
        #[arg(short, long)]
        user: Option<String>,
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths)?;
    storage.load_all()?;

    let result = match cli.command {
        None | Some(Commands::Tui) => {
            expense_tracker::tui::run_tui(&storage, &settings)?;
            Ok(())
        }
        Some(Commands::Config) => {
            show_config(storage.paths(), &settings);
            Ok(())
        }
        Some(command) => run_command(&storage, &settings, command),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e.user_message());
        std::process::exit(1);
    }

    Ok(())
}

fn run_command(storage: &Storage, settings: &Settings, command: Commands) -> ExpenseResult<()> {
    match command {
        Commands::User(cmd) => handle_user_command(storage, settings, cmd),
        Commands::Expense(cmd) => handle_expense_command(storage, settings, cmd),
        Commands::Export(args) => handle_export_command(storage, args),
        Commands::History { user, limit } => {
            handle_history_command(storage, user.as_deref(), limit)
        }
        Commands::Tui | Commands::Config => Ok(()),
    }
}

fn show_config(paths: &ExpensePaths, settings: &Settings) {
    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Data directory:   {}", paths.data_dir().display());
    println!("Expense data:     {}", paths.local_storage_file().display());
    println!("Audit log:        {}", paths.audit_log().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!();
    println!("Settings:");
    println!("  Default currency: {}", settings.default_currency);
    println!("  Total label:      {}", settings.total_label);
    println!("  Categories:       {}", settings.categories.join(", "));
    println!("  Confirm delete:   {}", settings.confirm_delete);
}
