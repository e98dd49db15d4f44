use anyhow::Result;
use clap::{Parser, Subcommand};

use pocketbook::cli::{
    handle_budget_command, handle_category_command, handle_dashboard_command,
    handle_export_command, handle_goal_command, handle_transaction_command, handle_user_command,
    handle_wealth_command,
};
use pocketbook::config::{paths::PocketbookPaths, settings::Settings};
use pocketbook::store::Store;

#[derive(Parser)]
#[command(
    name = "pocketbook",
    version,
    about = "Personal finance tracker with carry-over monthly budgeting",
    long_about = "Pocketbook tracks expenses and income, date-ranged budgets, \
                  savings goals, and wealth figures. Unspent budget rolls \
                  forward from one month into the next, so the dashboard shows \
                  what is really left to spend."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard for a month
    Dashboard {
        /// Month (e.g., "2024-03", "current", "last")
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(pocketbook::cli::TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(pocketbook::cli::BudgetCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(pocketbook::cli::CategoryCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(pocketbook::cli::GoalCommands),

    /// Wealth figure commands
    #[command(subcommand)]
    Wealth(pocketbook::cli::WealthCommands),

    /// User and session commands
    #[command(subcommand)]
    User(pocketbook::cli::UserCommands),

    /// Data export commands
    #[command(subcommand)]
    Export(pocketbook::cli::ExportCommands),

    /// Initialize storage with default categories
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = PocketbookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let store = Store::new(paths.clone())?;
    store.load_all()?;

    match cli.command {
        Some(Commands::Dashboard { month }) => {
            handle_dashboard_command(&store, &settings, month)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&store, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&store, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&store, cmd)?;
        }
        Some(Commands::Goal(cmd)) => {
            handle_goal_command(&store, &settings, cmd)?;
        }
        Some(Commands::Wealth(cmd)) => {
            handle_wealth_command(&store, &settings, cmd)?;
        }
        Some(Commands::User(cmd)) => {
            handle_user_command(&store, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&store, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Pocketbook at: {}", paths.data_dir().display());
            pocketbook::store::initialize_store(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Default categories have been created, including 'Income'.");
            println!("Run 'pocketbook category list' to see them.");
        }
        Some(Commands::Config) => {
            println!("Pocketbook Configuration");
            println!("========================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Budget scope:    {:?}", settings.budget_scope);
            println!("  Recent limit:    {}", settings.recent_limit);
        }
        None => {
            println!("Pocketbook - personal finance tracking");
            println!();
            println!("Run 'pocketbook --help' for usage information.");
            println!("Run 'pocketbook dashboard' to see the current month.");
        }
    }

    Ok(())
}
