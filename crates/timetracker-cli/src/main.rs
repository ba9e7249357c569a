use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "timetracker-cli", version, about = "TimeTracker CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the day view
    Day(commands::view::ViewOpts),
    /// Render the week view
    Week(commands::view::ViewOpts),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Day(opts) => commands::view::run_day(opts),
        Commands::Week(opts) => commands::view::run_week(opts),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
