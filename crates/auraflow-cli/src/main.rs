use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

use auraflow_core::storage::LoggingConfig;
use auraflow_core::Config;

mod commands;

#[derive(Parser)]
#[command(name = "auraflow", version, about = "Energy-aware day planner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the 24-hour energy curve for a readiness score
    Curve(commands::curve::CurveArgs),
    /// Color and tier for an energy value
    Color(commands::color::ColorArgs),
    /// Energy change for an activity
    Delta(commands::delta::DeltaArgs),
    /// Lay out the day's events with per-event metrics
    Timeline(commands::timeline::TimelineArgs),
    /// Show (and optionally apply) the current coaching insight
    Coach(commands::coach::CoachArgs),
    /// End-of-day summary
    Wrapup(commands::wrapup::WrapupArgs),
    /// Classify a manual energy sample
    Log(commands::log::LogArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() {
    let cli = Cli::parse();

    // read-only; a broken config file is reported by the command that needs it
    let logging = Config::load_existing()
        .ok()
        .flatten()
        .map(|config| config.logging)
        .unwrap_or_default();
    init_logging(&logging);

    let result = match cli.command {
        Commands::Curve(args) => commands::curve::run(args),
        Commands::Color(args) => commands::color::run(args),
        Commands::Delta(args) => commands::delta::run(args),
        Commands::Timeline(args) => commands::timeline::run(args),
        Commands::Coach(args) => commands::coach::run(args),
        Commands::Wrapup(args) => commands::wrapup::run(args),
        Commands::Log(args) => commands::log::run(args),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "auraflow", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
