use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "studyroom-cli", version, about = "Studyroom CLI")]
struct Cli {
    /// Pretend the current time is this RFC 3339 timestamp or YYYY-MM-DD day
    #[arg(long, global = true)]
    now: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Theme management
    Theme {
        #[command(subcommand)]
        action: commands::theme::ThemeAction,
    },
    /// Subtheme management
    Subtheme {
        #[command(subcommand)]
        action: commands::subtheme::SubthemeAction,
    },
    /// Introduce today's subtheme, if any
    Daily,
    /// Review scheduling
    Review {
        #[command(subcommand)]
        action: commands::review::ReviewAction,
    },
    /// Progress of every subtheme
    Status,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("STUDYROOM_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = commands::clock_from(cli.now.as_deref()).and_then(|clock| match cli.command {
        Commands::Theme { action } => commands::theme::run(action),
        Commands::Subtheme { action } => commands::subtheme::run(action),
        Commands::Daily => commands::daily::run(&*clock),
        Commands::Review { action } => commands::review::run(action, &*clock),
        Commands::Status => commands::status::run(),
        Commands::Config { action } => commands::config::run(action),
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
