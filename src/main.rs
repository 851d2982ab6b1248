mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use goca_core::MeetingLocation;
use goca_core::config::GocaConfig;

#[derive(Parser)]
#[command(name = "goca")]
#[command(about = "Browse a host's booking page and book meetings")]
struct Cli {
    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a host's event types and weekly availability
    Host {
        /// Host username (defaults to default_host from config)
        username: Option<String>,
    },
    /// List bookable time slots for an event type
    Slots {
        /// Event type id
        event: i64,

        /// Host username (defaults to default_host from config)
        #[arg(long)]
        host: Option<String>,

        /// Date to book on (YYYY-MM-DD or e.g. "next friday")
        #[arg(short, long)]
        date: Option<String>,

        /// Also show slots that have already started
        #[arg(long)]
        all: bool,
    },
    /// Book a time slot
    Book {
        /// Event type id
        event: i64,

        /// Host username (defaults to default_host from config)
        #[arg(long)]
        host: Option<String>,

        /// Date to book on (YYYY-MM-DD or e.g. "next friday")
        #[arg(short, long)]
        date: String,

        /// Start time (HH:MM, 24-hour)
        #[arg(short, long)]
        time: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        /// Meeting location: google or microsoft
        #[arg(long)]
        location: Option<MeetingLocation>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show a booking that was made
    Schedule {
        /// Booking id
        id: String,
    },
    /// Show the config file location and current values
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::logger::init(cli.verbose);

    let config = GocaConfig::load()?;

    match cli.command {
        Commands::Host { username } => {
            let username = resolve_host(username, &config)?;
            commands::host::run(&config, &username).await
        }
        Commands::Slots {
            event,
            host,
            date,
            all,
        } => {
            let username = resolve_host(host, &config)?;
            commands::slots::run(&config, &username, event, date.as_deref(), all).await
        }
        Commands::Book {
            event,
            host,
            date,
            time,
            name,
            email,
            notes,
            location,
            yes,
        } => {
            let username = resolve_host(host, &config)?;
            let args = commands::book::BookArgs {
                event,
                date,
                time,
                name,
                email,
                notes,
                location,
                yes,
            };
            commands::book::run(&config, &username, args).await
        }
        Commands::Schedule { id } => commands::schedule::run(&config, &id).await,
        Commands::Config => commands::config::run(&config),
    }
}

fn resolve_host(username: Option<String>, config: &GocaConfig) -> Result<String> {
    match username.or_else(|| config.default_host.clone()) {
        Some(username) => Ok(username),
        None => anyhow::bail!(
            "No host given.\n\n\
            Pass one explicitly:\n  \
            goca host <username>\n\n\
            Or set default_host in:\n  \
            {}",
            GocaConfig::config_path()?.display()
        ),
    }
}
