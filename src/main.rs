mod commands;
mod render;
mod source;

use std::path::PathBuf;

use anyhow::Result;
use calboard_core::config::CalboardConfig;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "calboard")]
#[command(about = "Filter, browse and edit calendar events")]
struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Where events are read from.
#[derive(Args, Clone)]
pub struct SourceArgs {
    /// JSON file with events (defaults to `events_file` in config, then the sample events)
    #[arg(short, long)]
    file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List events matching a filter, sorted by start
    List {
        #[command(flatten)]
        source: SourceArgs,

        /// Case-insensitive substring of the title
        #[arg(short, long, default_value = "")]
        title: String,

        /// Case-insensitive substring of the description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Exact color, by name ("green") or hex ("#4caf50")
        #[arg(short, long)]
        color: Option<String>,

        /// Only events starting on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Only events ending on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Print the matching events as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show occurrences day by day, expanding recurring events
    Agenda {
        #[command(flatten)]
        source: SourceArgs,

        /// First day (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        from: Option<String>,

        /// Last day (YYYY-MM-DD, defaults to `agenda_days` after the first)
        #[arg(long)]
        to: Option<String>,
    },
    /// Check whether an event occurs on a day
    Occurs {
        #[command(flatten)]
        source: SourceArgs,

        /// Event id
        id: String,

        /// Day to check (YYYY-MM-DD)
        date: String,
    },
    /// Count events starting today or later
    Upcoming {
        #[command(flatten)]
        source: SourceArgs,

        /// Treat this date as today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
    },
    /// Add an event and print the resulting collection as JSON
    Add {
        #[command(flatten)]
        source: SourceArgs,

        /// Event title
        title: String,

        /// Start (e.g. "2025-05-20T10:00")
        #[arg(short, long)]
        start: String,

        /// End (defaults to one hour after start)
        #[arg(short, long)]
        end: Option<String>,

        #[arg(short, long, default_value = "")]
        description: String,

        /// Color by name or hex (defaults to `default_color` in config)
        #[arg(short, long)]
        color: Option<String>,

        /// Recurrence: daily, weekly, monthly or custom
        #[arg(long)]
        repeat: Option<String>,

        /// Weekdays for weekly recurrence (e.g. "mon,wed")
        #[arg(long, value_delimiter = ',')]
        days: Vec<String>,

        /// Week interval for custom recurrence
        #[arg(long, default_value_t = 1)]
        interval: u32,

        /// Last possible occurrence (defaults to one month after start)
        #[arg(long)]
        until: Option<String>,
    },
    /// Move or resize an event and print the resulting collection as JSON
    Move {
        #[command(flatten)]
        source: SourceArgs,

        /// Event id
        id: String,

        #[arg(short, long)]
        start: String,

        #[arg(short, long)]
        end: String,
    },
    /// Remove an event and print the resulting collection as JSON
    Remove {
        #[command(flatten)]
        source: SourceArgs,

        /// Event id
        id: String,
    },
    /// Show the config path, creating a default config if none exists
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config = CalboardConfig::load()?;

    match cli.command {
        Commands::List {
            source,
            title,
            description,
            color,
            from,
            to,
            json,
        } => {
            let store = source::load(&source, &config)?;
            let args = commands::list::ListArgs {
                title,
                description,
                color,
                from,
                to,
                json,
            };
            commands::list::run(&store, args)
        }
        Commands::Agenda { source, from, to } => {
            let store = source::load(&source, &config)?;
            commands::agenda::run(&store, from.as_deref(), to.as_deref(), config.agenda_days)
        }
        Commands::Occurs { source, id, date } => {
            let store = source::load(&source, &config)?;
            commands::occurs::run(&store, &id, &date)
        }
        Commands::Upcoming { source, today } => {
            let store = source::load(&source, &config)?;
            commands::upcoming::run(&store, today.as_deref())
        }
        Commands::Add {
            source,
            title,
            start,
            end,
            description,
            color,
            repeat,
            days,
            interval,
            until,
        } => {
            let mut store = source::load(&source, &config)?;
            let args = commands::edit::AddArgs {
                title,
                start,
                end,
                description,
                color,
                repeat,
                days,
                interval,
                until,
            };
            commands::edit::add(&mut store, args, config.default_color)
        }
        Commands::Move {
            source,
            id,
            start,
            end,
        } => {
            let mut store = source::load(&source, &config)?;
            commands::edit::reschedule(&mut store, &id, &start, &end)
        }
        Commands::Remove { source, id } => {
            let mut store = source::load(&source, &config)?;
            commands::edit::remove(&mut store, &id)
        }
        Commands::Config => commands::config::run(&config),
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("calboard_core={default_level}").parse()?)
                .add_directive(format!("calboard={default_level}").parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
