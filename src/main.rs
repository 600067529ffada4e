mod display;
mod error;
mod export;
mod parser;
mod request;
mod schedule;
mod web;

use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use display::{print_timetable, write_timetable_to_file};
use export::export_timetable_to_csv;
use parser::load_request;
use schedule::generate_timetable;

/// Smart study planner: spreads unlearned chapters over the days before the nearest exam
#[derive(Debug, Parser)]
#[command(name = "study-planner", version, long_about = None)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server exposing POST /generate-timetable
    Serve {
        #[arg(long, env = "PLANNER_HOST", default_value = "127.0.0.1")]
        host: String,

        #[arg(short, long, env = "PLANNER_PORT", default_value_t = 8000)]
        port: u16,

        /// Number of worker threads (defaults to the number of CPUs)
        #[arg(long, env = "PLANNER_WORKERS")]
        workers: Option<usize>,

        /// Plan as if today were this date (YYYY-MM-DD) instead of reading the clock
        #[arg(long, env = "PLANNER_TODAY")]
        today: Option<NaiveDate>,
    },
    /// Generate a timetable from a request JSON file and print it
    Plan {
        /// Request file with the same shape as the HTTP request body
        file: PathBuf,

        /// Plan as if today were this date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Also write the timetable as text to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also export the timetable as CSV to this file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    match cli.command {
        Command::Serve { host, port, workers, today } => {
            info!(%host, port, ?workers, ?today, "Starting study planner server");
            web::start_server(
                web::ServerConfig { host, port, workers },
                web::AppState { fixed_today: today },
            )
            .await
            .context("HTTP server failed")?;
        }
        Command::Plan { file, today, output, csv } => {
            let request = load_request(&file)
                .with_context(|| format!("failed to load request from {}", file.display()))?;
            let today = today.unwrap_or_else(|| Local::now().date_naive());

            info!(subjects = request.subjects.len(), %today, "Generating timetable");
            let timetable = generate_timetable(today, &request.subjects, request.study_hours_per_day);
            print_timetable(&timetable);

            if let Some(path) = output {
                write_timetable_to_file(&timetable, &path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("\nTimetable saved to {}", path.display());
            }
            if let Some(path) = csv {
                export_timetable_to_csv(&timetable, &path)
                    .with_context(|| format!("failed to export {}", path.display()))?;
                println!("Timetable exported to {}", path.display());
            }
        }
    }

    Ok(())
}
