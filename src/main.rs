use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use loglens::{Config, Level, LogViewer};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "loglens", about = "Inspect date-stamped application log files")]
struct Cli {
    /// Log directory (overrides the configured storage path).
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Write debug logs to /tmp/loglens-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List dates with a backing log file, most recent first.
    Dates,
    /// Per-date, per-level stats table.
    Stats {
        #[arg(long)]
        locale: Option<String>,
    },
    /// Print one day's entries as JSON.
    Show {
        date: NaiveDate,
        /// Restrict to one severity level.
        #[arg(long)]
        level: Option<Level>,
    },
    /// Combined level menu across all dates, as JSON.
    Menu,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/loglens-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("loglens debug log started — tail -f /tmp/loglens-debug.log");
    }

    let mut config = Config::load().unwrap_or_else(|_| Config::defaults());
    if let Some(dir) = cli.dir {
        config.storage.path = dir;
    }
    let locale = config.display.locale.clone();
    let translate = config.display.translate;
    let viewer = LogViewer::from_config(&config);

    match cli.command {
        Command::Dates => {
            for date in viewer.dates()? {
                println!("{date}");
            }
        }
        Command::Stats { locale: override_locale } => {
            let table = viewer.stats_table(override_locale.as_deref().unwrap_or(&locale))?;
            print_stats(&table);
        }
        Command::Show { date, level } => {
            let entries = viewer.entries(date, level)?;
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        Command::Menu => {
            let menu = viewer.global_menu(translate, &locale)?;
            println!("{}", serde_json::to_string_pretty(&menu)?);
        }
    }

    Ok(())
}

fn print_stats(table: &loglens::StatsTable) {
    let print_row = |label: &str, counts: &[usize], total: usize| {
        print!("{label:<12}");
        for count in counts {
            print!("{count:>8}");
        }
        println!("{total:>8}");
    };

    print!("{:<12}", table.header[0]);
    for label in &table.header[1..] {
        print!("{label:>8}");
    }
    println!();
    for row in &table.rows {
        let date = row.date.map(|d| d.to_string()).unwrap_or_default();
        print_row(&date, &row.counts, row.total);
    }
    print_row("total", &table.footer.counts, table.footer.total);
}
