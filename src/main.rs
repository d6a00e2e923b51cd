use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use streamseed::catalog::TrackCatalog;
use streamseed::config::Config;
use streamseed::names::FakerNames;
use streamseed::publisher::EventPublisher;
use streamseed::sinks::JsonlSink;
use streamseed::table::CsvTable;

#[derive(Debug, Parser)]
#[command(name = "streamseed")]
#[command(about = "Synthetic listen-event feed seeder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Run {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        count: Option<u64>,
        #[arg(long)]
        interval_ms: Option<u64>,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Run {
            config,
            count,
            interval_ms,
            output,
            dry_run,
        } => {
            let mut loaded = Config::from_path(&config)?;

            if let Some(count) = count {
                loaded.run.count = count;
            }
            if let Some(interval_ms) = interval_ms {
                loaded.run.interval_ms = interval_ms;
            }
            if let Some(dir) = output {
                loaded.sink.dir = dir.to_string_lossy().to_string();
            }

            if dry_run {
                println!("config loaded: {loaded:#?}");
                return Ok(());
            }

            let text = fs::read_to_string(&loaded.catalog.path)?;
            let table = CsvTable::parse(&text)?;
            let catalog = TrackCatalog::from_table(&table, &loaded.catalog.column)?;

            let mut sink = JsonlSink::new(&loaded.sink.dir, loaded.sink.shards.unwrap_or(4))?;
            let mut publisher = EventPublisher::new(catalog, Box::new(FakerNames), loaded.seed);
            let interval = Duration::from_millis(loaded.run.interval_ms);
            let summary = publisher.run(loaded.run.count, interval, &mut sink)?;
            sink.flush()?;

            for outcome in &summary.outcomes {
                if let Err(err) = &outcome.result {
                    eprintln!("record {} failed: {err}", outcome.sequence);
                }
            }
            println!(
                "published {}/{} events to {}",
                summary.succeeded(),
                summary.attempted(),
                loaded.sink.dir
            );
        }
    }

    Ok(())
}
