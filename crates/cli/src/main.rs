//! CLI for the radrisk mission radiation dose estimator.
//!
//! Pipeline: fetch proton flux (or fall back) -> estimate dose/risk -> report.

mod interactive;

use clap::{Args, Parser, Subcommand, ValueEnum};
use radrisk_core::error::RadriskResult;
use radrisk_core::{MissionDuration, ShieldingMaterial};
use radrisk_estimator::sink::json_stream::JsonStreamSink;
use radrisk_estimator::Report;
use radrisk_provider::{FeedConfig, FluxProvider, NoaaFeed, StaticFlux, DEFAULT_FEED_URL};
use std::io::Write;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "radrisk",
    version,
    about = "Cosmic radiation dose and cancer-risk estimator for crewed missions"
)]
struct Cli {
    #[command(flatten)]
    feed: FeedArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct FeedArgs {
    /// JSON time series whose last record's `flux` is used.
    #[arg(long, global = true, env = "RADRISK_FEED_URL", default_value = DEFAULT_FEED_URL)]
    feed_url: String,

    /// Give up on the feed after this many seconds and use the fallback flux.
    #[arg(
        long,
        global = true,
        env = "RADRISK_TIMEOUT_SECS",
        default_value_t = 5,
        value_parser = clap::value_parser!(u64).range(1..=120)
    )]
    timeout_secs: u64,

    /// Skip the network entirely; always use the fallback flux.
    #[arg(long, global = true, env = "RADRISK_OFFLINE", default_value_t = false)]
    offline: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate mission dose and cancer risk once.
    Estimate {
        /// Mission duration in days.
        #[arg(
            short,
            long,
            default_value_t = MissionDuration::DEFAULT.days(),
            value_parser = clap::value_parser!(u16).range(1..=1000)
        )]
        days: u16,

        /// Shielding material: none, aluminum or polyethylene.
        #[arg(short, long, default_value = "none", value_parser = parse_material)]
        shielding: ShieldingMaterial,

        /// Print the result row as pretty JSON instead of the report.
        #[arg(long, default_value_t = false, conflicts_with = "sink")]
        json: bool,

        /// Stream the result row to stdout; the report goes to stderr.
        #[arg(long, value_enum)]
        sink: Option<SinkKind>,
    },

    /// Re-estimate on every line of input: `<days> [material]`.
    Interactive,

    /// Print background on cosmic radiation and its risks.
    Primer,
}

/// Machine-readable output formats for `--sink`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum SinkKind {
    /// One JSON object per line.
    Ndjson,
}

fn parse_material(s: &str) -> Result<ShieldingMaterial, String> {
    ShieldingMaterial::from_name(s).map_err(|e| e.to_string())
}

fn build_provider(args: &FeedArgs) -> RadriskResult<Box<dyn FluxProvider>> {
    if args.offline {
        tracing::info!("offline mode: live feed disabled");
        return Ok(Box::new(StaticFlux::offline()));
    }

    let feed = NoaaFeed::new(FeedConfig {
        url: args.feed_url.clone(),
        timeout: Duration::from_secs(args.timeout_secs),
    })?;
    Ok(Box::new(feed))
}

fn write_sink<W: Write>(kind: SinkKind, report: &Report, out: W) -> std::io::Result<usize> {
    match kind {
        SinkKind::Ndjson => {
            let mut s = JsonStreamSink::new(out);
            s.write_row(&report.to_row())?;
            let n = s.finish()?;
            tracing::info!(rows = n, "ndjson sink: rows written");
            Ok(n)
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Estimate {
            days,
            shielding,
            json,
            sink,
        } => {
            let days = MissionDuration::new(days)?;
            let provider = build_provider(&cli.feed)?;

            let report = radrisk_estimator::run_cycle(provider.as_ref(), days, shielding).await;

            if let Some(kind) = sink {
                write_sink(kind, &report, std::io::stdout())?;
                // Still print report to stderr so it's visible.
                eprint!("{}", report.render());
            } else if json {
                println!("{}", serde_json::to_string_pretty(&report.to_row())?);
            } else {
                print!("{}", report.render());
            }
        }
        Commands::Interactive => {
            let provider = build_provider(&cli.feed)?;
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            interactive::run(provider.as_ref(), stdin, std::io::stdout()).await?;
        }
        Commands::Primer => {
            print!("{}", radrisk_estimator::primer::render());
        }
    }

    Ok(())
}
