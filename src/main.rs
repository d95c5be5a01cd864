mod commands;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{filter, fmt};

/// Render flight telemetry as dashboard gauges and export flown tracks as GPX.
#[derive(clap::Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
struct Opts {
    /// A level of verbosity, and can be used multiple times
    #[clap(short, long, parse(from_occurrences))]
    verbose: i32,
    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Parser)]
enum Command {
    Show(commands::show::Opts),
    Export(commands::export::Opts),
    Replay(commands::replay::Opts),
}

fn main() {
    dotenv::dotenv().ok();

    let opts: Opts = Opts::parse();
    let max_level = match opts.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::registry()
        .with(filter::filter_fn(move |m| {
            m.target().starts_with("flightdeck") && m.level() <= &max_level
        }))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match opts.command {
        Command::Show(opts) => commands::show::execute(opts),
        Command::Export(opts) => commands::export::execute(opts),
        Command::Replay(opts) => commands::replay::execute(opts),
    };

    if let Err(err) = result {
        tracing::error!(?err, "{}", err);
        std::process::exit(1);
    }
}
