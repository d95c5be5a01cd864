use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use flightdeck::feed::replay;
use flightdeck::gpx::{self, DirSink};
use flightdeck::FlightHistory;

/// Replay a recorded telemetry feed (one JSON message per line)
#[derive(clap::Parser)]
pub struct Opts {
    input: PathBuf,
    /// Used for the track and file name of the export
    #[clap(long)]
    flight_number: Option<String>,
    #[clap(short = 'o', long, default_value = ".", env = "FLIGHTDECK_OUT_DIR")]
    out_dir: PathBuf,
    /// Export the history that is left once the feed ends
    #[clap(long)]
    export: bool,
}

pub fn execute(opts: Opts) -> Result<(), flightdeck::Error> {
    let input = BufReader::new(File::open(&opts.input)?);
    let mut history = FlightHistory::new();

    let stats = replay(input, &mut history, |metrics| {
        for metric in metrics {
            println!("{}", metric);
        }
        println!();
    })?;
    tracing::debug!(?stats, input = %opts.input.display(), "replay done");

    if opts.export {
        let mut sink = DirSink::new(opts.out_dir);
        if let Some(filename) =
            gpx::export(history.points(), opts.flight_number.as_deref(), &mut sink)?
        {
            println!("{}", sink.dir().join(filename).display());
        }
    }

    Ok(())
}
