use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

use flightdeck::gpx::{self, DirSink};
use flightdeck::FlightState;

/// Export a recorded flight history as GPX track
#[derive(clap::Parser)]
pub struct Opts {
    /// JSON file holding an array of snapshots, oldest first
    input: PathBuf,
    /// Used for the track and file name
    #[clap(long)]
    flight_number: Option<String>,
    #[clap(short = 'o', long, default_value = ".", env = "FLIGHTDECK_OUT_DIR")]
    out_dir: PathBuf,
}

pub fn execute(opts: Opts) -> Result<(), flightdeck::Error> {
    let start = Instant::now();

    let history: Vec<FlightState> =
        serde_json::from_reader(BufReader::new(File::open(&opts.input)?))?;
    let mut sink = DirSink::new(opts.out_dir);

    match gpx::export(&history, opts.flight_number.as_deref(), &mut sink)? {
        Some(filename) => println!("{}", sink.dir().join(filename).display()),
        None => tracing::info!("flight history is empty, nothing exported"),
    }

    tracing::debug!(took = %format!("{:.4}s", start.elapsed().as_secs_f64()), "export done");

    Ok(())
}
