use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use flightdeck::route::{NavigationHeader, Route};
use flightdeck::{derive_metrics, FlightState};

/// Print the gauges for a single flight state snapshot
#[derive(clap::Parser)]
pub struct Opts {
    /// JSON file holding one snapshot
    input: PathBuf,
    /// JSON file describing the route, enables the navigation header
    #[clap(long)]
    route: Option<PathBuf>,
    /// Print the gauges as JSON
    #[clap(long)]
    json: bool,
}

pub fn execute(opts: Opts) -> Result<(), flightdeck::Error> {
    let state: FlightState = serde_json::from_reader(BufReader::new(File::open(&opts.input)?))?;
    let route: Option<Route> = match opts.route.as_deref() {
        Some(path) => Some(serde_json::from_reader(BufReader::new(File::open(path)?))?),
        None => None,
    };

    let metrics = derive_metrics(&state);
    let header = route.map(|route| NavigationHeader::new(&route, &state));

    if opts.json {
        let out = serde_json::json!({
            "header": header,
            "metrics": metrics,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if let Some(header) = header {
        println!("{}", header);
    }
    for metric in metrics {
        println!("{}", metric);
    }

    Ok(())
}
