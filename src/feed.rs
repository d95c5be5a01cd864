use std::io::BufRead;

use serde::Deserialize;

use crate::history::FlightHistory;
use crate::metrics::{derive_metrics, DerivedMetric};
use crate::state::FlightState;

/// One line of a newline-delimited JSON telemetry feed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeedMessage {
    Snapshot(FlightState),
    Reset,
}

/// Read feed messages line by line. Blank lines are ignored and lines that fail to parse
/// (including lines that are not UTF-8) are logged and skipped, so one bad reading does not
/// end the feed. Only errors of the underlying reader are returned.
pub fn read_feed(input: impl BufRead) -> impl Iterator<Item = Result<FeedMessage, crate::Error>> {
    input
        .split(b'\n')
        .enumerate()
        .filter_map(|(i, line)| -> Option<Result<FeedMessage, crate::Error>> {
            let line = match line {
                Ok(line) => line,
                Err(err) => return Some(Err(err.into())),
            };
            if line.iter().all(u8::is_ascii_whitespace) {
                return None;
            }

            match serde_json::from_slice(&line) {
                Ok(msg) => Some(Ok(msg)),
                Err(err) => {
                    tracing::warn!(line = i + 1, %err, "skipping malformed feed message");
                    None
                }
            }
        })
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub snapshots: usize,
    pub resets: usize,
    /// Snapshots dropped from the history by resets.
    pub discarded: usize,
}

/// Drive `history` from a feed: every snapshot is recorded and its gauges are passed to
/// `on_snapshot`, every reset clears the history.
#[tracing::instrument(skip_all)]
pub fn replay(
    input: impl BufRead,
    history: &mut FlightHistory,
    mut on_snapshot: impl FnMut(&[DerivedMetric]),
) -> Result<ReplayStats, crate::Error> {
    let mut stats = ReplayStats::default();

    for msg in read_feed(input) {
        match msg? {
            FeedMessage::Snapshot(state) => {
                on_snapshot(&derive_metrics(&state));
                history.record(state);
                stats.snapshots += 1;
            }
            FeedMessage::Reset => {
                let discarded = history.reset();
                tracing::info!(discarded, "reset flight data");
                stats.resets += 1;
                stats.discarded += discarded;
            }
        }
    }

    tracing::info!(snapshots = history.len(), "feed ended");
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use std::io::{self, BufRead, Cursor, Read};

    use super::*;

    #[test]
    #[tracing_test::traced_test]
    fn invalid_utf8_line_is_skipped() {
        let feed = b"{\"type\":\"reset\"}\n\xff\xfe garbage\n{\"type\":\"reset\"}\n";
        let messages: Vec<_> = read_feed(Cursor::new(&feed[..]))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(messages, vec![FeedMessage::Reset, FeedMessage::Reset]);
        assert!(logs_contain("skipping malformed feed message"));
    }

    #[test]
    fn blank_lines_and_crlf() {
        let feed = b"\r\n   \n{\"type\":\"reset\"}\r\n";
        let messages: Vec<_> = read_feed(Cursor::new(&feed[..]))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(messages, vec![FeedMessage::Reset]);
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disconnected"))
        }
    }

    impl BufRead for Broken {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            Err(io::Error::new(io::ErrorKind::Other, "disconnected"))
        }

        fn consume(&mut self, _amt: usize) {}
    }

    #[test]
    fn reader_errors_are_returned() {
        let mut history = FlightHistory::new();
        let res = replay(Broken, &mut history, |_| {});
        assert!(matches!(res, Err(crate::Error::Write(_))));
    }
}
