use crate::state::FlightState;

/// Snapshots received since the last reset, oldest first. Kept in memory only.
#[derive(Debug, Default)]
pub struct FlightHistory {
    snapshots: Vec<FlightState>,
}

impl FlightHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, snapshot: FlightState) {
        self.snapshots.push(snapshot);
    }

    /// Discard all recorded snapshots and return how many there were.
    pub fn reset(&mut self) -> usize {
        let discarded = self.snapshots.len();
        self.snapshots.clear();
        tracing::debug!(discarded, "flight history reset");
        discarded
    }

    pub fn latest(&self) -> Option<&FlightState> {
        self.snapshots.last()
    }

    pub fn points(&self) -> &[FlightState] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl From<Vec<FlightState>> for FlightHistory {
    fn from(snapshots: Vec<FlightState>) -> Self {
        Self { snapshots }
    }
}
