//! Turns cumulative reply snapshots into incremental deltas.

/// Remembers the last snapshot a backend reported
#[derive(Debug, Clone, Default)]
pub struct DeltaTracker {
    seen: String,
}

impl DeltaTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of `snapshot` not covered by the previous snapshot.
    ///
    /// Normally the snapshot extends the previous one and the delta is the
    /// new suffix. If the backend rewrote earlier text, occurrences of the
    /// previous snapshot are removed instead.
    pub fn delta(&mut self, snapshot: &str) -> String {
        let delta = match snapshot.strip_prefix(self.seen.as_str()) {
            Some(suffix) => suffix.to_string(),
            None => {
                tracing::debug!("snapshot does not extend previous reply text");
                snapshot.replace(self.seen.as_str(), "")
            }
        };
        self.seen.clear();
        self.seen.push_str(snapshot);
        delta
    }

    pub fn seen(&self) -> &str {
        &self.seen
    }
}
