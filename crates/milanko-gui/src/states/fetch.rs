use milanko_core::stats::TemperatureSample;

/// Lifecycle of the statistics read for the current (parameters, year).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum StatsPhase {
    #[default]
    Idle,
    Loading,
    Ready(TemperatureSample),
    Unavailable,
}

/// Tracks which statistics request is allowed to update visible state.
///
/// Every issued fetch gets a fresh id; a result is accepted only if it
/// carries the id of the most recently issued fetch, so rapid parameter or
/// year changes can never surface stale data, whatever order responses
/// arrive in.
#[derive(Debug, Default)]
pub struct StatsFetch {
    request_id: u64,
    pub phase: StatsPhase,
}

impl StatsFetch {
    /// Register a new fetch, superseding any in-flight one.
    pub fn begin(&mut self) -> u64 {
        self.request_id += 1;
        self.phase = StatsPhase::Loading;
        self.request_id
    }

    /// Whether a result for `request_id` is still current.
    pub fn accepts(&self, request_id: u64) -> bool {
        request_id == self.request_id
    }

    pub fn is_loading(&self) -> bool {
        self.phase == StatsPhase::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_last_issued_request_is_accepted() {
        let mut fetch = StatsFetch::default();
        let first = fetch.begin();
        let second = fetch.begin();
        let third = fetch.begin();

        // Completion order does not matter; only the newest id counts.
        assert!(!fetch.accepts(second));
        assert!(!fetch.accepts(first));
        assert!(fetch.accepts(third));
    }

    #[test]
    fn begin_marks_the_fetch_loading() {
        let mut fetch = StatsFetch::default();
        assert_eq!(fetch.phase, StatsPhase::Idle);
        fetch.begin();
        assert!(fetch.is_loading());
    }
}
