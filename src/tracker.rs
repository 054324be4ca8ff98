//! Keyed request tracker.
//!
//! Screens act on individual rows (apply, favorite, delete, accept/reject)
//! and need to disable exactly the row with a request outstanding, not the
//! whole list. The tracker maps item id to request state; `begin` refuses
//! re-entry while a request for that id is in flight, and failures are kept
//! per id so the row can show what went wrong.

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
    Failed(String),
}

#[derive(Debug, Default)]
pub struct RequestTracker {
    states: HashMap<i64, RequestState>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, id: i64) -> &RequestState {
        self.states.get(&id).unwrap_or(&RequestState::Idle)
    }

    pub fn is_in_flight(&self, id: i64) -> bool {
        *self.state(id) == RequestState::InFlight
    }

    /// Mark `id` in flight. Returns false (and changes nothing) if a request
    /// for it is already outstanding; callers skip the action in that case.
    pub fn begin(&mut self, id: i64) -> bool {
        if self.is_in_flight(id) {
            return false;
        }
        self.states.insert(id, RequestState::InFlight);
        true
    }

    pub fn finish(&mut self, id: i64) {
        self.states.insert(id, RequestState::Idle);
    }

    pub fn fail(&mut self, id: i64, message: impl Into<String>) {
        self.states.insert(id, RequestState::Failed(message.into()));
    }

    pub fn error(&self, id: i64) -> Option<&str> {
        match self.state(id) {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untracked_id_is_idle() {
        let tracker = RequestTracker::new();
        assert_eq!(*tracker.state(42), RequestState::Idle);
        assert!(!tracker.is_in_flight(42));
    }

    #[test]
    fn test_begin_refuses_duplicate() {
        let mut tracker = RequestTracker::new();
        assert!(tracker.begin(1));
        assert!(!tracker.begin(1));
        // A different id is unaffected
        assert!(tracker.begin(2));
    }

    #[test]
    fn test_finish_returns_to_idle() {
        let mut tracker = RequestTracker::new();
        tracker.begin(1);
        tracker.finish(1);
        assert_eq!(*tracker.state(1), RequestState::Idle);
        assert!(tracker.begin(1));
    }

    #[test]
    fn test_fail_records_message_and_allows_retry() {
        let mut tracker = RequestTracker::new();
        tracker.begin(7);
        tracker.fail(7, "You have already applied to this job");
        assert_eq!(tracker.error(7), Some("You have already applied to this job"));
        // Failed is not in-flight: the user may retry
        assert!(tracker.begin(7));
        assert_eq!(tracker.error(7), None);
    }
}
