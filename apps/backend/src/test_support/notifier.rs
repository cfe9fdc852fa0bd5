use parking_lot::Mutex;

use crate::domain::role::Seat;
use crate::ws::SessionNotifier;

/// Notifier that records every broadcast for assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<(String, Seat)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(String, Seat)> {
        self.events.lock().clone()
    }
}

impl SessionNotifier for RecordingNotifier {
    fn notify(&self, session_id: &str, acted: Seat) {
        self.events.lock().push((session_id.to_owned(), acted));
    }
}

/// Notifier that drops everything.
#[derive(Default)]
pub struct NullNotifier;

impl SessionNotifier for NullNotifier {
    fn notify(&self, _session_id: &str, _acted: Seat) {}
}
