//! Real-time change notifications.
//!
//! Mutation handlers never talk to sockets directly: they emit through
//! [`SessionNotifier`] after a successful commit, and the hub fans the
//! event out to whoever is subscribed to that session id. Delivery is
//! fire-and-forget best-effort; clients re-fetch their view on receipt
//! and poll on reconnect, so a lost notification costs nothing but
//! latency.

pub mod hub;
pub mod protocol;
pub mod session;

use crate::domain::role::Seat;

/// Outbound notification seam.
pub trait SessionNotifier: Send + Sync {
    /// Announce that `acted` changed something in `session_id`. The
    /// notification carries no content beyond "something changed";
    /// secrecy lives in the view projector, not here.
    fn notify(&self, session_id: &str, acted: Seat);
}
