use actix::prelude::*;
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::role::Seat;
use crate::ws::SessionNotifier;

/// Actor message delivered to each subscriber of a session.
#[derive(Message, Clone, Copy)]
#[rtype(result = "()")]
pub struct StateChanged {
    pub acted: Seat,
}

/// In-process registry of session subscribers.
///
/// Keyed by session id; each connection registers under a random token
/// so it can unregister itself on disconnect without holding locks.
#[derive(Default)]
pub struct SessionHub {
    rooms: DashMap<String, DashMap<Uuid, Recipient<StateChanged>>>,
}

impl SessionHub {
    pub fn new() -> Self {
        Self {
            rooms: DashMap::new(),
        }
    }

    pub fn register(&self, session_id: &str, recipient: Recipient<StateChanged>) -> Uuid {
        let token = Uuid::new_v4();
        let room = self
            .rooms
            .entry(session_id.to_owned())
            .or_insert_with(DashMap::new);
        room.insert(token, recipient);
        token
    }

    pub fn unregister(&self, session_id: &str, token: Uuid) {
        if let Some(room) = self.rooms.get(session_id) {
            room.remove(&token);
            if room.is_empty() {
                drop(room);
                self.rooms.remove(session_id);
            }
        }
    }

    pub fn broadcast(&self, session_id: &str, message: StateChanged) {
        if let Some(room) = self.rooms.get(session_id) {
            for recipient in room.iter() {
                // do_send is lossy by design: a full mailbox drops the
                // event and the client catches up on its next fetch
                recipient.value().do_send(message);
            }
        }
    }
}

impl SessionNotifier for SessionHub {
    fn notify(&self, session_id: &str, acted: Seat) {
        self.broadcast(session_id, StateChanged { acted });
    }
}
