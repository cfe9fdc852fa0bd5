//! Test doubles shared by unit tests.

pub mod logging;
pub mod notifier;

pub use memory_store::MemoryStore;
pub use notifier::{NullNotifier, RecordingNotifier};
