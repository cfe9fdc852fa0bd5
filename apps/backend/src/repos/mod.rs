pub mod sessions;

pub use sessions::SessionStore;
