//! Configuration module for the dashboard.

pub mod clock;

mod debug; // Private: callers go through crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod pairing;
pub mod persistence;

// Re-export commonly used items
pub use clock::CLOCK;
pub use pairing::PAIRING;
pub use persistence::{APP_STATE_PATH, PERSISTENCE, export_filename};
