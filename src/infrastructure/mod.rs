pub mod config;
pub mod logging;
pub mod store;

pub use config::*;
pub use store::{open_default, EnvironmentStore, MemoryStore, ProfileStore};
