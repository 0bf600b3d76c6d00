pub mod manager;
pub mod models;
pub mod store;
pub mod token;

pub use manager::SessionManager;
pub use models::{PriceSession, SessionStatus, SessionView, DEFAULT_TTL_SECONDS};
pub use store::{MemorySessionStore, SessionStore};
