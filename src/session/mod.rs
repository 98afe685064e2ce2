//! Sessões server-side (cookie → access token)

pub mod middleware;
pub mod store;

pub use middleware::{session_layer, Session, SESSION_COOKIE};
pub use store::{MemorySessionStore, SessionData, SessionStore};
