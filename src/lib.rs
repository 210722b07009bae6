pub mod auth;
pub mod filter;
pub mod gate;
pub mod models;
pub mod pages;
pub mod store;
pub mod validate;
pub mod views;

use auth::{AuthService, SessionStore};
use store::EventStore;

/// Process-wide context: the event catalog, the auth provider, and the one
/// shared session. Pages borrow from here instead of reaching for globals.
pub struct App {
    pub store: EventStore,
    pub auth: AuthService,
    pub session: SessionStore,
}

impl App {
    pub fn new() -> Self {
        Self {
            store: EventStore::with_sample_events(),
            auth: AuthService::new(),
            session: SessionStore::new(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
