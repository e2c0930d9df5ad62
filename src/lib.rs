pub mod auth;
pub mod config;
pub mod handlers;
pub mod models;
pub mod server;

use auth::Authenticator;

// share the authenticator with all the handlers.
// it holds the master key read once at startup and
// is never mutated afterwards, so cloning is cheap
// and no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub authenticator: Authenticator,
}
