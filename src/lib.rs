pub mod config;
pub mod db;
pub mod error;
pub mod observability;
pub mod routes;
pub mod server;

pub use routes::AppState;

/// Create app router for testing
///
/// Builds the planner API around an already assembled state, without binding
/// a listener.
pub fn create_app(state: AppState) -> axum::Router {
    routes::router(state)
}
