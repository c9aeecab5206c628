//! HTTP boundary for SkyCast.
//!
//! `GET /api/weather?city=<name>` validates the city, asks the configured
//! provider for a report and returns it as JSON. Every other path is served
//! from the static site directory.

pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use server::{serve, shutdown_signal};
pub use state::AppState;
