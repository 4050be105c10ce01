//! rb-server: HTTP surface for the phase-change estimator and the
//! damaged-ship mechanic.
//!
//! Routes:
//! - `GET /phase-change?pressure=<MPa>`
//! - `GET /status`
//! - `GET /repair-bay`
//! - `POST /teapot`

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

pub use config::{ServerConfig, load_config};
pub use error::{ServerError, ServerResult};
pub use handlers::AppState;
pub use routes::router;
