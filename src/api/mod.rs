// src/api/mod.rs
//! HTTP surface of the converter: `/convert`, health and the embedded page.
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::configure_routes;
pub use state::AppState;
