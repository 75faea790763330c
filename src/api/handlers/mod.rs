// src/api/handlers/mod.rs
mod assets;
mod convert;
mod health;

pub use assets::{index, static_file_handler};
pub use convert::convert;
pub use health::health_check;
