// src/lib.rs
pub mod api;
pub mod banner;
pub mod client;
pub mod config;
pub mod converter;
pub mod errors;
pub mod models;
