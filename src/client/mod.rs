// src/client/mod.rs
pub mod handler;
pub mod page;
pub mod surface;

pub use handler::SubmitHandler;
pub use page::{Element, Page};
pub use surface::{Button, InputSurface, OutputSurface, TextSurface};
