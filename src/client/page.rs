// src/client/page.rs
use reqwest::Client;

use crate::client::handler::SubmitHandler;
use crate::client::surface::{Button, TextSurface};
use crate::config::ClientConfig;

pub const ST_CODE_ID: &str = "stCode";
pub const CONVERTED_CODE_ID: &str = "convertedCode";
pub const CONVERT_BTN_ID: &str = "convertBtn";

/// Borrowed view of one element on the page.
#[derive(Debug, Clone, Copy)]
pub enum Element<'a> {
    Text(&'a TextSurface),
    Button(&'a Button),
}

/// The converter page: an ST input field, a Python output field and the
/// convert button.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub st_code: TextSurface,
    pub converted_code: TextSurface,
    pub convert_btn: Button,
}

impl Page {
    /// A page with no listeners attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the page and wires the submit handler to the convert button.
    /// This is the only place the handler is registered.
    pub fn load(client: Client, config: &ClientConfig) -> Self {
        let page = Self::new();
        SubmitHandler::new(
            client,
            config,
            page.st_code.clone(),
            page.converted_code.clone(),
        )
        .register(&page.convert_btn);

        log::debug!("Page loaded, converting via {}", config.convert_url());
        page
    }

    pub fn element(&self, id: &str) -> Option<Element<'_>> {
        match id {
            ST_CODE_ID => Some(Element::Text(&self.st_code)),
            CONVERTED_CODE_ID => Some(Element::Text(&self.converted_code)),
            CONVERT_BTN_ID => Some(Element::Button(&self.convert_btn)),
            _ => None,
        }
    }
}
