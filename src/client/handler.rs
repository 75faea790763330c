// src/client/handler.rs
use reqwest::Client;
use serde_json::Value;
use tokio::task::JoinHandle;

use crate::client::surface::{Button, InputSurface, OutputSurface};
use crate::config::ClientConfig;
use crate::errors::{ConvertError, Result};
use crate::models::ConvertRequest;

/// Sends the input surface's text to the conversion endpoint and writes the
/// reply into the output surface.
///
/// Every trigger issues its own request. Nothing tracks in-flight requests,
/// so when several overlap the output ends up holding whichever reply
/// arrived last.
#[derive(Clone)]
pub struct SubmitHandler<I, O> {
    client: Client,
    endpoint: String,
    input: I,
    output: O,
}

impl<I, O> SubmitHandler<I, O>
where
    I: InputSurface + Clone + 'static,
    O: OutputSurface + Clone + 'static,
{
    pub fn new(client: Client, config: &ClientConfig, input: I, output: O) -> Self {
        Self {
            client,
            endpoint: config.convert_url(),
            input,
            output,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Registers the handler as a click listener on `button`. The button owns
    /// the handler from then on.
    pub fn register(self, button: &Button) {
        button.add_click_listener(move || self.trigger());
    }

    /// Reads the input now and starts the request in the background.
    pub fn trigger(&self) -> JoinHandle<()> {
        let st_code = self.input.value();
        let handler = self.clone();
        tokio::spawn(async move {
            let outcome = handler.request(&st_code).await;
            // Failures were already reported by `complete`.
            let _ = handler.complete(outcome);
        })
    }

    /// Awaitable form of [`trigger`](Self::trigger): same effects, but the
    /// outcome is also returned to the caller.
    pub async fn submit(&self) -> Result<String> {
        let st_code = self.input.value();
        let outcome = self.request(&st_code).await;
        self.complete(outcome)
    }

    /// POSTs `{"st_code": ...}` and parses the body as JSON. The HTTP status
    /// is not inspected, so error replies are parsed like any other. A `null`
    /// body has no fields to read and counts as a failed request.
    async fn request(&self, st_code: &str) -> Result<Value> {
        log::debug!("Posting {} bytes to {}", st_code.len(), self.endpoint);

        let body = ConvertRequest {
            st_code: st_code.to_string(),
        };
        let resp = self.client.post(&self.endpoint).json(&body).send().await?;

        log::debug!("Response status: {}", resp.status());

        let text = resp.text().await?;
        parse_reply(&text)
    }

    /// Applies a finished request: the output surface on success, the
    /// diagnostic log on failure.
    fn complete(&self, outcome: Result<Value>) -> Result<String> {
        match outcome {
            Ok(body) => {
                let converted = converted_code(&body);
                self.output.set_value(converted.clone());
                Ok(converted)
            }
            Err(e) => {
                log::error!("Error: {}", e);
                Err(e)
            }
        }
    }
}

/// Parses a reply body. Anything that isn't JSON, or is JSON `null`, is an
/// error.
pub fn parse_reply(text: &str) -> Result<Value> {
    match serde_json::from_str::<Value>(text)? {
        Value::Null => Err(ConvertError::UnexpectedResponse(
            "reply body is null".to_string(),
        )),
        body => Ok(body),
    }
}

/// Pulls `converted_code` out of a reply. A missing or null field reads as
/// the empty string; any other non-string value is written as JSON text.
pub fn converted_code(body: &Value) -> String {
    match body.get("converted_code") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => {
            log::debug!("Reply has no converted_code field: {}", body);
            String::new()
        }
        Some(other) => other.to_string(),
    }
}
