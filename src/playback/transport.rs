//! Transport: one blocking JSON POST per call.
//!
//! The dispatcher only needs "send this body, give me status and text back".
//! [`HttpTransport`] does that with a blocking reqwest client; tests plug in
//! their own [`Transport`].

use std::fmt;

use super::outcome::STATUS_OK;

/// Status and raw body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// The exchange did not produce a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError(pub String);

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for TransportError {}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        TransportError(e.to_string())
    }
}

/// Sends a JSON body to a URL and waits for the answer.
pub trait Transport: Send + Sync {
    fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpResponse, TransportError>;
}

/// reqwest blocking client. Timeouts are whatever reqwest defaults to.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("synthdial/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpResponse, TransportError> {
        let response = self.client.post(url).json(body).send()?;
        let status = response.status().as_u16();
        let body = match response.text() {
            Ok(text) => text,
            // Only a 200 body is ever parsed; other statuses classify on the code.
            Err(e) if status != STATUS_OK => {
                log::warn!("status {status}: body unreadable ({e}), classifying on status");
                String::new()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(HttpResponse { status, body })
    }
}
