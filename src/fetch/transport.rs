//! HTTP transport.
use std::fmt;

use reqwest::header::{HeaderMap, HeaderValue};

use crate::error::Error;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 6.2; Win64; x64) AppleWebKit/537.36 (HTML, like Gecko) Chrome/32.0.1667.0 Safari/537.36";
const FORWARDED_FOR: &str = "127.0.0.1";

/// Status code and body of a response.
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

/// Connection level failure (no response at all).
#[derive(Debug)]
pub enum TransportError {
    Connection(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Connection(e) => write!(f, "connection failure: {}", e),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        TransportError::Connection(e.to_string())
    }
}

pub trait Transport {
    /// Send a GET request.
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// Blocking [reqwest] transport.
///
/// Requests carry a browser user agent and a `X-Forwarded-For` header.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert("X-Forwarded-For", HeaderValue::from_static(FORWARDED_FOR));

        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let response = self.client.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}
