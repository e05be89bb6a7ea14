//! Errors produced while talking to the books API.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The configured base URL cannot be joined with an endpoint path.
    #[error("invalid API url: {0}")]
    Url(#[from] url::ParseError),

    /// Connection refused, DNS failure, reset mid-response.
    #[error("could not reach the books API: {0}")]
    Transport(#[source] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("{}", api_message(*status, body))]
    Api { status: u16, body: String },

    /// A 2xx response whose body is not the expected JSON shape.
    #[error("unexpected response from the books API: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ClientError {
    /// HTTP status returned by the API, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

fn api_message(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("the books API returned status {status}")
    } else {
        body.to_string()
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
