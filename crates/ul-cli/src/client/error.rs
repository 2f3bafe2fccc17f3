use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Ways a user fetch can fail. Every variant carries the requested URL.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure: DNS, connect, TLS, timeout, or a broken body stream
    #[error("Request to {url} failed{}: {source} {location}", timeout_suffix(.timed_out))]
    Http {
        url: String,
        timed_out: bool,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status
    #[error("{url} returned {status}: {message} {location}")]
    Status {
        url: String,
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    /// The body was not a `{ "results": [...] }` user payload
    #[error("Unexpected payload from {url}: {source} {location}")]
    Json {
        url: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    #[track_caller]
    pub fn request(url: &str, err: reqwest::Error) -> Self {
        ClientError::Http {
            url: url.to_string(),
            timed_out: err.is_timeout(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn status(url: &str, status: u16, message: String) -> Self {
        ClientError::Status {
            url: url.to_string(),
            status,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn payload(url: &str, err: serde_json::Error) -> Self {
        ClientError::Json {
            url: url.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

fn timeout_suffix(timed_out: &bool) -> &'static str {
    if *timed_out { " (timed out)" } else { "" }
}

pub type Result<T> = std::result::Result<T, ClientError>;
