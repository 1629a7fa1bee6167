use std::fmt;

use reqwest::StatusCode;

use crate::types::ClientError;

const UNKNOWN_API_ERROR: &str = "An unknown API error occurred";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("API key is required to interact with the Brawl Stars API")]
    MissingApiKey,

    #[error(transparent)]
    EnvVar(#[from] EnvVarError),

    #[error("API key is not a valid header value: {0}")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),

    #[error("could not build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("JSON deserialization error: {0}")]
    JSON(#[from] JSONError),
}

impl Error {
    /// The normalized network failure, if this error came from a request.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("{source} ({var})")]
pub struct EnvVarError {
    var: String,
    #[source]
    source: std::env::VarError,
}

impl EnvVarError {
    pub fn new(var: &str, source: std::env::VarError) -> Self {
        Self {
            var: var.into(),
            source,
        }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

/// A response body that did not match the expected shape.
#[derive(thiserror::Error, Debug)]
#[error("{source} ({path})")]
pub struct JSONError {
    path: String,
    #[source]
    source: serde_json::Error,
}

impl JSONError {
    pub fn new(path: &str, source: serde_json::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// A failed call to the API.
///
/// `status_code` is `None` when no response was received at all
/// (connection refused, DNS failure, timeout); otherwise it holds the
/// non-success status and `error_data` holds the API's error envelope
/// when the body could be decoded as one.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    message: String,
    status_code: Option<StatusCode>,
    error_data: Option<ClientError>,
}

impl ApiError {
    pub fn new(
        message: impl Into<String>,
        status_code: Option<StatusCode>,
        error_data: Option<ClientError>,
    ) -> Self {
        let message = message.into();
        Self {
            message: if message.is_empty() {
                UNKNOWN_API_ERROR.into()
            } else {
                message
            },
            status_code,
            error_data,
        }
    }

    /// No response was received.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        Self::new(err.to_string(), err.status(), None)
    }

    /// A response arrived with a non-success status.
    pub fn from_status(status: StatusCode, error_data: Option<ClientError>) -> Self {
        let message = match error_data {
            Some(ref data) if !data.message.is_empty() => data.message.clone(),
            _ => format!("Request failed with status code {}", status.as_u16()),
        };
        Self::new(message, Some(status), error_data)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status_code(&self) -> Option<StatusCode> {
        self.status_code
    }

    pub fn error_data(&self) -> Option<&ClientError> {
        self.error_data.as_ref()
    }

    pub fn is_transport(&self) -> bool {
        self.status_code.is_none()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status_code {
            Some(status) => write!(f, "API error ({}): {}", status.as_u16(), self.message),
            None => write!(f, "API error (N/A): {}", self.message),
        }
    }
}

impl std::error::Error for ApiError {}
