use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Remote failures carry the HTTP status code and the list of error messages
/// returned by the Point Forecast API, so callers can tell "fix my request"
/// apart from "check my credentials" and "retry later". Transport-level
/// failures ([`Http`](MetOceanError::Http), [`Json`](MetOceanError::Json))
/// are never remapped into the remote taxonomy.
#[derive(Debug, Error)]
pub enum MetOceanError {
    /// An error occurred during an HTTP request (DNS, connection, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A 200 response body could not be decoded as JSON.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The data received from the API was in an unexpected format or was
    /// missing a required field (e.g. an unparsable timestamp string).
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// One or more arguments failed local validation. The list names every
    /// violation detected, not just the first.
    #[error("illegal arguments: {}", .0.join("; "))]
    InvalidArgument(Vec<String>),

    /// The API rejected the credential (HTTP 401).
    #[error("unauthorized (status {status}): {}", .errors.join("; "))]
    Unauthorized {
        /// The HTTP status code (always 401).
        status: u16,
        /// Error messages returned by the server.
        errors: Vec<String>,
    },

    /// The endpoint or resource does not exist (HTTP 404).
    #[error("not found (status {status}): {}", .errors.join("; "))]
    NotFound {
        /// The HTTP status code (always 404).
        status: u16,
        /// Error messages returned by the server.
        errors: Vec<String>,
    },

    /// The server rejected the request as malformed (other 4xx).
    #[error("request rejected (status {status}): {}", .errors.join("; "))]
    Input {
        /// The HTTP status code.
        status: u16,
        /// Error messages returned by the server.
        errors: Vec<String>,
    },

    /// The server failed to handle the request (5xx, or any status outside
    /// the mapped ranges).
    #[error("server error (status {status}): {}", .errors.join("; "))]
    Server {
        /// The HTTP status code.
        status: u16,
        /// Error messages returned by the server.
        errors: Vec<String>,
    },
}

impl MetOceanError {
    /// The HTTP status code, for the remote-failure variants.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. }
            | Self::NotFound { status, .. }
            | Self::Input { status, .. }
            | Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The list of error messages carried by this error, if any.
    ///
    /// For remote failures these are the server's messages; for
    /// [`InvalidArgument`](MetOceanError::InvalidArgument) they are the
    /// local validation violations.
    #[must_use]
    pub fn error_list(&self) -> &[String] {
        match self {
            Self::InvalidArgument(errors)
            | Self::Unauthorized { errors, .. }
            | Self::NotFound { errors, .. }
            | Self::Input { errors, .. }
            | Self::Server { errors, .. } => errors,
            _ => &[],
        }
    }

    /// Maps a non-200 response to the remote-failure taxonomy.
    ///
    /// The Point Forecast API returns error bodies as a JSON array of
    /// human-readable strings; anything else is kept verbatim as a single
    /// message.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        let errors = serde_json::from_str::<Vec<String>>(body)
            .unwrap_or_else(|_| vec![body.to_string()]);
        match status {
            401 => Self::Unauthorized { status, errors },
            404 => Self::NotFound { status, errors },
            400..=499 => Self::Input { status, errors },
            // 3xx is unreachable in normal operation; fold it in here.
            _ => Self::Server { status, errors },
        }
    }
}
