use std::fmt;

/// Which endpoint a request was for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Traders,
    Profile,
    Trades,
}

impl Resource {
    /// Generic message shown in place of the table when a load fails
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Traders => "Failed to load traders",
            Self::Profile => "Failed to load profile",
            Self::Trades => "Failed to load trades",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Traders => "traders",
            Self::Profile => "profile",
            Self::Trades => "trades",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid base URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{resource} request returned {status}")]
    Status {
        resource: Resource,
        status: reqwest::StatusCode,
    },

    #[error("failed to decode {resource} response: {source}")]
    Decode {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },
}
