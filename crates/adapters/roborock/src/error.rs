//! Roborock adapter error types.

use scenehub_domain::error::{CloudError, SceneHubError};

/// Errors specific to the Roborock cloud adapter.
#[derive(Debug, thiserror::Error)]
pub enum RoborockError {
    /// The reqwest client could not be constructed.
    #[error("failed to build HTTP client")]
    Build(#[source] reqwest::Error),

    /// The request did not produce a response.
    #[error("request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response carried a non-success status code.
    #[error("{url} responded with status {status}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    /// The envelope reported `success: false`.
    #[error("cloud rejected the request: {0}")]
    Rejected(String),

    /// The body was not the expected JSON.
    #[error("failed to decode response from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl From<RoborockError> for SceneHubError {
    fn from(err: RoborockError) -> Self {
        let cloud = match err {
            RoborockError::Status { status, body, .. } => CloudError::Status { status, body },
            RoborockError::Rejected(message) => CloudError::Rejected { message },
            err @ RoborockError::Decode { .. } => CloudError::Decode(Box::new(err)),
            err @ (RoborockError::Build(_) | RoborockError::Http { .. }) => {
                CloudError::Transport(Box::new(err))
            }
        };
        SceneHubError::Cloud(cloud)
    }
}
