//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SceneHubError`] via `#[from]` at port boundaries.

use std::error::Error as StdError;

/// Top-level error shared by every crate in the workspace.
#[derive(Debug, thiserror::Error)]
pub enum SceneHubError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("cloud error")]
    Cloud(#[from] CloudError),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("entity id must not be empty")]
    EmptyEntityId,

    #[error("device duid must not be empty")]
    EmptyDuid,

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("service `{service}` is not supported by `{entity_id}`")]
    UnsupportedService { entity_id: String, service: String },
}

/// A lookup that found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} `{id}` not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// Failures reported by the vendor cloud or the transport reaching it.
#[derive(Debug, thiserror::Error)]
pub enum CloudError {
    /// The HTTP exchange completed with a non-success status code.
    #[error("cloud responded with status {status}")]
    Status { status: u16, body: String },

    /// The cloud answered but flagged the request as failed.
    #[error("cloud rejected the request: {message}")]
    Rejected { message: String },

    /// The request never produced a response (DNS, TLS, timeout, …).
    #[error("cloud transport failure")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The response body could not be decoded.
    #[error("unexpected cloud response")]
    Decode(#[source] Box<dyn StdError + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_not_found_with_kind_and_id() {
        let err = NotFoundError {
            entity: "Entity",
            id: "select.robo_selected_scene".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Entity `select.robo_selected_scene` not found"
        );
    }

    #[test]
    fn should_convert_validation_error_into_scenehub_error() {
        let err: SceneHubError = ValidationError::EmptyName.into();
        assert!(matches!(
            err,
            SceneHubError::Validation(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn should_keep_cloud_error_as_source() {
        let err: SceneHubError = CloudError::Rejected {
            message: "scene offline".to_string(),
        }
        .into();
        let source = StdError::source(&err).map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("cloud rejected the request: scene offline")
        );
    }

    #[test]
    fn should_display_unsupported_service() {
        let err = ValidationError::UnsupportedService {
            entity_id: "button.robo_trigger_scene".to_string(),
            service: "turn_on".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "service `turn_on` is not supported by `button.robo_trigger_scene`"
        );
    }
}
