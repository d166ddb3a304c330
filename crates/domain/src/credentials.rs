//! Account credentials handed to every cloud call.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Credentials of the cloud account that owns the configured devices.
///
/// The hub treats them as opaque: they are loaded from configuration and
/// passed through to the cloud port unchanged.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCredentials {
    pub username: String,
    pub token: String,
}

impl UserCredentials {
    #[must_use]
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
        }
    }
}

impl fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCredentials")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}
