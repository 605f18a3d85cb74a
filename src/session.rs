// SPDX-FileCopyrightText: 2026 Timekit SDK contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Authenticated identity attached to outgoing requests.
///
/// A `Session` pairs a user's email with the API token that authenticates it.
/// It is immutable once constructed; replacing the active identity means
/// constructing a new `Session` via [`TimekitClient::set_user`].
///
/// [`TimekitClient::set_user`]: crate::TimekitClient::set_user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    email: String,
    token: String,
}

impl Session {
    /// Creates a new `Session` from an email and API token.
    ///
    /// Neither value is validated; a bad token surfaces as a 401 from the API.
    #[must_use]
    pub fn new(email: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            token: token.into(),
        }
    }

    /// The user's email, sent as the basic-auth username.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The API token, sent as the basic-auth password.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for Session {
    // Token deliberately omitted, this ends up in log lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Session [email: {}]", self.email)
    }
}
