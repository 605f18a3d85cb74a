// SPDX-FileCopyrightText: 2026 Timekit SDK contributors
//
// SPDX-License-Identifier: Apache-2.0

/// Timekit client errors.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum TimekitError {
    /// The API answered with a 4xx/5xx status.
    ///
    /// `body` is the raw response text, empty when the failed response
    /// carried no body.
    #[error("Timekit API error ({status}): {body}")]
    Api {
        /// HTTP status code of the failed response.
        status: u16,
        /// Raw response body.
        body: String,
        /// The underlying status error reported by the transport.
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Transport failure before an HTTP response was received
    /// (DNS, connection refused, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response could not be interpreted as the expected shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl TimekitError {
    /// HTTP status code, when the error is an API error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidResponse(_) => None,
        }
    }
}
