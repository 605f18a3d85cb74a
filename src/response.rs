// SPDX-FileCopyrightText: 2026 Timekit SDK contributors
//
// SPDX-License-Identifier: Apache-2.0

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::TimekitError;

/// Normalized success result for a Timekit API call.
///
/// The API wraps every JSON payload under a `data` key; `Envelope` unwraps it
/// so callers never deal with the outer shape. The status code passes through
/// from the transport unmodified.
#[derive(Debug, Clone)]
pub struct Envelope {
    code: u16,
    body: Body,
}

#[derive(Debug, Clone)]
enum Body {
    Json(Value),
    Raw(String),
}

impl Envelope {
    pub(crate) fn json(code: u16, body: Value) -> Self {
        Self {
            code,
            body: Body::Json(body),
        }
    }

    pub(crate) fn raw(code: u16, body: String) -> Self {
        Self {
            code,
            body: Body::Raw(body),
        }
    }

    /// HTTP status code as reported by the API, unmodified.
    #[must_use]
    pub fn code(&self) -> u16 {
        self.code
    }

    /// The `data` field of the parsed JSON body.
    ///
    /// `None` when the body was not JSON (see
    /// [`raw_body`](Envelope::raw_body)) or has no `data` key.
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        match &self.body {
            Body::Json(value) => value.get("data"),
            Body::Raw(_) => None,
        }
    }

    /// Deserializes the `data` field into `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no `data` field or it does not match `T`.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T, TimekitError> {
        let data = self
            .data()
            .ok_or_else(|| TimekitError::InvalidResponse("response has no data field".into()))?;
        serde_json::from_value(data.clone())
            .map_err(|e| TimekitError::InvalidResponse(format!("data field: {e}")))
    }

    /// The full parsed JSON body, outer envelope included.
    #[must_use]
    pub fn json_body(&self) -> Option<&Value> {
        match &self.body {
            Body::Json(value) => Some(value),
            Body::Raw(_) => None,
        }
    }

    /// The raw body text for endpoints that do not return JSON.
    #[must_use]
    pub fn raw_body(&self) -> Option<&str> {
        match &self.body {
            Body::Json(_) => None,
            Body::Raw(text) => Some(text),
        }
    }
}
