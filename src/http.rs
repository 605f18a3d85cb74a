// SPDX-FileCopyrightText: 2026 Timekit SDK contributors
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with authentication and header merging.

use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;
use tracing::{debug, error};

use crate::config::TimekitConfig;
use crate::error::TimekitError;
use crate::request::{HEADER_APP, RequestSettings};
use crate::response::Envelope;
use crate::session::Session;

/// HTTP client for Timekit API operations.
#[derive(Debug)]
pub(crate) struct HttpClient {
    client: Client,
    config: TimekitConfig,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: TimekitConfig) -> Result<Self, TimekitError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client, config })
    }

    /// Builds a request with the app identifier, accumulated settings headers
    /// and, when a session is active, basic-auth credentials.
    pub fn build_request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        session: Option<&Session>,
        settings: &RequestSettings,
    ) -> RequestBuilder {
        let url = format!("{}{path}", self.config.base_url_normalized());
        let mut req = self
            .client
            .request(method, url)
            .header(HEADER_APP, &self.config.app);

        for (name, value) in settings.headers() {
            req = req.header(name, value);
        }

        if let Some(session) = session {
            req = req.basic_auth(session.email(), Some(session.token()));
        }

        if !query.is_empty() {
            req = req.query(query);
        }

        req
    }

    /// Executes a request and normalizes the outcome.
    ///
    /// A 4xx/5xx status translates into [`TimekitError::Api`] carrying the
    /// status and raw body. Any other status yields an [`Envelope`]: the body
    /// is JSON-parsed with the `data` key exposed when `expect_json` is true,
    /// returned as raw text otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, returns an error status code,
    /// or the body is not the expected shape.
    pub async fn execute(
        &self,
        req: RequestBuilder,
        expect_json: bool,
    ) -> Result<Envelope, TimekitError> {
        let resp = req.send().await?;
        let status = resp.status();

        if status.is_client_error() || status.is_server_error() {
            let source = resp.error_for_status_ref().err();
            // A failed response with no readable body still translates,
            // with an empty body.
            let body = resp.text().await.unwrap_or_default();
            error!(status = status.as_u16(), %body, "Timekit API returned an error");
            return Err(TimekitError::Api {
                status: status.as_u16(),
                body,
                source,
            });
        }

        let code = status.as_u16();
        let text = resp.text().await?;
        debug!(code, "Timekit API responded");

        if expect_json {
            // 204 and other bodiless successes parse as null.
            let value = if text.is_empty() {
                Value::Null
            } else {
                serde_json::from_str(&text)
                    .map_err(|e| TimekitError::InvalidResponse(format!("body is not JSON: {e}")))?
            };
            Ok(Envelope::json(code, value))
        } else {
            Ok(Envelope::raw(code, text))
        }
    }
}
