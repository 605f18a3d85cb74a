// SPDX-FileCopyrightText: 2026 Timekit SDK contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Timekit API client with one method per remote endpoint.

use reqwest::Method;
use serde_json::{Value, json};
use tracing::debug;

use crate::config::TimekitConfig;
use crate::error::TimekitError;
use crate::http::HttpClient;
use crate::request::{NewEvent, RequestSettings, resource_path};
use crate::response::Envelope;
use crate::session::Session;

/// Client for the Timekit v2 API.
///
/// One client instance holds at most one authenticated [`Session`] and one
/// set of request settings. Serve distinct identities with distinct client
/// instances; no state is shared between them.
///
/// # Example
///
/// ```ignore
/// use timekit::TimekitClient;
///
/// # async fn example() -> Result<(), timekit::TimekitError> {
/// let mut client = TimekitClient::new("my-app")?;
/// client.authenticate("doc.brown@timekit.io", "password").await?;
///
/// let calendars = client.get_calendars(None, &[]).await?;
/// println!("{:?}", calendars.data());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TimekitClient {
    http: HttpClient,
    session: Option<Session>,
    settings: RequestSettings,
}

impl TimekitClient {
    /// Creates a client for the given `Timekit-App` application identifier,
    /// with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(app: impl Into<String>) -> Result<Self, TimekitError> {
        Self::with_config(TimekitConfig::new(app))
    }

    /// Creates a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn with_config(config: TimekitConfig) -> Result<Self, TimekitError> {
        let http = HttpClient::new(config)?;
        Ok(Self {
            http,
            session: None,
            settings: RequestSettings::default(),
        })
    }

    /// Sets the user for authenticated requests, replacing any prior session.
    ///
    /// The token is the `api_token` obtained from [`authenticate`], so save it
    /// somewhere if you want to skip the password round-trip next time.
    ///
    /// [`authenticate`]: TimekitClient::authenticate
    pub fn set_user(&mut self, email: &str, token: &str) -> &mut Self {
        let session = Session::new(email, token);
        debug!(%session, "session replaced");
        self.session = Some(session);
        self
    }

    /// The active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Authenticates a user with email and password.
    ///
    /// Issues an unauthenticated POST to `auth`; on success the `api_token`
    /// from the response becomes the active session via [`set_user`]. On
    /// failure the existing session is left untouched.
    ///
    /// <http://developers.timekit.io/v2/docs/auth>
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the response carries no
    /// `data.api_token` string.
    ///
    /// [`set_user`]: TimekitClient::set_user
    pub async fn authenticate(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<Envelope, TimekitError> {
        let body = json!({ "email": email, "password": password });
        debug!(path = "auth", "calling Timekit API");
        let req = self
            .http
            .build_request(Method::POST, "auth", &[], None, &self.settings)
            .json(&body);
        let envelope = self.http.execute(req, true).await?;

        let token = envelope
            .data()
            .and_then(|data| data.get("api_token"))
            .and_then(Value::as_str)
            .ok_or_else(|| {
                TimekitError::InvalidResponse("auth response has no data.api_token".into())
            })?
            .to_string();
        self.set_user(email, &token);

        Ok(envelope)
    }

    /// Sets the timezone for timestamps in responses. Default is UTC.
    pub fn set_timezone(&mut self, timezone: &str) -> &mut Self {
        self.settings.set_timezone(timezone);
        self
    }

    /// Sets both the input and output timestamp format.
    ///
    /// Default is ISO-8601 with offset, e.g. `2004-02-12T15:19:21+00:00`.
    pub fn set_timestamp_format(&mut self, format: &str) -> &mut Self {
        self.settings.set_input_timestamp_format(format);
        self.settings.set_output_timestamp_format(format);
        self
    }

    /// Sets the format of timestamps sent to the API.
    pub fn set_timestamp_input_format(&mut self, format: &str) -> &mut Self {
        self.settings.set_input_timestamp_format(format);
        self
    }

    /// Sets the format of timestamps in responses.
    pub fn set_timestamp_output_format(&mut self, format: &str) -> &mut Self {
        self.settings.set_output_timestamp_format(format);
        self
    }

    /// The accumulated request settings.
    #[must_use]
    pub fn settings(&self) -> &RequestSettings {
        &self.settings
    }

    /// Looks for mutual availability across multiple users.
    ///
    /// `future` defaults to `"2 days"` and `length` to `"30 minutes"` when
    /// not given; `filters` serializes as `null` when absent.
    ///
    /// <http://developers.timekit.io/v2/docs/findtime>
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn findtime(
        &self,
        emails: &[String],
        filters: Option<Value>,
        future: Option<&str>,
        length: Option<&str>,
    ) -> Result<Envelope, TimekitError> {
        let body = json!({
            "emails": emails,
            "future": future.unwrap_or("2 days"),
            "length": length.unwrap_or("30 minutes"),
            "filters": filters,
        });

        self.request(Method::POST, "findtime", &[], body).await
    }

    /// Gets all accounts for the current user.
    ///
    /// <http://developers.timekit.io/v2/docs/accounts>
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn get_accounts(&self) -> Result<Envelope, TimekitError> {
        self.request(Method::GET, "accounts", &[], json!({})).await
    }

    /// Syncs the current user's accounts.
    ///
    /// <http://developers.timekit.io/v2/docs/accountssync>
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn accounts_sync(&self) -> Result<Envelope, TimekitError> {
        self.request(Method::GET, "accounts/sync", &[], json!({}))
            .await
    }

    /// Gets calendars for a linked Google account.
    ///
    /// <http://developers.timekit.io/v2/docs/accountsgooglecalendars>
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn accounts_google_calendars(&self) -> Result<Envelope, TimekitError> {
        self.request(Method::GET, "accounts/google/calendars", &[], json!({}))
            .await
    }

    /// Gets the Google signup redirect.
    ///
    /// The endpoint answers with an opaque redirect body rather than JSON, so
    /// the envelope carries it via [`Envelope::raw_body`].
    ///
    /// <http://developers.timekit.io/v2/docs/accountsgooglesignup>
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn accounts_google_signup(&self) -> Result<Envelope, TimekitError> {
        debug!(path = "accounts/google/signup", "calling Timekit API");
        let req = self
            .http
            .build_request(
                Method::GET,
                "accounts/google/signup",
                &[],
                self.session.as_ref(),
                &self.settings,
            )
            .json(&json!({}));
        self.http.execute(req, false).await
    }

    /// Gets all calendars, or a single calendar when `id` is given.
    ///
    /// <http://developers.timekit.io/v2/docs/calendars>
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn get_calendars(
        &self,
        id: Option<&str>,
        params: &[(&str, &str)],
    ) -> Result<Envelope, TimekitError> {
        let path = resource_path("calendars", id);
        self.request(Method::GET, &path, params, json!({})).await
    }

    /// Gets all contacts for the current user.
    ///
    /// <http://developers.timekit.io/v2/docs/contacts>
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn get_contacts(&self) -> Result<Envelope, TimekitError> {
        self.request(Method::GET, "contacts", &[], json!({})).await
    }

    /// Gets all events between `start` and `end`, in the configured timestamp
    /// format.
    ///
    /// <http://developers.timekit.io/v2/docs/events>
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn get_events(&self, start: &str, end: &str) -> Result<Envelope, TimekitError> {
        let params = [("start", start), ("end", end)];
        self.request(Method::GET, "events", &params, json!({})).await
    }

    /// Gets anonymized availability for a user between `start` and `end`.
    ///
    /// <http://developers.timekit.io/v2/docs/eventsavailability>
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn events_availability(
        &self,
        start: &str,
        end: &str,
        email: &str,
    ) -> Result<Envelope, TimekitError> {
        let params = [("start", start), ("end", end), ("email", email)];
        self.request(Method::GET, "events/availability", &params, json!({}))
            .await
    }

    /// Creates an event in one of the current user's calendars.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn create_event(&self, event: &NewEvent) -> Result<Envelope, TimekitError> {
        let body = serde_json::to_value(event)
            .map_err(|e| TimekitError::InvalidResponse(format!("event payload: {e}")))?;
        self.request(Method::POST, "events", &[], body).await
    }

    /// Creates a meeting.
    ///
    /// <http://developers.timekit.io/v2/docs/meetings>
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn create_meeting(&self, data: Value) -> Result<Envelope, TimekitError> {
        self.request(Method::POST, "meetings", &[], data).await
    }

    /// Gets all meetings, or a single meeting when `token` is given.
    ///
    /// <http://developers.timekit.io/v2/docs/meetings-1>
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn get_meetings(
        &self,
        token: Option<&str>,
        params: &[(&str, &str)],
    ) -> Result<Envelope, TimekitError> {
        let path = resource_path("meetings", token);
        self.request(Method::GET, &path, params, json!({})).await
    }

    /// Sets the current user's availability for a meeting suggestion.
    ///
    /// <http://developers.timekit.io/v2/docs/meetingsavailability>
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn set_meeting_availability(
        &self,
        suggestion_id: i64,
        available: bool,
    ) -> Result<Envelope, TimekitError> {
        let body = json!({ "suggestion_id": suggestion_id, "available": available });
        self.request(Method::POST, "meetings/availability", &[], body)
            .await
    }

    /// Books a meeting by selecting a suggestion.
    ///
    /// <http://developers.timekit.io/v2/docs/meetingsbook>
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn book_meeting(&self, suggestion_id: i64) -> Result<Envelope, TimekitError> {
        let body = json!({ "suggestion_id": suggestion_id });
        self.request(Method::POST, "meetings/book", &[], body).await
    }

    /// Updates a meeting.
    ///
    /// <http://developers.timekit.io/v2/docs/meetingstoken-1>
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn edit_meeting(&self, token: &str, body: Value) -> Result<Envelope, TimekitError> {
        let path = resource_path("meetings", Some(token));
        self.request(Method::PUT, &path, &[], body).await
    }

    /// Gets info about the current user.
    ///
    /// <http://developers.timekit.io/v2/docs/usersme>
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn me(&self, params: &[(&str, &str)]) -> Result<Envelope, TimekitError> {
        self.request(Method::GET, "users/me", params, json!({})).await
    }

    /// Creates a new Timekit user.
    ///
    /// <http://developers.timekit.io/v2/docs/users>
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn create_user(&self, body: Value) -> Result<Envelope, TimekitError> {
        self.request(Method::POST, "users", &[], body).await
    }

    /// Updates the current user.
    ///
    /// <http://developers.timekit.io/v2/docs/usersme-1>
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn update_user(&self, body: Value) -> Result<Envelope, TimekitError> {
        self.request(Method::PUT, "users/me", &[], body).await
    }

    /// Gets all properties for the current user, or a single one by `key`.
    ///
    /// <http://developers.timekit.io/v2/docs/properties>
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn get_user_properties(&self, key: Option<&str>) -> Result<Envelope, TimekitError> {
        let path = resource_path("properties", key);
        self.request(Method::GET, &path, &[], json!({})).await
    }

    /// Sets a property for the current user.
    ///
    /// <http://developers.timekit.io/v2/docs/properties-1>
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn set_user_property(
        &self,
        key: &str,
        value: Value,
    ) -> Result<Envelope, TimekitError> {
        let body = json!({ "key": key, "value": value });
        self.request(Method::PUT, "properties", &[], body).await
    }

    /// Funnel for every endpoint method: one network call, JSON body attached
    /// regardless of method (the API accepts a body on GET, matching its
    /// observed wire behavior).
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Value,
    ) -> Result<Envelope, TimekitError> {
        debug!(%method, path, "calling Timekit API");
        let req = self
            .http
            .build_request(method, path, query, self.session.as_ref(), &self.settings)
            .json(&body);
        self.http.execute(req, true).await
    }
}
