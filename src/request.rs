// SPDX-FileCopyrightText: 2026 Timekit SDK contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Per-instance request settings and path helpers.

use serde::Serialize;

/// Header carrying the application identifier.
pub const HEADER_APP: &str = "Timekit-App";
/// Header selecting the timezone of timestamps in responses.
pub const HEADER_TIMEZONE: &str = "Timekit-Timezone";
/// Header selecting the format of timestamps sent to the API.
pub const HEADER_INPUT_FORMAT: &str = "Timekit-InputTimestampFormat";
/// Header selecting the format of timestamps in responses.
pub const HEADER_OUTPUT_FORMAT: &str = "Timekit-OutputTimestampFormat";

/// Per-instance settings merged into every outgoing request.
///
/// Headers accumulate in insertion order; setting a header that already
/// exists replaces its value in place. There is no reset, last write wins for
/// the lifetime of the owning client.
#[derive(Debug, Clone, Default)]
pub struct RequestSettings {
    headers: Vec<(String, String)>,
    timezone: Option<String>,
    input_timestamp_format: Option<String>,
    output_timestamp_format: Option<String>,
}

impl RequestSettings {
    /// Inserts a header, replacing any existing entry with the same name.
    pub(crate) fn insert_header(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self
            .headers
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
        {
            Some((_, v)) => *v = value,
            None => self.headers.push((name.to_string(), value)),
        }
    }

    pub(crate) fn set_timezone(&mut self, timezone: &str) {
        self.insert_header(HEADER_TIMEZONE, timezone);
        self.timezone = Some(timezone.to_string());
    }

    pub(crate) fn set_input_timestamp_format(&mut self, format: &str) {
        self.insert_header(HEADER_INPUT_FORMAT, format);
        self.input_timestamp_format = Some(format.to_string());
    }

    pub(crate) fn set_output_timestamp_format(&mut self, format: &str) {
        self.insert_header(HEADER_OUTPUT_FORMAT, format);
        self.output_timestamp_format = Some(format.to_string());
    }

    /// Accumulated headers in insertion order.
    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// The configured response timezone, if any.
    #[must_use]
    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    /// The configured input timestamp format, if any.
    #[must_use]
    pub fn input_timestamp_format(&self) -> Option<&str> {
        self.input_timestamp_format.as_deref()
    }

    /// The configured output timestamp format, if any.
    #[must_use]
    pub fn output_timestamp_format(&self) -> Option<&str> {
        self.output_timestamp_format.as_deref()
    }
}

/// Payload for creating an event.
#[derive(Debug, Clone, Serialize)]
pub struct NewEvent {
    /// Start timestamp, in the configured input format.
    pub start: String,
    /// End timestamp, in the configured input format.
    pub end: String,
    /// Event title.
    pub what: String,
    /// Event location.
    #[serde(rename = "where")]
    pub location: String,
    /// Participant emails.
    pub participants: Vec<String>,
    /// Whether to send calendar invites to participants.
    pub invite: bool,
    /// Id of the calendar to create the event in.
    pub calendar_id: String,
}

/// Builds `resource/{id}` when an id is present, the bare `resource` otherwise.
///
/// Shared by every get-or-list endpoint (calendars by id, meetings by token,
/// properties by key).
pub(crate) fn resource_path(resource: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => format!("{resource}/{id}"),
        None => resource.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_path_appends_id() {
        assert_eq!(resource_path("calendars", Some("32470")), "calendars/32470");
        assert_eq!(resource_path("calendars", None), "calendars");
        assert_eq!(resource_path("meetings", Some("tok-1")), "meetings/tok-1");
    }

    #[test]
    fn test_insert_header_replaces_existing_key() {
        let mut settings = RequestSettings::default();
        settings.insert_header(HEADER_TIMEZONE, "UTC");
        settings.insert_header("X-Custom", "1");
        settings.insert_header(HEADER_TIMEZONE, "Europe/Copenhagen");

        let headers: Vec<_> = settings.headers().collect();
        assert_eq!(
            headers,
            vec![
                (HEADER_TIMEZONE, "Europe/Copenhagen"),
                ("X-Custom", "1"),
            ]
        );
    }

    #[test]
    fn test_format_setters_track_their_own_field() {
        let mut settings = RequestSettings::default();
        settings.set_input_timestamp_format("Y-m-d");
        settings.set_output_timestamp_format("c");

        assert_eq!(settings.input_timestamp_format(), Some("Y-m-d"));
        assert_eq!(settings.output_timestamp_format(), Some("c"));
        assert_eq!(settings.timezone(), None);
    }
}
