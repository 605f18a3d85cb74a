// SPDX-FileCopyrightText: 2026 Timekit SDK contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Client library for the Timekit v2 scheduling and calendar API.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::module_name_repetitions)]

mod client;
mod config;
mod error;
mod http;
mod request;
mod response;
mod session;

pub use crate::client::TimekitClient;
pub use crate::config::TimekitConfig;
pub use crate::error::TimekitError;
pub use crate::request::{
    HEADER_APP, HEADER_INPUT_FORMAT, HEADER_OUTPUT_FORMAT, HEADER_TIMEZONE, NewEvent,
    RequestSettings,
};
pub use crate::response::Envelope;
pub use crate::session::Session;
