//! Parsers for chat config payloads
//!
//! # Error Handling Strategy
//!
//! Loading a config file is the one place where the crate touches the filesystem,
//! so it reports failures with `anyhow::Result` and context describing which file
//! and which step failed:
//!
//! - **Size check**: Files larger than 10MB are rejected on the open handle before reading.
//!
//! - **Envelope handling**: The config endpoint wraps the payload in `{"data": ...}`. Both the
//!   envelope and a bare config object are accepted.
//!
//! - **Fallback**: [`load_config_with_fallback`] logs the primary failure and loads a local
//!   fallback config instead, so a widget can always start with at least a welcome message.
//!
//! Lenient field handling (`null` collections, numeric or RFC3339 timestamps) lives in
//! [`deserializers`].

pub mod config;
pub mod deserializers;

pub use config::{load_config_with_fallback, parse_config_file, parse_config_str};
