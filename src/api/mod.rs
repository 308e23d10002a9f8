//! Request and response shaping for the chatbot backend
//!
//! The HTTP transport belongs to the host. This module only builds the JSON
//! bodies and URLs the backend expects and decodes what it sends back:
//!
//! - [`request`] - Prompt and config request bodies, config URL with session key
//! - [`response`] - Prompt response envelope decoding and error mapping

pub mod request;
pub mod response;

pub use request::{config_request_body, config_request_url, prompt_request_body};
pub use response::{ApiError, interpret_prompt_response, parse_config_response};
