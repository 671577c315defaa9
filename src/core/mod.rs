//! Core error handling for the command line tool.
//!
//! - [`StaticExtractError`] - failures with a known shape
//! - [`ErrorContext`] - an error plus details and a suggestion for the user
//! - [`user_friendly_error`] - turn any [`anyhow::Error`] into an [`ErrorContext`]

pub mod error;

pub use error::{ErrorContext, StaticExtractError, source_chain, user_friendly_error};
