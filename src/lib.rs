//! SynergAI: picks one of a fixed set of AI models for a free-text query.
//!
//! Scoring is plain substring matching against a small rule table; see
//! [`routing`]. The [`web`] module exposes the same functions over HTTP.

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod routing;
pub mod web;

pub use error::{ConfigError, ServerError};
