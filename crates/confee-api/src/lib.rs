//! confee-api: HTTP transport for the Confee chat endpoint
//!
//! This crate provides the wire types for `POST <base>/chat`, the error
//! taxonomy a chat call can fail with, and a reqwest-backed transport that
//! enforces a per-request timeout.

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::{DEFAULT_TIMEOUT, HttpTransport};
pub use error::{Error, Result};
pub use transport::Transport;
pub use types::*;
