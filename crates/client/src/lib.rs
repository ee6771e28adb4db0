//! Wicket API client
//!
//! Transport layer for the Wicket authentication frontend. Owns the
//! bearer-token protocol end to end: tokens live in a [`TokenStore`],
//! every outgoing request reads the access token from the store at
//! dispatch time, and a 401 response triggers a single refresh-and-retry
//! cycle before the error is surfaced to the caller.
//!
//! Compiles for both native targets (where the integration tests run
//! against a mock server) and `wasm32-unknown-unknown` (where the Yew
//! frontend drives it).

pub mod client;
pub mod token_store;
pub mod types;

pub use client::error::ClientError;
pub use client::{ApiClient, ApiRequest};
pub use token_store::{ACCESS_TOKEN, MemoryTokenStore, REFRESH_TOKEN, TokenStore};
