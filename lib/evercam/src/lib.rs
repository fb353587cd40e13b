//! Client library for the Evercam camera-management API.
//!
//! Every operation flows through one pipeline: credentials are injected as
//! `api_id`/`api_key` request parameters, the short path is turned into a
//! versioned endpoint URL, the request is dispatched over a pluggable
//! [`Transport`], and the response is interpreted into a JSON payload or a
//! uniform error.
//!
//! # Example
//!
//! ```ignore
//! use evercam::{Api, LogOptions};
//!
//! #[tokio::main]
//! async fn main() -> evercam::Result<()> {
//!     let api = Api::builder()
//!         .api_id("my-api-id")
//!         .api_key("my-api-key")
//!         .build()?;
//!
//!     let logs = api.get_logs("front-door", LogOptions::default()).await?;
//!     println!("{logs}");
//!     Ok(())
//! }
//! ```
//!
//! Request/response events are emitted through `tracing`; install a
//! subscriber to see them, or leave it out to discard all output.

mod client;
mod config;
mod connector;
pub mod prelude;
mod resources;
mod route;
mod transport;

// Re-export client types
pub use client::{Api, ApiBuilder};
pub use config::{ApiConfig, ApiConfigBuilder};
pub use resources::{LogOptions, NewUser, PublicCameraFilter};
pub use transport::{HyperTransport, Transport};

// Re-export core types
pub use evercam_core::{
    ApiResponse, Credentials, Endpoint, Error, ParamValue, Params, Result, StatusCode, Verb,
};

// Re-export URL type used in the transport contract
pub use url;
