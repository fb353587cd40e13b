//! Core types for the Evercam API client.
//!
//! This crate provides the transport-free pieces of the client:
//! - [`Verb`] - HTTP verb enum
//! - [`Params`] and [`ParamValue`] - request parameter mapping
//! - [`Credentials`] - api_id/api_key pair and credential injection
//! - [`Endpoint`] - versioned endpoint URL construction
//! - [`ApiResponse`] - response interpretation (JSON and raw)
//! - [`Error`] and [`Result`] - error handling
//!
//! Everything here is a pure function of configuration and input; the
//! network side lives in the `evercam` crate.

mod credentials;
mod endpoint;
mod error;
mod params;
pub mod prelude;
mod response;
mod verb;

pub use credentials::Credentials;
pub use endpoint::Endpoint;
pub use error::{Error, Result};
pub use params::{ParamValue, Params};
pub use response::ApiResponse;
pub use verb::Verb;

// Re-export http crate type for verb interop
pub use http::StatusCode;
