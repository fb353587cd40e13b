//! Prelude module for convenient imports.
//!
//! ```ignore
//! use evercam_core::prelude::*;
//! ```

pub use crate::{ApiResponse, Credentials, Endpoint, Error, ParamValue, Params, Result, Verb};
