//! Prelude module for convenient imports.
//!
//! ```ignore
//! use evercam::prelude::*;
//! ```

pub use crate::{
    Api, ApiBuilder, ApiConfig, ApiResponse, Credentials, Error, LogOptions, NewUser, ParamValue,
    Params, PublicCameraFilter, Result, Transport, Verb,
};
