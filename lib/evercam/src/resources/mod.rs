//! Typed resource methods.
//!
//! Each module contributes an `impl` block on [`crate::Api`] for one
//! resource family. Every method shapes its parameters, picks a row of the
//! route table, and delegates to the generic pipeline; none of them carry
//! logic of their own beyond that.

mod cameras;
mod logs;
mod models;
mod public;
mod shares;
mod snapmails;
mod snapshots;
mod users;
mod vendors;
mod webhooks;

pub use logs::LogOptions;
pub use public::PublicCameraFilter;
pub use users::NewUser;
