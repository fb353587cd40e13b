//! Camera activity log methods.

use serde_json::Value;

use evercam_core::{Params, Result};

use crate::client::Api;
use crate::route::Route;
use crate::transport::Transport;

/// Options narrowing an activity log query. Unset fields are omitted from
/// the request.
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Only entries at or after this Unix timestamp.
    pub from: Option<i64>,
    /// Only entries at or before this Unix timestamp.
    pub to: Option<i64>,
    /// Maximum number of entries per page.
    pub limit: Option<u32>,
    /// Page to fetch.
    pub page: Option<u32>,
    /// Restrict to these entry types, e.g. `"online"`, `"offline"`.
    pub types: Vec<String>,
    /// Include the object payload of each entry.
    pub objects: Option<bool>,
}

impl<T: Transport> Api<T> {
    /// Fetch activity log entries for a camera.
    pub async fn get_logs(&self, camera_id: &str, options: LogOptions) -> Result<Value> {
        let mut params = Params::new()
            .with_opt("from", options.from)
            .with_opt("to", options.to)
            .with_opt("limit", options.limit)
            .with_opt("page", options.page)
            .with_opt("objects", options.objects);
        if !options.types.is_empty() {
            params.insert("types", options.types.join(","));
        }
        self.resource(Route::get(format!("/cameras/{camera_id}/logs"), "logs"), params)
            .await
    }
}
