//! Public camera discovery.

use serde_json::Value;

use evercam_core::{Params, Result};

use crate::client::Api;
use crate::route::Route;
use crate::transport::Transport;

/// Search criteria for public camera discovery. Unset fields are omitted
/// from the request.
#[derive(Debug, Clone, Default)]
pub struct PublicCameraFilter {
    /// Match identifier fragments case-sensitively.
    pub case_sensitive: Option<bool>,
    /// Only cameras whose id starts with this fragment.
    pub id_starts_with: Option<String>,
    /// Only cameras whose id ends with this fragment.
    pub id_ends_with: Option<String>,
    /// Only cameras whose id contains this fragment.
    pub id_contains: Option<String>,
    /// Skip this many results.
    pub offset: Option<u32>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
}

impl<T: Transport> Api<T> {
    /// Search the publicly discoverable cameras.
    ///
    /// The returned object carries the matching cameras under `"cameras"`
    /// and the page count under `"pages"`.
    pub async fn get_public_cameras(
        &self,
        filter: PublicCameraFilter,
        thumbnail: bool,
    ) -> Result<Value> {
        let params = Params::new()
            .with_opt("case_sensitive", filter.case_sensitive)
            .with_opt("id_starts_with", filter.id_starts_with)
            .with_opt("id_ends_with", filter.id_ends_with)
            .with_opt("id_contains", filter.id_contains)
            .with_opt("offset", filter.offset)
            .with_opt("limit", filter.limit)
            .with("thumbnail", thumbnail);
        self.resource(Route::get("/public/cameras", "cameras").paged(), params)
            .await
    }
}
