//! Camera methods.

use serde_json::Value;

use evercam_core::{Params, Result, Verb};

use crate::client::Api;
use crate::route::Route;
use crate::transport::Transport;

impl<T: Transport> Api<T> {
    /// Fetch details for a camera.
    pub async fn get_camera(&self, camera_id: &str, thumbnail: bool) -> Result<Value> {
        let params = Params::new().with("thumbnail", thumbnail);
        self.resource(Route::get(format!("/cameras/{camera_id}"), "cameras").first(), params)
            .await
    }

    /// Register a new camera and return its details.
    ///
    /// `values` carries the optional connection details (hosts, ports,
    /// credentials, vendor, model) the API recognises for camera creation.
    pub async fn create_camera(
        &self,
        camera_id: &str,
        name: &str,
        is_public: bool,
        values: Params,
    ) -> Result<Value> {
        let params = values
            .with("id", camera_id)
            .with("name", name)
            .with("is_public", is_public);
        self.resource(Route::post("/cameras", "cameras").first(), params)
            .await
    }

    /// Update details for a camera. A call with nothing to update is
    /// skipped entirely.
    pub async fn update_camera(&self, camera_id: &str, values: Params) -> Result<()> {
        if values.is_empty() {
            return Ok(());
        }
        self.fetch_json(&format!("/cameras/{camera_id}"), Verb::Patch, values)
            .await?;
        Ok(())
    }

    /// Remove a camera and all data associated with it.
    pub async fn delete_camera(&self, camera_id: &str) -> Result<()> {
        self.fetch_json(&format!("/cameras/{camera_id}"), Verb::Delete, Params::new())
            .await?;
        Ok(())
    }
}
