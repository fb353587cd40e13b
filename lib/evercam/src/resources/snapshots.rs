//! Snapshot methods.

use bytes::Bytes;
use serde_json::Value;

use evercam_core::{Params, Result, Verb};

use crate::client::Api;
use crate::route::Route;
use crate::transport::Transport;

impl<T: Transport> Api<T> {
    /// Fetch the stored snapshots for a camera.
    pub async fn get_snapshots(&self, camera_id: &str) -> Result<Value> {
        self.resource(
            Route::get(format!("/cameras/{camera_id}/recordings/snapshots"), "snapshots"),
            Params::new(),
        )
        .await
    }

    /// Fetch the latest stored snapshot for a camera. With `with_data` the
    /// image is included base64-encoded.
    pub async fn get_latest_snapshot(&self, camera_id: &str, with_data: bool) -> Result<Value> {
        let params = Params::new().with("with_data", with_data);
        self.resource(
            Route::get(
                format!("/cameras/{camera_id}/recordings/snapshots/latest"),
                "snapshots",
            )
            .first(),
            params,
        )
        .await
    }

    /// Take and store a snapshot from the camera's live feed.
    pub async fn store_snapshot(&self, camera_id: &str, notes: Option<&str>) -> Result<Value> {
        let params = Params::new().with_opt("notes", notes);
        self.resource(
            Route::post(format!("/cameras/{camera_id}/recordings/snapshots"), "snapshots")
                .first(),
            params,
        )
        .await
    }

    /// Fetch the current live image for a camera as raw JPEG bytes.
    ///
    /// The `.jpg` path suffix keeps the endpoint builder from appending
    /// `.json`, and the body comes back uninterpreted.
    pub async fn get_live_image(&self, camera_id: &str) -> Result<Bytes> {
        self.fetch_raw(
            &format!("/cameras/{camera_id}/live/snapshot.jpg"),
            Verb::Get,
            Params::new(),
        )
        .await
    }
}
