//! Camera share methods.

use serde_json::Value;

use evercam_core::{Params, Result, Verb};

use crate::client::Api;
use crate::route::Route;
use crate::transport::Transport;

impl<T: Transport> Api<T> {
    /// Fetch the shares for a camera.
    pub async fn get_camera_shares(&self, camera_id: &str) -> Result<Value> {
        self.resource(
            Route::get(format!("/cameras/{camera_id}/shares"), "shares"),
            Params::new(),
        )
        .await
    }

    /// Share a camera with a user, identified by email address. `rights` is
    /// a comma-separated list such as `"list,snapshot"`.
    pub async fn create_camera_share(
        &self,
        camera_id: &str,
        email: &str,
        rights: &str,
    ) -> Result<Value> {
        let params = Params::new().with("email", email).with("rights", rights);
        self.resource(
            Route::post(format!("/cameras/{camera_id}/shares"), "shares").first(),
            params,
        )
        .await
    }

    /// Change the rights on an existing share.
    pub async fn update_camera_share(
        &self,
        camera_id: &str,
        share_id: &str,
        rights: &str,
    ) -> Result<()> {
        let params = Params::new().with("rights", rights);
        self.fetch_json(
            &format!("/cameras/{camera_id}/shares/{share_id}"),
            Verb::Patch,
            params,
        )
        .await?;
        Ok(())
    }

    /// Revoke a share.
    pub async fn delete_camera_share(&self, camera_id: &str, share_id: &str) -> Result<()> {
        self.fetch_json(
            &format!("/cameras/{camera_id}/shares/{share_id}"),
            Verb::Delete,
            Params::new(),
        )
        .await?;
        Ok(())
    }
}
