//! Webhook methods.

use serde_json::Value;

use evercam_core::{Params, Result, Verb};

use crate::client::Api;
use crate::route::Route;
use crate::transport::Transport;

impl<T: Transport> Api<T> {
    /// Fetch all webhooks registered for a camera.
    pub async fn get_webhooks(&self, camera_id: &str) -> Result<Value> {
        let params = Params::new().with("id", camera_id);
        self.resource(Route::get("/webhooks", "webhooks"), params)
            .await
    }

    /// Fetch details for one webhook.
    pub async fn get_webhook(&self, webhook_id: &str) -> Result<Value> {
        self.resource(
            Route::get(format!("/webhooks/{webhook_id}"), "webhooks").first(),
            Params::new(),
        )
        .await
    }

    /// Register a webhook that will receive event data for a camera.
    pub async fn create_webhook(
        &self,
        camera_id: &str,
        url: &str,
        user_id: &str,
    ) -> Result<Value> {
        let params = Params::new()
            .with("id", camera_id)
            .with("url", url)
            .with("user_id", user_id);
        self.resource(Route::post("/webhooks", "webhooks").first(), params)
            .await
    }

    /// Point a webhook at a different URL. A `None` url skips the call.
    pub async fn update_webhook(&self, webhook_id: &str, url: Option<&str>) -> Result<()> {
        let Some(url) = url else {
            return Ok(());
        };
        let params = Params::new().with("url", url);
        self.fetch_json(&format!("/webhooks/{webhook_id}"), Verb::Patch, params)
            .await?;
        Ok(())
    }

    /// Remove a webhook, returning its last known details.
    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<Value> {
        self.resource(
            Route::delete(format!("/webhooks/{webhook_id}"), "webhooks").first(),
            Params::new(),
        )
        .await
    }
}
