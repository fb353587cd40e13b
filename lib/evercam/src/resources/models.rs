//! Camera model catalogue methods.

use serde_json::Value;

use evercam_core::{Params, Result};

use crate::client::Api;
use crate::route::Route;
use crate::transport::Transport;

impl<T: Transport> Api<T> {
    /// Fetch the full catalogue of supported camera models, grouped by
    /// vendor.
    pub async fn get_all_models(&self) -> Result<Value> {
        self.resource(Route::get("/models", "vendors"), Params::new())
            .await
    }

    /// Fetch the models supported for one vendor.
    pub async fn get_vendor_models(&self, vendor: &str) -> Result<Value> {
        self.resource(Route::get(format!("/models/{vendor}"), "vendors").first(), Params::new())
            .await
    }

    /// Fetch details of one model of one vendor.
    pub async fn get_vendor_model(&self, vendor: &str, model: &str) -> Result<Value> {
        self.resource(
            Route::get(format!("/models/{vendor}/{model}"), "models").first(),
            Params::new(),
        )
        .await
    }
}
