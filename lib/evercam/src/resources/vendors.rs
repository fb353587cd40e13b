//! Camera vendor methods.

use serde_json::Value;

use evercam_core::{Params, Result};

use crate::client::Api;
use crate::route::Route;
use crate::transport::Transport;

impl<T: Transport> Api<T> {
    /// Fetch all known camera vendors.
    pub async fn get_all_vendors(&self) -> Result<Value> {
        self.resource(Route::get("/vendors", "vendors"), Params::new())
            .await
    }

    /// Fetch the vendors matching a MAC address prefix.
    pub async fn get_vendors_by_mac(&self, mac: &str) -> Result<Value> {
        self.resource(Route::get(format!("/vendors/{mac}"), "vendors"), Params::new())
            .await
    }
}
