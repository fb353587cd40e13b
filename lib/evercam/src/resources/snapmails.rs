//! Snapmail methods.

use serde_json::Value;

use evercam_core::{Params, Result};

use crate::client::Api;
use crate::route::Route;
use crate::transport::Transport;

impl<T: Transport> Api<T> {
    /// Fetch the snapmail schedules belonging to the authenticated user.
    pub async fn get_snapmails(&self) -> Result<Value> {
        self.resource(Route::get("/snapmails", "snapmails"), Params::new())
            .await
    }
}
