//! User account methods.

use serde_json::Value;

use evercam_core::{Params, Result, Verb};

use crate::client::Api;
use crate::route::Route;
use crate::transport::Transport;

/// Details for creating a new user account.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// First name.
    pub firstname: String,
    /// Last name.
    pub lastname: String,
    /// Unique user name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Account password.
    pub password: String,
    /// Country code.
    pub country: String,
    /// Share request key to process while creating the account.
    pub share_request_key: Option<String>,
}

impl<T: Transport> Api<T> {
    /// Fetch details for a user, by user name or email address.
    pub async fn get_user(&self, user: &str) -> Result<Value> {
        self.resource(Route::get(format!("/users/{user}"), "users").first(), Params::new())
            .await
    }

    /// Fetch the cameras owned by a user, optionally including cameras
    /// shared with them.
    pub async fn get_user_cameras(&self, user: &str, include_shared: bool) -> Result<Value> {
        let params = Params::new().with("include_shared", include_shared);
        self.resource(Route::get(format!("/users/{user}/cameras"), "cameras"), params)
            .await
    }

    /// Create a new user account and return its details.
    pub async fn create_user(&self, details: NewUser) -> Result<Value> {
        let params = Params::new()
            .with("firstname", details.firstname)
            .with("lastname", details.lastname)
            .with("username", details.username)
            .with("email", details.email)
            .with("password", details.password)
            .with("country", details.country)
            .with_opt("share_request_key", details.share_request_key);
        self.resource(Route::post("/users", "users").first(), params)
            .await
    }

    /// Update details for a user. Recognised keys are `firstname`,
    /// `lastname`, `username`, `country`, and `email`. A call with nothing
    /// to update is skipped entirely.
    pub async fn update_user(&self, user: &str, values: Params) -> Result<()> {
        if values.is_empty() {
            return Ok(());
        }
        self.fetch_json(&format!("/users/{user}"), Verb::Patch, values)
            .await?;
        Ok(())
    }

    /// Delete a user account and everything associated with it.
    pub async fn delete_user(&self, user: &str) -> Result<()> {
        self.fetch_json(&format!("/users/{user}"), Verb::Delete, Params::new())
            .await?;
        Ok(())
    }
}
