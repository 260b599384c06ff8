use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;

use crate::api;

/// HTTP client bound to one forum backend.
///
/// Keeps a cookie store so the session cookie issued at login is replayed on
/// every request, matching the browser client's same-origin credentials.
#[derive(Clone, Debug)]
pub struct RecentPostsClient {
    client: Client,
    base_url: String,
}

fn normalize_base_url(mut host: String) -> String {
    if !host.starts_with("http://") && !host.starts_with("https://") {
        host = format!("https://{}", host);
    }
    // Remove trailing slash if present
    if host.ends_with('/') {
        host.pop();
    }
    host
}

impl RecentPostsClient {
    pub fn new(host: String) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: normalize_base_url(host),
        })
    }

    /// Returns details about the `n` most recent posts for the given user id,
    /// or for all users globally when `user_id` is `None`.
    pub async fn recent_posts(&self, user_id: Option<&str>, n: u32) -> Result<Value> {
        api::load_recent_posts(&self.client, &self.base_url, user_id, n).await
    }
}
