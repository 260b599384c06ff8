use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;

/// Builds the path and query for a recent-posts request.
///
/// `user_id` and `n` are forwarded verbatim: no encoding, no bounds check.
/// `None` means "all users globally".
pub fn recent_posts_target(user_id: Option<&str>, n: u32) -> String {
    match user_id {
        None => format!("/api/recent-posts?n={}", n),
        Some(id) => format!("/api/recent-posts?req_user_id={}&n={}", id, n),
    }
}

/// Fetches details about the `n` most recent posts for the given user id,
/// or for all users globally when `user_id` is `None`.
///
/// The body is returned as-is; its shape belongs to the backend. A non-2xx
/// status is logged and collapsed to `{}`. Transport and parse failures are
/// returned to the caller.
pub async fn load_recent_posts(
    client: &Client,
    base_url: &str,
    user_id: Option<&str>,
    n: u32,
) -> Result<Value> {
    let url = format!("{}{}", base_url, recent_posts_target(user_id, n));

    let res = client
        .get(&url)
        .send()
        .await
        .context("Failed to send recent-posts request")?;

    if !res.status().is_success() {
        let status = res.status();
        let text = res.text().await.unwrap_or_default();
        tracing::warn!("recent-posts returned error: status={}, body={}", status, text);
        // TODO: surface the status to the caller instead of swallowing it
        return Ok(Value::Object(serde_json::Map::new()));
    }

    let posts: Value = res
        .json()
        .await
        .context("Failed to parse recent-posts response")?;
    tracing::debug!("recent-posts fetched for user_id={:?} n={}", user_id, n);

    Ok(posts)
}
