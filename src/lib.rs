//! Client helper for the forum backend's recent-posts endpoint.
//!
//! One GET per call, optionally scoped to a user, body returned as opaque
//! JSON. Session cookies set by the backend are kept and replayed.

pub mod api;
pub mod client;

pub use client::RecentPostsClient;
