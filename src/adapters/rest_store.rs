//! Row-API (PostgREST) remote data store adapter.
//!
//! Implements [`RemoteStore`] over the hosted backend's REST interface using
//! reqwest. Tables and columns match the app's schema:
//!
//! | Query | Request |
//! |-------|---------|
//! | profile | `GET /profiles?id=eq.{user}` |
//! | own posts | `GET /posts?user_id=eq.{user}&order=inserted_at.desc` |
//! | like set | `GET /likes?select=likedposts&user_id=eq.{user}` |
//! | posts by id | `GET /posts?id=in.(a,b)&order=inserted_at.desc` |
//! | recent posts | `GET /posts?order=inserted_at.desc` |

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::SyncConfig;
use crate::error::{classify_reqwest_error, StoreError};
use crate::models::{LikeSet, Post, PostId, Profile, UserId};
use crate::traits::RemoteStore;

const ORDER_RECENT_FIRST: &str = "inserted_at.desc";

/// HTTP implementation of the remote data store.
#[derive(Debug, Clone)]
pub struct RestStore {
    client: reqwest::Client,
    rest_url: String,
    api_key: Option<String>,
    bearer: Option<String>,
}

impl RestStore {
    /// Create a store from configuration, applying its request timeout.
    pub fn new(config: &SyncConfig) -> Result<Self, StoreError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| classify_reqwest_error(&e))?;
        Ok(Self::with_client(client, config))
    }

    /// Create a store with a custom reqwest::Client.
    pub fn with_client(client: reqwest::Client, config: &SyncConfig) -> Self {
        Self {
            client,
            rest_url: config.rest_url(),
            api_key: config.api_key.clone(),
            bearer: config.bearer_token().map(str::to_string),
        }
    }

    pub fn rest_url(&self) -> &str {
        &self.rest_url
    }

    /// Run a select against `table` and decode every returned row.
    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, StoreError> {
        let url = format!("{}/{}", self.rest_url, table);
        let mut builder = self
            .client
            .get(&url)
            .query(query)
            .header("Accept", "application/json");
        if let Some(key) = &self.api_key {
            builder = builder.header("apikey", key);
        }
        if let Some(token) = &self.bearer {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|e| classify_reqwest_error(&e))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(StoreError::Status { status, message });
        }

        let body = response.bytes().await.map_err(|e| classify_reqwest_error(&e))?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// `in.(a,b,c)` filter value.
fn in_filter(ids: &[PostId]) -> String {
    let joined = ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("in.({})", joined)
}

fn eq_filter(user_id: UserId) -> String {
    format!("eq.{}", user_id)
}

#[async_trait]
impl RemoteStore for RestStore {
    async fn get_profile(&self, user_id: UserId) -> Result<Profile, StoreError> {
        let rows: Vec<Profile> = self
            .select(
                "profiles",
                &[("select", "*".to_string()), ("id", eq_filter(user_id))],
            )
            .await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::not_found(format!("profile {}", user_id)))
    }

    async fn list_posts_by_owner(&self, user_id: UserId) -> Result<Vec<Post>, StoreError> {
        self.select(
            "posts",
            &[
                ("select", "*".to_string()),
                ("user_id", eq_filter(user_id)),
                ("order", ORDER_RECENT_FIRST.to_string()),
            ],
        )
        .await
    }

    async fn get_like_set(&self, user_id: UserId) -> Result<LikeSet, StoreError> {
        // One row per user; only the first is meaningful
        let rows: Vec<LikeSet> = self
            .select(
                "likes",
                &[
                    ("select", "likedposts".to_string()),
                    ("user_id", eq_filter(user_id)),
                ],
            )
            .await?;
        Ok(rows.into_iter().next().unwrap_or_default())
    }

    async fn list_posts_by_ids(&self, ids: &[PostId]) -> Result<Vec<Post>, StoreError> {
        self.select(
            "posts",
            &[
                ("select", "*".to_string()),
                ("id", in_filter(ids)),
                ("order", ORDER_RECENT_FIRST.to_string()),
            ],
        )
        .await
    }

    async fn list_recent_posts(&self) -> Result<Vec<Post>, StoreError> {
        self.select(
            "posts",
            &[
                ("select", "*".to_string()),
                ("order", ORDER_RECENT_FIRST.to_string()),
            ],
        )
        .await
    }
}
