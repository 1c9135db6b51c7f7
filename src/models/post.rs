use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    deserialize_null_default, deserialize_nullable_string, deserialize_price, PostId, UserId,
};

/// A published listing.
///
/// The sync core never mutates posts; it only reads and orders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    /// Author of the listing (column is named `user_id`)
    #[serde(rename = "user_id")]
    pub owner_id: UserId,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub title: String,
    /// Asking price; the backend may send it as a number or a numeric string
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: f64,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub image_url: String,
    #[serde(default)]
    pub caption: Option<String>,
    /// Ordering key for every feed
    pub inserted_at: DateTime<Utc>,
}

impl Post {
    /// Price formatted the way listings display it.
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// Sort posts most recent first.
///
/// Backends are asked to order by `inserted_at desc` already; this keeps the
/// contract when an adapter cannot.
pub fn sort_recent_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.inserted_at.cmp(&a.inserted_at));
}

/// The set of post ids a user has liked.
///
/// Stored as a single row per user holding an array column, so the order of
/// ids carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeSet {
    #[serde(
        rename = "likedposts",
        default,
        deserialize_with = "deserialize_null_default"
    )]
    pub post_ids: Vec<PostId>,
}

impl LikeSet {
    pub fn new(post_ids: Vec<PostId>) -> Self {
        Self { post_ids }
    }

    pub fn is_empty(&self) -> bool {
        self.post_ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.post_ids.len()
    }

    pub fn contains(&self, id: PostId) -> bool {
        self.post_ids.contains(&id)
    }
}
