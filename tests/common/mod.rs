//! Common test utilities for integration tests.
//!
//! Fixtures for posts and profiles plus a builder that wires a
//! [`ProfileScreen`] to in-memory collaborators.
//!
//! # Example
//!
//! ```ignore
//! use common::{post_at, TestScreen};
//!
//! let t = TestScreen::signed_in();
//! t.store.insert_post(post_at(1, t.user_id, 10));
//! let mut screen = t.screen();
//! ```

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use nusell::adapters::mock::{MockSession, MockStore};
use nusell::app::{HomeScreen, ProfileScreen, ScreenEvent};
use nusell::models::{Post, PostId, Profile, UserId};
use uuid::Uuid;

/// A post owned by `owner`, inserted `secs` seconds after the epoch.
pub fn post_at(id: PostId, owner: UserId, secs: i64) -> Post {
    Post {
        id,
        owner_id: owner,
        title: format!("listing {}", id),
        price: 5.0 * id as f64,
        image_url: format!("https://cdn.example/{}.png", id),
        caption: None,
        inserted_at: Utc.timestamp_opt(secs, 0).unwrap(),
    }
}

pub fn test_profile(user_id: UserId) -> Profile {
    Profile {
        user_id,
        first_name: "Lin".to_string(),
        last_name: "Us".to_string(),
        username: "linus".to_string(),
        avatar_url: Some("https://cdn.example/avatar.png".to_string()),
    }
}

pub fn ids(posts: &[Post]) -> Vec<PostId> {
    posts.iter().map(|p| p.id).collect()
}

pub fn error_count(events: &[ScreenEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, ScreenEvent::Error(_)))
        .count()
}

/// In-memory collaborators for one screen under test.
pub struct TestScreen {
    pub user_id: UserId,
    pub store: MockStore,
    pub session: MockSession,
}

impl TestScreen {
    /// A signed-in user with a profile and no posts.
    pub fn signed_in() -> Self {
        let user_id = Uuid::new_v4();
        let store = MockStore::new();
        store.insert_profile(test_profile(user_id));
        Self {
            user_id,
            store,
            session: MockSession::signed_in(user_id),
        }
    }

    /// Two own posts (1 older, 2 newer), a post by someone else (3, newest)
    /// and a like set of `[3, 1]`.
    pub fn with_catalogue() -> Self {
        let t = Self::signed_in();
        let other = Uuid::new_v4();
        t.store.insert_post(post_at(1, t.user_id, 10));
        t.store.insert_post(post_at(2, t.user_id, 15));
        t.store.insert_post(post_at(3, other, 20));
        t.store.set_likes(t.user_id, vec![3, 1]);
        t
    }

    pub fn screen(&self) -> ProfileScreen {
        ProfileScreen::new(Arc::new(self.store.clone()), Arc::new(self.session.clone()))
    }

    pub fn home(&self) -> HomeScreen {
        HomeScreen::new(Arc::new(self.store.clone()))
    }

    /// A mounted screen that has finished its initial loads.
    pub async fn mounted(&self) -> ProfileScreen {
        let mut screen = self.screen();
        screen.on_mounted().unwrap();
        screen.settle().await;
        screen
    }
}
