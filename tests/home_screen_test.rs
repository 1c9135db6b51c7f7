//! Home feed: every listing, newest first, with pull-to-refresh.

mod common;

use common::{error_count, ids, post_at, TestScreen};
use nusell::adapters::mock::QueryKind;
use nusell::app::ScreenEvent;
use nusell::error::StoreError;
use uuid::Uuid;

#[tokio::test]
async fn test_home_lists_everyone_newest_first() {
    let t = TestScreen::with_catalogue();
    let mut home = t.home();
    home.on_mounted();
    let events = home.settle().await;

    assert_eq!(events, vec![ScreenEvent::HomeUpdated { count: 3 }]);
    assert_eq!(ids(home.view().posts), vec![3, 2, 1]);
    assert_eq!(t.store.call_count(QueryKind::RecentPosts), 1);
}

#[tokio::test]
async fn test_home_refresh_picks_up_new_listing() {
    let t = TestScreen::with_catalogue();
    let mut home = t.home();
    home.on_mounted();
    home.settle().await;

    t.store.insert_post(post_at(4, Uuid::new_v4(), 30));
    assert!(home.on_refresh_requested());
    let events = home.settle().await;

    assert!(events.contains(&ScreenEvent::RefreshFinished));
    assert_eq!(ids(home.view().posts), vec![4, 3, 2, 1]);
    assert!(!home.view().refreshing);
}

#[tokio::test]
async fn test_home_failure_keeps_previous_list() {
    let t = TestScreen::with_catalogue();
    let mut home = t.home();
    home.on_mounted();
    home.settle().await;

    t.store
        .fail(QueryKind::RecentPosts, StoreError::transport("offline"));
    home.on_refresh_requested();
    let events = home.settle().await;

    assert_eq!(error_count(&events), 1);
    assert_eq!(ids(home.view().posts), vec![3, 2, 1]);
    assert!(home.view().error.is_some());
}
