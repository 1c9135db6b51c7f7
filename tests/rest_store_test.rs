//! REST data store against a mock row API.

use nusell::adapters::RestStore;
use nusell::config::SyncConfig;
use nusell::error::StoreError;
use nusell::traits::RemoteStore;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn store_for(server: &MockServer) -> RestStore {
    let config = SyncConfig::new(server.uri()).with_api_key("anon-key");
    RestStore::new(&config).unwrap()
}

fn post_row(id: i64, owner: Uuid, inserted_at: &str) -> serde_json::Value {
    json!({
        "id": id,
        "user_id": owner,
        "title": format!("listing {}", id),
        "price": 12.5,
        "image_url": "https://cdn.example/x.png",
        "caption": null,
        "inserted_at": inserted_at
    })
}

#[tokio::test]
async fn test_get_profile_sends_filter_and_keys() {
    let server = MockServer::start().await;
    let user = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .and(query_param("id", format!("eq.{}", user)))
        .and(header("apikey", "anon-key"))
        .and(header("Authorization", "Bearer anon-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": user,
            "firstName": "Lin",
            "lastName": "Us",
            "username": "linus",
            "avatar": null
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let profile = store_for(&server).get_profile(user).await.unwrap();
    assert_eq!(profile.user_id, user);
    assert_eq!(profile.display_name(), "Lin Us");
}

#[tokio::test]
async fn test_get_profile_zero_rows_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let err = store_for(&server)
        .get_profile(Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
}

#[tokio::test]
async fn test_posts_by_owner_orders_recent_first() {
    let server = MockServer::start().await;
    let user = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/rest/v1/posts"))
        .and(query_param("user_id", format!("eq.{}", user)))
        .and(query_param("order", "inserted_at.desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            post_row(2, user, "2024-06-02T00:00:00Z"),
            post_row(1, user, "2024-06-01T00:00:00Z"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let posts = store_for(&server).list_posts_by_owner(user).await.unwrap();
    let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[tokio::test]
async fn test_like_set_row_and_missing_row() {
    let server = MockServer::start().await;
    let liker = Uuid::new_v4();
    let stranger = Uuid::new_v4();

    Mock::given(path("/rest/v1/likes"))
        .and(query_param("select", "likedposts"))
        .and(query_param("user_id", format!("eq.{}", liker)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{ "likedposts": [3, 1] }])),
        )
        .mount(&server)
        .await;
    Mock::given(path("/rest/v1/likes"))
        .and(query_param("user_id", format!("eq.{}", stranger)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let store = store_for(&server);
    assert_eq!(store.get_like_set(liker).await.unwrap().post_ids, vec![3, 1]);
    assert!(store.get_like_set(stranger).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_posts_by_ids_uses_in_filter() {
    let server = MockServer::start().await;
    let owner = Uuid::new_v4();

    Mock::given(path("/rest/v1/posts"))
        .and(query_param("id", "in.(3,1)"))
        .and(query_param("order", "inserted_at.desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            post_row(3, owner, "2024-06-03T00:00:00Z"),
            post_row(1, owner, "2024-06-01T00:00:00Z"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let posts = store_for(&server).list_posts_by_ids(&[3, 1]).await.unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, 3);
}

#[tokio::test]
async fn test_server_error_maps_to_status() {
    let server = MockServer::start().await;
    Mock::given(path("/rest/v1/posts"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let err = store_for(&server).list_recent_posts().await.unwrap_err();
    match err {
        StoreError::Status { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "upstream down");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(path("/rest/v1/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = store_for(&server).list_recent_posts().await.unwrap_err();
    assert!(matches!(err, StoreError::InvalidResponse { .. }));
}

#[tokio::test]
async fn test_access_token_overrides_bearer() {
    let server = MockServer::start().await;
    Mock::given(path("/rest/v1/posts"))
        .and(header("apikey", "anon-key"))
        .and(header("Authorization", "Bearer user-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config = SyncConfig::new(server.uri())
        .with_api_key("anon-key")
        .with_access_token("user-token");
    let store = RestStore::new(&config).unwrap();
    assert!(store.list_recent_posts().await.unwrap().is_empty());
}
