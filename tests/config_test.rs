//! Environment-driven configuration. These tests mutate process env, so they
//! run serially.

use std::time::Duration;

use nusell::adapters::static_session::ENV_USER_ID;
use nusell::adapters::StaticSession;
use nusell::config::{
    ConfigError, SyncConfig, ENV_ACCESS_TOKEN, ENV_ANON_KEY, ENV_TIMEOUT_SECS, ENV_URL,
};
use nusell::traits::SessionProvider;
use serial_test::serial;
use uuid::Uuid;

fn clear_env() {
    for name in [
        ENV_URL,
        ENV_ANON_KEY,
        ENV_ACCESS_TOKEN,
        ENV_TIMEOUT_SECS,
        ENV_USER_ID,
    ] {
        std::env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_url_is_required() {
    clear_env();
    assert_eq!(SyncConfig::from_env(), Err(ConfigError::Missing(ENV_URL)));

    std::env::set_var(ENV_URL, "   ");
    assert_eq!(SyncConfig::from_env(), Err(ConfigError::Missing(ENV_URL)));
    clear_env();
}

#[test]
#[serial]
fn test_full_env() {
    clear_env();
    std::env::set_var(ENV_URL, "https://project.example.co/");
    std::env::set_var(ENV_ANON_KEY, "anon");
    std::env::set_var(ENV_ACCESS_TOKEN, "user");
    std::env::set_var(ENV_TIMEOUT_SECS, "15");

    let config = SyncConfig::from_env().unwrap();
    assert_eq!(config.rest_url(), "https://project.example.co/rest/v1");
    assert_eq!(config.api_key.as_deref(), Some("anon"));
    assert_eq!(config.bearer_token(), Some("user"));
    assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
    clear_env();
}

#[test]
#[serial]
fn test_no_timeout_by_default() {
    clear_env();
    std::env::set_var(ENV_URL, "https://project.example.co");

    let config = SyncConfig::from_env().unwrap();
    assert_eq!(config.request_timeout, None);
    assert_eq!(config.bearer_token(), None);
    clear_env();
}

#[test]
#[serial]
fn test_invalid_timeout() {
    clear_env();
    std::env::set_var(ENV_URL, "https://project.example.co");
    std::env::set_var(ENV_TIMEOUT_SECS, "soon");

    assert_eq!(
        SyncConfig::from_env(),
        Err(ConfigError::Invalid {
            name: ENV_TIMEOUT_SECS,
            value: "soon".to_string(),
        })
    );
    clear_env();
}

#[test]
#[serial]
fn test_session_from_env() {
    clear_env();
    assert_eq!(StaticSession::from_env().current_user_id(), None);

    let user = Uuid::new_v4();
    std::env::set_var(ENV_USER_ID, user.to_string());
    assert_eq!(StaticSession::from_env().current_user_id(), Some(user));

    std::env::set_var(ENV_USER_ID, "not-a-uuid");
    assert_eq!(StaticSession::from_env().current_user_id(), None);
    clear_env();
}
