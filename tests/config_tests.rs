//! Configuration tests.
//!
//! These go through `Config::from_vars` so they never touch the process
//! environment, which other tests may be reading concurrently.

use booksflow_backend::config::{Config, CorsConfig, APP_URL_ENV, DEFAULT_APP_URL};
use booksflow_backend::state::AppState;

#[test]
fn test_app_url_env_name() {
    assert_eq!(APP_URL_ENV, "NEXT_PUBLIC_APP_URL");
}

#[test]
fn test_unset_or_empty_origin_falls_back() {
    for value in [None, Some(String::new())] {
        let config = Config::from_vars(None, None, value).unwrap();
        assert_eq!(config.cors.allowed_origins, vec![DEFAULT_APP_URL.to_string()]);
    }
}

#[test]
fn test_non_empty_origin_is_single_entry() {
    let config = Config::from_vars(None, None, Some("https://books.example".to_string())).unwrap();
    assert_eq!(config.cors.allowed_origins, vec!["https://books.example".to_string()]);
}

#[test]
fn test_allowed_origins_never_empty() {
    for value in [None, Some(String::new()), Some("x".to_string())] {
        assert_eq!(CorsConfig::from_app_url(value).allowed_origins.len(), 1);
    }
}

#[test]
fn test_config_serializes_for_inspection() {
    let config = Config::from_vars(None, Some("9000".to_string()), None).unwrap();
    let value = serde_json::to_value(&config).unwrap();

    assert_eq!(value["server"]["port"], 9000);
    assert_eq!(value["cors"]["allowed_origins"][0], "http://localhost:3000");
}

#[test]
fn test_state_carries_configured_origins() {
    let cors = CorsConfig::from_app_url(Some("https://books.example".to_string()));
    let state = AppState::new(cors);

    assert_eq!(state.allowed_origins, vec!["https://books.example".to_string()]);
    assert_eq!(state.name, "BooksFlowAI Backend");
}
