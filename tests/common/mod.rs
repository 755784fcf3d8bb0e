#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{Value, json};
use shorty::application::services::LinkSettings;
use shorty::domain::repositories::LinkStore;
use shorty::infrastructure::persistence::InMemoryLinkStore;
use shorty::routes::app_router;
use shorty::state::AppState;
use std::sync::Arc;
use std::time::Duration;

pub const API_KEY: &str = "test-api-key";
pub const BASE_URL: &str = "https://ospk.org";
pub const HOME_URL: &str = "https://www.operationspark.org";

pub fn test_settings() -> LinkSettings {
    LinkSettings {
        base_url: BASE_URL.to_string(),
        created_by: "system".to_string(),
        store_timeout: Duration::from_secs(2),
    }
}

pub fn create_test_state(store: Arc<dyn LinkStore>) -> AppState {
    AppState::new(store, test_settings(), API_KEY, HOME_URL)
}

/// Full application router over a fresh in-memory store.
///
/// The store is returned as well so tests can inspect it directly.
pub fn make_server() -> (TestServer, Arc<InMemoryLinkStore>) {
    let store = Arc::new(InMemoryLinkStore::new());
    let state = create_test_state(store.clone());
    let server = TestServer::new(app_router(state)).unwrap();
    (server, store)
}

/// Creates a link through the API and returns its JSON.
pub async fn create_link(server: &TestServer, original_url: &str, custom_code: Option<&str>) -> Value {
    let mut body = json!({ "originalUrl": original_url });
    if let Some(code) = custom_code {
        body["customCode"] = json!(code);
    }

    let response = server
        .post("/api/urls")
        .add_header("key", API_KEY)
        .json(&body)
        .await;

    assert_eq!(response.status_code(), 201, "{}", response.text());
    response.json::<Value>()
}
