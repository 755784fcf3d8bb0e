mod common;

use serde_json::{Value, json};

use common::{API_KEY, BASE_URL, create_link, make_server};

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_link_generates_code() {
    let (server, _store) = make_server();

    let link = create_link(&server, "https://example.com/some/long/path", None).await;

    let code = link["code"].as_str().unwrap();
    assert_eq!(code.len(), 10);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(link["customCode"], link["code"]);
    assert_eq!(link["shortUrl"], json!(format!("{BASE_URL}/{code}")));
    assert_eq!(link["originalUrl"], "https://example.com/some/long/path");
    assert_eq!(link["totalClicks"], 0);
    assert_eq!(link["createdBy"], "system");
    assert!(link["createdAt"].is_string());
    assert!(link["updatedAt"].is_string());
}

#[tokio::test]
async fn test_create_link_with_custom_code() {
    let (server, _store) = make_server();

    let link = create_link(&server, "https://example.com", Some("abc")).await;

    assert_eq!(link["code"], "abc");
    assert_eq!(link["customCode"], "abc");
    assert!(link["shortUrl"].as_str().unwrap().ends_with("/abc"));
}

#[tokio::test]
async fn test_create_link_trailing_slash_route() {
    let (server, _store) = make_server();

    let response = server
        .post("/api/urls/")
        .add_header("key", API_KEY)
        .json(&json!({ "originalUrl": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 201);
}

#[tokio::test]
async fn test_create_link_conflict_keeps_first() {
    let (server, _store) = make_server();
    create_link(&server, "https://first.example.com", Some("taken")).await;

    let response = server
        .post("/api/urls")
        .add_header("key", API_KEY)
        .json(&json!({ "originalUrl": "https://second.example.com", "customCode": "taken" }))
        .await;

    assert_eq!(response.status_code(), 409);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "code_conflict");
    assert_eq!(body["error"]["message"], "code: \"taken\" already in use.");

    let existing = server
        .get("/api/urls/taken")
        .add_header("key", API_KEY)
        .await
        .json::<Value>();
    assert_eq!(existing["originalUrl"], "https://first.example.com");
}

#[tokio::test]
async fn test_create_link_missing_url() {
    let (server, _store) = make_server();

    let response = server
        .post("/api/urls")
        .add_header("key", API_KEY)
        .json(&json!({ "customCode": "abc" }))
        .await;

    assert_eq!(response.status_code(), 400);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "missing_field");
    assert_eq!(body["error"]["details"]["field"], "originalUrl");
}

#[tokio::test]
async fn test_create_link_empty_url() {
    let (server, _store) = make_server();

    let response = server
        .post("/api/urls")
        .add_header("key", API_KEY)
        .json(&json!({ "originalUrl": "" }))
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.json::<Value>()["error"]["code"], "missing_field");
}

#[tokio::test]
async fn test_create_link_relative_url() {
    let (server, store) = make_server();

    let response = server
        .post("/api/urls")
        .add_header("key", API_KEY)
        .json(&json!({ "originalUrl": "not-a-url" }))
        .await;

    assert_eq!(response.status_code(), 400);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "relative_url");
    assert!(body["error"]["message"].as_str().unwrap().contains("relative"));

    use shorty::domain::repositories::LinkStore;
    assert!(store.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_link_rejects_control_characters() {
    let (server, store) = make_server();

    let response = server
        .post("/api/urls")
        .add_header("key", API_KEY)
        .json(&json!({ "originalUrl": "https://example.com/a\nb", "customCode": "ctl" }))
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.json::<Value>()["error"]["code"], "invalid_url");

    use shorty::domain::repositories::LinkStore;
    assert!(store.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_link_malformed_body() {
    let (server, _store) = make_server();

    let response = server
        .post("/api/urls")
        .add_header("key", API_KEY)
        .text("{\"originalUrl\": ")
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.json::<Value>()["error"]["code"], "malformed_input");
}

#[tokio::test]
async fn test_create_link_wrong_field_type() {
    let (server, _store) = make_server();

    let response = server
        .post("/api/urls")
        .add_header("key", API_KEY)
        .json(&json!({ "originalUrl": 42 }))
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.json::<Value>()["error"]["code"], "malformed_input");
}

#[tokio::test]
async fn test_create_link_unroutable_custom_code() {
    let (server, _store) = make_server();

    for code in ["has space", "a/b", "api"] {
        let response = server
            .post("/api/urls")
            .add_header("key", API_KEY)
            .json(&json!({ "originalUrl": "https://example.com", "customCode": code }))
            .await;

        assert_eq!(response.status_code(), 400, "code {code:?}");
        assert_eq!(response.json::<Value>()["error"]["code"], "invalid_code");
    }
}

// ─── READ ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_links_empty() {
    let (server, _store) = make_server();

    let response = server.get("/api/urls").add_header("key", API_KEY).await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.text(), "[]");
}

#[tokio::test]
async fn test_list_links() {
    let (server, _store) = make_server();
    create_link(&server, "https://one.example.com", Some("one")).await;
    create_link(&server, "https://two.example.com", Some("two")).await;

    for path in ["/api/urls", "/api/urls/"] {
        let response = server.get(path).add_header("key", API_KEY).await;

        assert_eq!(response.status_code(), 200);
        let links = response.json::<Vec<Value>>();
        assert_eq!(links.len(), 2);

        let mut codes: Vec<&str> = links.iter().map(|l| l["code"].as_str().unwrap()).collect();
        codes.sort();
        assert_eq!(codes, ["one", "two"]);
    }
}

#[tokio::test]
async fn test_get_link() {
    let (server, _store) = make_server();
    let created = create_link(&server, "https://example.com", Some("abc")).await;

    let response = server.get("/api/urls/abc").add_header("key", API_KEY).await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<Value>(), created);
}

#[tokio::test]
async fn test_get_with_empty_code_lists_links() {
    let (server, _store) = make_server();
    create_link(&server, "https://one.example.com", Some("one")).await;

    let response = server.get("/api/urls//").add_header("key", API_KEY).await;

    assert_eq!(response.status_code(), 200);
    let links = response.json::<Vec<Value>>();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0]["code"], "one");
}

#[tokio::test]
async fn test_get_link_ignores_tag_segment() {
    let (server, _store) = make_server();
    create_link(&server, "https://example.com", Some("abc")).await;

    let response = server
        .get("/api/urls/abc/newsletter")
        .add_header("key", API_KEY)
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<Value>()["code"], "abc");
}

#[tokio::test]
async fn test_get_link_not_found() {
    let (server, _store) = make_server();

    let response = server
        .get("/api/urls/missing")
        .add_header("key", API_KEY)
        .await;

    response.assert_status_not_found();
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "link_not_found");
    assert!(body["error"]["message"].as_str().unwrap().contains("missing"));
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_link_url() {
    let (server, _store) = make_server();
    let created = create_link(&server, "https://example.com/old", Some("abc")).await;

    let response = server
        .put("/api/urls/abc")
        .add_header("key", API_KEY)
        .json(&json!({ "originalUrl": "https://example.com/new" }))
        .await;

    assert_eq!(response.status_code(), 200);
    let updated = response.json::<Value>();
    assert_eq!(updated["originalUrl"], "https://example.com/new");
    assert_eq!(updated["code"], "abc");
    assert_eq!(updated["createdAt"], created["createdAt"]);
}

#[tokio::test]
async fn test_update_link_code() {
    let (server, _store) = make_server();
    create_link(&server, "https://example.com", Some("old-code")).await;

    let response = server
        .put("/api/urls/old-code")
        .add_header("key", API_KEY)
        .json(&json!({ "customCode": "new-code" }))
        .await;

    assert_eq!(response.status_code(), 200);
    let updated = response.json::<Value>();
    assert_eq!(updated["code"], "new-code");
    assert_eq!(updated["customCode"], "new-code");
    assert_eq!(updated["shortUrl"], json!(format!("{BASE_URL}/new-code")));

    server
        .get("/api/urls/old-code")
        .add_header("key", API_KEY)
        .await
        .assert_status_not_found();

    let moved = server
        .get("/api/urls/new-code")
        .add_header("key", API_KEY)
        .await;
    assert_eq!(moved.status_code(), 200);
}

#[tokio::test]
async fn test_update_link_code_conflict_changes_nothing() {
    let (server, _store) = make_server();
    create_link(&server, "https://one.example.com", Some("one")).await;
    create_link(&server, "https://two.example.com", Some("two")).await;

    let response = server
        .put("/api/urls/one")
        .add_header("key", API_KEY)
        .json(&json!({ "originalUrl": "https://changed.example.com", "customCode": "two" }))
        .await;

    assert_eq!(response.status_code(), 409);

    let one = server
        .get("/api/urls/one")
        .add_header("key", API_KEY)
        .await
        .json::<Value>();
    assert_eq!(one["originalUrl"], "https://one.example.com");
}

#[tokio::test]
async fn test_update_link_invalid_url() {
    let (server, _store) = make_server();
    create_link(&server, "https://example.com", Some("abc")).await;

    let response = server
        .put("/api/urls/abc")
        .add_header("key", API_KEY)
        .json(&json!({ "originalUrl": "/relative/path" }))
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.json::<Value>()["error"]["code"], "relative_url");
}

#[tokio::test]
async fn test_update_link_not_found() {
    let (server, _store) = make_server();

    let response = server
        .put("/api/urls/missing")
        .add_header("key", API_KEY)
        .json(&json!({ "originalUrl": "https://example.com" }))
        .await;

    response.assert_status_not_found();
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_link_returns_count() {
    let (server, _store) = make_server();
    create_link(&server, "https://example.com", Some("abc")).await;

    let response = server.delete("/api/urls/abc").add_header("key", API_KEY).await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.text(), "1");

    server
        .get("/api/urls/abc")
        .add_header("key", API_KEY)
        .await
        .assert_status_not_found();

    let again = server.delete("/api/urls/abc").add_header("key", API_KEY).await;
    assert_eq!(again.status_code(), 200);
    assert_eq!(again.text(), "0");
}

#[tokio::test]
async fn test_delete_unknown_link() {
    let (server, _store) = make_server();

    let response = server
        .delete("/api/urls/never-existed")
        .add_header("key", API_KEY)
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.text(), "0");
}
