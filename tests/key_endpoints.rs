//! Endpoint tests for translation-key listing, filtering, pagination, and
//! single-key lookup.

mod common;

use axum::http::StatusCode;

use common::{get, seed_fixtures, spawn_app};

#[tokio::test]
async fn list_returns_all_keys_with_nested_translations() {
    let app = spawn_app().await;
    seed_fixtures(&app.store).await;

    let (status, body) = get(&app.router, "/translation-keys").await;
    assert_eq!(status, StatusCode::OK);

    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(body["total"], 3);

    // Ordered by key name.
    assert_eq!(items[0]["key"], "button.save");
    assert_eq!(items[1]["key"], "greeting.goodbye");
    assert_eq!(items[2]["key"], "greeting.hello");

    // Translations ordered by language code.
    let translations = items[2]["translations"].as_array().unwrap();
    assert_eq!(translations.len(), 2);
    assert_eq!(translations[0]["language_code"], "en");
    assert_eq!(translations[0]["value"], "Hello");
    assert_eq!(translations[0]["updated_by"], "system");
    assert_eq!(translations[1]["language_code"], "es");
    assert_eq!(translations[1]["value"], "Hola");
}

#[tokio::test]
async fn list_total_is_independent_of_pagination_window() {
    let app = spawn_app().await;
    seed_fixtures(&app.store).await;

    let (status, body) = get(&app.router, "/translation-keys?limit=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["total"], 3);

    let (_, body) = get(&app.router, "/translation-keys?limit=1&offset=2").await;
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["total"], 3);
    assert_eq!(body["items"][0]["key"], "greeting.hello");

    let (_, body) = get(&app.router, "/translation-keys?limit=1&offset=3").await;
    assert_eq!(body["items"].as_array().unwrap().len(), 0);
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn search_is_case_insensitive_substring_match() {
    let app = spawn_app().await;
    seed_fixtures(&app.store).await;

    let (status, body) = get(&app.router, "/translation-keys?search=GREETING").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);

    let (_, body) = get(&app.router, "/translation-keys?search=ing.h").await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["key"], "greeting.hello");

    let (_, body) = get(&app.router, "/translation-keys?search=nomatch").await;
    assert_eq!(body["total"], 0);
    assert_eq!(body["items"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn category_filter_is_exact_match() {
    let app = spawn_app().await;
    seed_fixtures(&app.store).await;

    let (status, body) = get(&app.router, "/translation-keys?category=buttons").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["key"], "button.save");

    // Prefix of a category is not a match.
    let (_, body) = get(&app.router, "/translation-keys?category=button").await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn search_and_category_combine() {
    let app = spawn_app().await;
    seed_fixtures(&app.store).await;

    let (_, body) = get(
        &app.router,
        "/translation-keys?search=goodbye&category=greetings",
    )
    .await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["key"], "greeting.goodbye");

    let (_, body) = get(
        &app.router,
        "/translation-keys?search=goodbye&category=buttons",
    )
    .await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn pagination_parameters_are_validated() {
    let app = spawn_app().await;

    for uri in [
        "/translation-keys?limit=0",
        "/translation-keys?limit=1001",
        "/translation-keys?limit=abc",
        "/translation-keys?limit=1.5",
        "/translation-keys?offset=-1",
        "/translation-keys?offset=xyz",
    ] {
        let (status, body) = get(&app.router, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "expected 400 for {}", uri);
        assert!(body["error"].as_str().unwrap().contains("must"));
        assert_eq!(body["code"], 400);
    }

    // Boundary values are accepted.
    let (status, _) = get(&app.router, "/translation-keys?limit=1000&offset=0").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn get_key_by_id_returns_full_shape() {
    let app = spawn_app().await;
    let fixtures = seed_fixtures(&app.store).await;

    let uri = format!("/translation-keys/{}", fixtures.hello_key_id);
    let (status, body) = get(&app.router, &uri).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["id"], fixtures.hello_key_id.as_str());
    assert_eq!(body["key"], "greeting.hello");
    assert_eq!(body["category"], "greetings");
    assert_eq!(body["description"], "Greeting shown on the landing page");
    assert!(body["created_at"].is_string());
    assert!(body["updated_at"].is_string());
    assert_eq!(body["translations"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn get_unknown_key_is_not_found() {
    let app = spawn_app().await;
    seed_fixtures(&app.store).await;

    let (status, body) = get(&app.router, "/translation-keys/no-such-id").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("no-such-id"));
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn root_and_health_endpoints_respond() {
    let app = spawn_app().await;

    let (status, body) = get(&app.router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    assert!(body["version"].is_string());

    let (status, body) = get(&app.router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
    assert!(body["timestamp"].is_string());
    assert!(body.get("error").is_none());
}
