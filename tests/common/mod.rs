//! Shared helpers for endpoint tests: an in-memory store, a seeded set of
//! keys, and request plumbing against the router.
#![allow(dead_code)] // not every test binary uses every helper

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use locman::http::server::build_router;
use locman::http::{AppState, HttpServerConfig};
use locman::store::{NewTranslationKey, TranslationStore};

pub struct TestApp {
    pub router: Router,
    pub store: TranslationStore,
}

/// Router plus in-memory store with the schema applied, no data.
pub async fn spawn_app() -> TestApp {
    let store = TranslationStore::in_memory().await.unwrap();
    let router = build_router(&HttpServerConfig::default(), AppState::new(store.clone()));
    TestApp { router, store }
}

/// Ids of the seeded fixture rows.
pub struct Fixtures {
    pub hello_key_id: String,
    pub hello_en_id: String,
    pub hello_es_id: String,
    pub goodbye_en_id: String,
    pub goodbye_es_id: String,
    pub save_en_id: String,
}

/// Seed three keys:
/// - `greeting.hello` (greetings): en "Hello", es "Hola"
/// - `greeting.goodbye` (greetings): en "Goodbye", es "Adiós"
/// - `button.save` (buttons): en "Save"
pub async fn seed_fixtures(store: &TranslationStore) -> Fixtures {
    let hello = store
        .insert_key(&NewTranslationKey {
            key: "greeting.hello".to_string(),
            category: Some("greetings".to_string()),
            description: Some("Greeting shown on the landing page".to_string()),
        })
        .await
        .unwrap();
    let hello_en = store
        .upsert_translation(&hello.id, "en", "Hello", "system")
        .await
        .unwrap();
    let hello_es = store
        .upsert_translation(&hello.id, "es", "Hola", "system")
        .await
        .unwrap();

    let goodbye = store
        .insert_key(&NewTranslationKey {
            key: "greeting.goodbye".to_string(),
            category: Some("greetings".to_string()),
            description: None,
        })
        .await
        .unwrap();
    let goodbye_en = store
        .upsert_translation(&goodbye.id, "en", "Goodbye", "system")
        .await
        .unwrap();
    let goodbye_es = store
        .upsert_translation(&goodbye.id, "es", "Adiós", "system")
        .await
        .unwrap();

    let save = store
        .insert_key(&NewTranslationKey {
            key: "button.save".to_string(),
            category: Some("buttons".to_string()),
            description: Some("Save button text".to_string()),
        })
        .await
        .unwrap();
    let save_en = store
        .upsert_translation(&save.id, "en", "Save", "system")
        .await
        .unwrap();

    Fixtures {
        hello_key_id: hello.id,
        hello_en_id: hello_en.id,
        hello_es_id: hello_es.id,
        goodbye_en_id: goodbye_en.id,
        goodbye_es_id: goodbye_es.id,
        save_en_id: save_en.id,
    }
}

/// GET `uri` and return (status, parsed JSON body).
pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read_response(response).await
}

/// PUT a JSON body to `uri` and return (status, parsed JSON body).
pub async fn put_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    read_response(response).await
}

async fn read_response(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
