//! Integration tests for the admin console guard.
//!
//! These drive plain HTTP requests through the full router, session
//! layer included, and assert who gets past `/admin`.

#![allow(clippy::unwrap_used)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use handora_storefront::config::HandoraConfig;
use handora_storefront::state::AppState;
use handora_storefront::store::{DataStore, KvStore, MemoryStore};
use handora_storefront::{middleware, routes};
use tower::ServiceExt;

fn test_app() -> Router {
    let config = HandoraConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 3000,
        data_dir: PathBuf::from("data"),
        admin_marker: "admin".to_string(),
        recommend: None,
    };
    let backend: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
    let store = DataStore::open(backend).unwrap();
    let state = AppState::new(config, store, None);

    Router::new()
        .merge(routes::routes())
        .layer(middleware::create_session_layer())
        .with_state(state)
}

/// Sign in through `POST /auth/login` and hand back the session cookie.
async fn sign_in(app: &Router, email: &str) -> String {
    let body = format!("email={}&password=pw", urlencoding::encode(email));
    let response = app
        .clone()
        .oneshot(
            Request::post("/auth/login")
                .header(
                    header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login sets a session cookie")
        .to_str()
        .unwrap();
    cookie.split(';').next().unwrap().to_string()
}

fn location(response: &axum::http::Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect carries a Location header")
        .to_str()
        .unwrap()
}

#[tokio::test]
async fn anonymous_admin_request_redirects_home() {
    let app = test_app();

    for path in ["/admin", "/admin/products", "/admin/orders"] {
        let response = app
            .clone()
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{path}");
        assert_eq!(location(&response), "/", "{path}");
    }
}

#[tokio::test]
async fn shopper_session_cannot_reach_admin() {
    let app = test_app();
    let cookie = sign_in(&app, "mai@handora.example").await;

    let response = app
        .clone()
        .oneshot(
            Request::get("/admin")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn admin_session_reaches_dashboard() {
    let app = test_app();
    let cookie = sign_in(&app, "admin@handora.example").await;

    let response = app
        .clone()
        .oneshot(
            Request::get("/admin")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
