use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;
use tessera_server::{Server, build_router};
use tower::ServiceExt;

fn themes_dir() -> TempDir {
    let tmp = tempfile::tempdir().unwrap();
    let aurora = json!({
        "pages": [{
            "id": "home",
            "name": "Home",
            "path": "/",
            "components": [
                { "id": "c1", "componentKey": "hero", "title": "Welcome", "order": 2,
                  "settings": { "heading": "Hello" } },
                { "id": "c2", "componentKey": "footer", "order": 1 },
                { "id": "c3", "componentKey": "ghost", "order": 0 }
            ]
        }]
    });
    fs::create_dir_all(tmp.path().join("aurora")).unwrap();
    fs::write(tmp.path().join("aurora/settings.json"), aurora.to_string()).unwrap();
    fs::create_dir_all(tmp.path().join("broken")).unwrap();
    fs::write(tmp.path().join("broken/settings.json"), "{ not json").unwrap();
    tmp
}

async fn app(themes: &TempDir) -> Router {
    let server = Server::builder().themes_root(themes.path()).build().await.unwrap();
    build_router(server.state().clone())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response =
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn status_is_up_and_uncached() {
    let themes = themes_dir();
    let response = app(&themes)
        .await
        .oneshot(Request::builder().uri("/api/status").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CACHE_CONTROL].to_str().unwrap().contains("no-store"));
    let body: Value =
        serde_json::from_slice(&to_bytes(response.into_body(), usize::MAX).await.unwrap()).unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "up");
}

#[tokio::test]
async fn info_lists_registered_slices() {
    let themes = themes_dir();
    let (status, body) = get(app(&themes).await, "/api/info").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "tessera");
    assert_eq!(body["data"]["slices"].as_array().unwrap().len(), 2);
    assert!(body["data"]["features"].as_array().unwrap().contains(&json!("server")));
}

#[tokio::test]
async fn components_are_listed_with_capabilities() {
    let themes = themes_dir();
    let (status, body) = get(app(&themes).await, "/api/components").await;

    assert_eq!(status, StatusCode::OK);
    let keys: Vec<_> =
        body["data"].as_array().unwrap().iter().map(|c| c["key"].as_str().unwrap()).collect();
    assert_eq!(keys, ["footer", "gallery", "header", "hero", "rich-text"]);

    let (status, body) = get(app(&themes).await, "/api/components/gallery/capabilities").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["capabilities"], json!(["lazy-load", "media", "responsive"]));
}

#[tokio::test]
async fn unknown_component_capabilities_is_not_found() {
    let themes = themes_dir();
    let (status, body) = get(app(&themes).await, "/api/components/ghost/capabilities").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn themes_are_listed() {
    let themes = themes_dir();
    let (status, body) = get(app(&themes).await, "/api/themes").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["themes"], json!(["aurora", "broken"]));
}

#[tokio::test]
async fn theme_resolves_into_ordered_pages() {
    let themes = themes_dir();
    let (status, body) = get(app(&themes).await, "/api/themes/aurora").await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["themeId"], "aurora");
    let ids: Vec<_> = data["pages"][0]["components"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["c2", "c1"]);
    assert_eq!(data["issues"][0]["kind"], "UnknownComponent");
    assert_eq!(data["issues"][0]["componentId"], "c3");
}

#[tokio::test]
async fn missing_theme_is_not_found() {
    let themes = themes_dir();
    let (status, body) = get(app(&themes).await, "/api/themes/nebula").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["details"]["themeId"], "nebula");
}

#[tokio::test]
async fn unparseable_theme_is_unprocessable() {
    let themes = themes_dir();
    let (status, body) = get(app(&themes).await, "/api/themes/broken").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["details"]["themeId"], "broken");
}

#[tokio::test]
async fn missing_themes_root_fails_the_build() {
    let tmp = tempfile::tempdir().unwrap();
    let result = Server::builder().themes_root(tmp.path().join("absent")).build().await;
    assert!(result.is_err());
}
