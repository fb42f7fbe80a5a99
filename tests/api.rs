use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use portfolio_api::{
    AppState, app,
    github::GithubClient,
    notify::Notifier,
    store::{Mirror, Store},
};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

/// App wired like main, but with a temp data dir, no webhook, and a GitHub
/// base nothing listens on.
fn test_app(dir: &TempDir) -> Router {
    let url = format!("sqlite://{}/mirror.db?mode=rwc", dir.path().display());
    let store = Store::new(
        dir.path().to_path_buf(),
        Mirror::connect_lazy(&url).unwrap(),
    );
    let http = reqwest::Client::new();

    app(AppState {
        store,
        github: GithubClient::new(http.clone(), "http://127.0.0.1:9".to_owned()),
        notifier: Notifier::new(http, None),
    })
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

#[tokio::test]
async fn health_check() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let (status, body) = get(&app, "/api/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Portfolio API is running");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn create_and_list_skill() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let (status, body) = post(
        &app,
        "/api/skills",
        json!({"name": "Rust", "level": 80, "category": "Backend"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["id"].as_str().unwrap().to_owned();
    assert!(!id.is_empty());

    let (status, listed) = get(&app, "/api/skills").await;
    assert_eq!(status, StatusCode::OK);
    let skills = listed.as_array().unwrap();
    assert_eq!(skills.len(), 1);
    assert_eq!(skills[0]["id"], id.as_str());
    assert_eq!(skills[0]["name"], "Rust");
    assert_eq!(skills[0]["level"], 80);
    assert_eq!(skills[0]["category"], "Backend");
}

#[tokio::test]
async fn sequential_creates_return_distinct_ids() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let mut ids = Vec::new();
    for i in 0..5 {
        let (status, body) = post(
            &app,
            "/api/skills",
            json!({"name": format!("skill-{i}"), "level": 50, "category": "Misc"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        ids.push(body["id"].as_str().unwrap().to_owned());
    }

    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[tokio::test]
async fn list_preserves_creation_order() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let names = ["first", "second", "third"];
    for name in names {
        post(
            &app,
            "/api/skills",
            json!({"name": name, "level": 10, "category": "Misc"}),
        )
        .await;
    }

    let (_, listed) = get(&app, "/api/skills").await;
    let listed: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(listed, names);
}

#[tokio::test]
async fn contact_round_trip_reports_email_not_sent() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let (status, body) = post(
        &app,
        "/api/contact",
        json!({"name": "Ada", "email": "ada@example.com", "message": "hello there"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Contact message sent successfully");
    // No webhook configured in the test app.
    assert_eq!(body["email_sent"], false);
    let id = body["id"].as_str().unwrap().to_owned();

    let (_, listed) = get(&app, "/api/contact").await;
    let messages = listed.as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["id"], id.as_str());
    assert_eq!(messages[0]["name"], "Ada");
    assert_eq!(messages[0]["email"], "ada@example.com");
    assert_eq!(messages[0]["message"], "hello there");
    assert!(messages[0]["timestamp"].is_string());
}

#[tokio::test]
async fn project_round_trip_with_optional_fields() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let (status, body) = post(
        &app,
        "/api/projects",
        json!({
            "title": "Portfolio",
            "description": "A backend",
            "technologies": ["Rust", "Axum", "SQLite"],
            "github_url": "https://github.com/ada/portfolio",
            "created_at": "2024-03-01T12:00:00Z",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["id"].as_str().unwrap().to_owned();

    let (_, listed) = get(&app, "/api/projects").await;
    let projects = listed.as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["id"], id.as_str());
    assert_eq!(projects[0]["technologies"], json!(["Rust", "Axum", "SQLite"]));
    assert_eq!(projects[0]["github_url"], "https://github.com/ada/portfolio");
    assert_eq!(projects[0]["demo_url"], Value::Null);
    // A client-supplied creation timestamp is kept.
    assert_eq!(projects[0]["created_at"], "2024-03-01T12:00:00Z");
}

#[tokio::test]
async fn education_round_trip_keeps_type_field() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let (status, body) = post(
        &app,
        "/api/education",
        json!({
            "degree": "AWS Certified Developer",
            "school": "Amazon Web Services",
            "year": "2023",
            "description": "Cloud certification",
            "type": "certification",
            "certificate_url": "https://aws.example.com/cert/123",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["id"].as_str().is_some());

    let (_, listed) = get(&app, "/api/education").await;
    let entries = listed.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["type"], "certification");
    assert_eq!(entries[0]["certificate_url"], "https://aws.example.com/cert/123");
    assert_eq!(entries[0]["icon"], Value::Null);
}

#[tokio::test]
async fn photography_round_trip() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let (status, body) = post(
        &app,
        "/api/photography",
        json!({
            "title": "Coastal Majesty",
            "description": "Golden hour cliffs",
            "camera": "Canon EOS R5",
            "settings": "f/11, 1/60s, ISO 100",
            "location": "Big Sur, California",
            "image_url": "https://example.com/coast.jpeg",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["id"].as_str().unwrap().to_owned();

    let (_, listed) = get(&app, "/api/photography").await;
    let photos = listed.as_array().unwrap();
    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0]["id"], id.as_str());
    assert_eq!(photos[0]["camera"], "Canon EOS R5");
    assert!(photos[0]["created_at"].is_string());
}

#[tokio::test]
async fn analytics_empty_store() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let (status, body) = get(&app, "/api/analytics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_contacts"], 0);
    assert_eq!(body["total_projects"], 0);
    assert_eq!(body["total_photos"], 0);
    assert_eq!(body["total_education"], 0);
    assert_eq!(body["last_contact"], Value::Null);
    assert_eq!(body["most_recent_project"], Value::Null);
    assert_eq!(body["most_recent_photo"], Value::Null);
}

#[tokio::test]
async fn analytics_reflects_writes() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    for name in ["Ada", "Grace"] {
        post(
            &app,
            "/api/contact",
            json!({"name": name, "email": "a@example.com", "message": "hi"}),
        )
        .await;
    }
    post(
        &app,
        "/api/projects",
        json!({"title": "P", "description": "d", "technologies": []}),
    )
    .await;
    post(
        &app,
        "/api/photography",
        json!({
            "title": "T", "description": "d", "camera": "c",
            "settings": "s", "location": "l", "image_url": "u",
        }),
    )
    .await;

    let (_, contacts) = get(&app, "/api/contact").await;
    let last_timestamp = contacts.as_array().unwrap().last().unwrap()["timestamp"].clone();

    let (status, body) = get(&app, "/api/analytics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_contacts"], 2);
    assert_eq!(body["total_projects"], 1);
    assert_eq!(body["total_photos"], 1);
    assert_eq!(body["total_education"], 0);
    assert_eq!(body["last_contact"], last_timestamp);
    assert!(body["most_recent_project"].is_string());
    assert!(body["most_recent_photo"].is_string());
}

#[tokio::test]
async fn github_upstream_failure_returns_empty_list() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    // The test app's GitHub base points at a closed port.
    let (status, body) = get(&app, "/api/github/octocat").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn weather_returns_static_payload() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let (status, body) = get(&app, "/api/weather").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location"], "New York, NY");
    assert_eq!(body["temperature"], "22°C");
    assert_eq!(body["description"], "Partly cloudy");
    assert_eq!(body["icon"], "⛅");
}

#[tokio::test]
async fn resume_generates_pdf_attachment() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    post(
        &app,
        "/api/skills",
        json!({"name": "Rust", "level": 90, "category": "Backend"}),
    )
    .await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/resume/generate")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/pdf"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"resume.pdf\""
    );

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(body.starts_with(b"%PDF"));
}

#[tokio::test]
async fn malformed_payload_is_client_error() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/skills")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn missing_required_fields_is_client_error() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let (status, _) = post(&app, "/api/skills", json!({"name": "Rust"})).await;
    assert!(status.is_client_error());
}
