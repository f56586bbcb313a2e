use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde::de::DeserializeOwned;
use serde_json::json;
use tower::ServiceExt;

use uninest::models::{Hostel, Job, NewsItem, RoommateProfile, University, User};
use uninest::routes::router;
use uninest::state::AppState;
use uninest::store::Store;

async fn test_app() -> Router {
    let store = Store::open_in_memory()
        .await
        .expect("Failed to open seeded store");
    router(AppState::new(store))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

fn with_json(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn body_json<T: DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse body")
}

#[tokio::test]
async fn test_health() {
    let app = test_app().await;
    let response = app.oneshot(get("/health")).await.expect("oneshot");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_reads_return_the_seeded_tables() {
    let app = test_app().await;

    let response = app.clone().oneshot(get("/hostels")).await.expect("oneshot");
    assert_eq!(response.status(), StatusCode::OK);
    let hostels: Vec<Hostel> = body_json(response).await;
    assert_eq!(hostels.len(), 4);
    let olympia = hostels.iter().find(|h| h.id == "hostel-1").expect("hostel-1");
    assert_eq!(olympia.amenities.len(), 6);
    assert!(olympia.is_recommended);

    let response = app
        .clone()
        .oneshot(get("/universities"))
        .await
        .expect("oneshot");
    let universities: Vec<University> = body_json(response).await;
    assert_eq!(universities.len(), 10);

    let response = app.oneshot(get("/jobs")).await.expect("oneshot");
    let jobs: Vec<Job> = body_json(response).await;
    assert_eq!(jobs.len(), 3);
    assert_eq!(jobs.iter().filter(|j| !j.responsibilities.is_empty()).count(), 3);
}

#[tokio::test]
async fn test_admin_job_lifecycle() {
    let app = test_app().await;

    let draft = json!({
        "title": "Campus Tour Guide",
        "deadline": "Sep 30th",
        "company": "Uninest",
        "image_url": "https://example.com/guide.jpg",
        "location": "Kampala, Uganda",
        "job_type": "Part-time",
        "description": "Show prospective students around partner hostels.",
        "responsibilities": ["Lead weekend tours.", "Collect feedback."],
        "qualifications": ["Friendly and punctual."],
        "how_to_apply": "#"
    });
    let response = app
        .clone()
        .oneshot(with_json("POST", "/admin/jobs", draft))
        .await
        .expect("oneshot");
    assert_eq!(response.status(), StatusCode::OK);
    let mut added: Job = body_json(response).await;
    assert!(added.id.starts_with("job-"));
    assert_eq!(
        added.responsibilities,
        vec!["Lead weekend tours.".to_string(), "Collect feedback.".to_string()]
    );

    let response = app.clone().oneshot(get("/jobs")).await.expect("oneshot");
    let jobs: Vec<Job> = body_json(response).await;
    assert_eq!(jobs.len(), 4);

    added.deadline = "Oct 15th".to_string();
    let response = app
        .clone()
        .oneshot(with_json(
            "PUT",
            "/admin/jobs",
            serde_json::to_value(&added).expect("serialize"),
        ))
        .await
        .expect("oneshot");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/admin/jobs/{}", added.id))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("oneshot");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get("/jobs")).await.expect("oneshot");
    let jobs: Vec<Job> = body_json(response).await;
    assert_eq!(jobs.len(), 3);
}

#[tokio::test]
async fn test_admin_update_of_missing_row_is_404() {
    let app = test_app().await;

    let ghost = json!({
        "id": "news-999",
        "title": "Ghost",
        "description": "Does not exist",
        "image_url": "x",
        "source": "Nowhere"
    });
    let response = app
        .oneshot(with_json("PUT", "/admin/news", ghost))
        .await
        .expect("oneshot");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_news_add_and_remove() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(with_json(
            "POST",
            "/admin/news",
            json!({
                "title": "Hostel Prices Drop",
                "description": "Off-season discounts announced.",
                "image_url": "https://example.com/news.jpg",
                "source": "Campus Bee"
            }),
        ))
        .await
        .expect("oneshot");
    assert_eq!(response.status(), StatusCode::OK);
    let added: NewsItem = body_json(response).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/admin/news/{}", added.id))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("oneshot");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get("/news")).await.expect("oneshot");
    let news: Vec<NewsItem> = body_json(response).await;
    assert_eq!(news.len(), 3);
}

#[tokio::test]
async fn test_profile_upsert_keeps_one_row_per_user() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(get("/roommate-profiles"))
        .await
        .expect("oneshot");
    let profiles: Vec<RoommateProfile> = body_json(response).await;
    let mut profile = profiles
        .into_iter()
        .find(|p| p.id == "profile-2")
        .expect("profile-2");

    profile.budget = 850_000.0;
    profile.bio = "Now looking near the eastern gate.".to_string();
    let response = app
        .clone()
        .oneshot(with_json(
            "PUT",
            "/roommate-profiles",
            serde_json::to_value(&profile).expect("serialize"),
        ))
        .await
        .expect("oneshot");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(get("/roommate-profiles"))
        .await
        .expect("oneshot");
    let profiles: Vec<RoommateProfile> = body_json(response).await;
    assert_eq!(profiles.len(), 3);
    let updated = profiles
        .iter()
        .find(|p| p.id == "profile-2")
        .expect("profile-2");
    assert_eq!(updated.budget, 850_000.0);
    assert_eq!(updated.bio, "Now looking near the eastern gate.");
}

#[tokio::test]
async fn test_auth_signup_then_login() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(with_json(
            "POST",
            "/auth/signup",
            json!({ "name": "Brenda", "email": "brenda@example.com", "password": "pw" }),
        ))
        .await
        .expect("oneshot");
    assert_eq!(response.status(), StatusCode::OK);
    let created: User = body_json(response).await;
    assert!(created.id.starts_with("user-"));

    let response = app
        .clone()
        .oneshot(with_json(
            "POST",
            "/auth/login",
            json!({ "email": "brenda@example.com", "password": "pw" }),
        ))
        .await
        .expect("oneshot");
    assert_eq!(response.status(), StatusCode::OK);
    let logged_in: User = body_json(response).await;
    assert_eq!(logged_in, created);

    let response = app
        .oneshot(with_json(
            "POST",
            "/auth/login",
            json!({ "email": "unknown@example.com", "password": "pw" }),
        ))
        .await
        .expect("oneshot");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
