use axum::extract::Path;
use axum::routing::{delete, post};
use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Deserialize;

use crate::admin::AdminHandler;
use crate::error::AppError;
use crate::models::*;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/universities", get(list_universities))
        .route("/hostels", get(list_hostels))
        .route("/news", get(list_news))
        .route("/events", get(list_events))
        .route("/jobs", get(list_jobs))
        .route("/roommate-profiles", get(list_profiles).put(set_profile))
        .route("/roommate-profiles/{id}", delete(remove_profile))
        .route("/admin/hostels", post(admin_add_hostel).put(admin_update_hostel))
        .route("/admin/hostels/{id}", delete(admin_remove_hostel))
        .route("/admin/news", post(admin_add_news).put(admin_update_news))
        .route("/admin/news/{id}", delete(admin_remove_news))
        .route("/admin/events", post(admin_add_event).put(admin_update_event))
        .route("/admin/events/{id}", delete(admin_remove_event))
        .route("/admin/jobs", post(admin_add_job).put(admin_update_job))
        .route("/admin/jobs/{id}", delete(admin_remove_job))
        .route("/auth/signup", post(sign_up))
        .route("/auth/login", post(log_in))
        .route("/auth/social", post(social_login))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    sqlx::query("select 1").execute(state.store.pool()).await?;
    Ok(StatusCode::OK)
}

// Reads. After any mutation the client is expected to hit these again;
// nothing here pushes change notifications.

async fn list_universities(
    State(state): State<AppState>,
) -> Result<Json<Vec<University>>, AppError> {
    Ok(Json(state.universities().get_all().await?))
}

async fn list_hostels(State(state): State<AppState>) -> Result<Json<Vec<Hostel>>, AppError> {
    Ok(Json(state.hostels().get_all().await?))
}

async fn list_news(State(state): State<AppState>) -> Result<Json<Vec<NewsItem>>, AppError> {
    Ok(Json(state.news().get_all().await?))
}

async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, AppError> {
    Ok(Json(state.events().get_all().await?))
}

async fn list_jobs(State(state): State<AppState>) -> Result<Json<Vec<Job>>, AppError> {
    Ok(Json(state.jobs().get_all().await?))
}

async fn list_profiles(
    State(state): State<AppState>,
) -> Result<Json<Vec<RoommateProfile>>, AppError> {
    Ok(Json(state.profiles().get_all().await?))
}

// Roommate profiles are keyed by user id and written whole.

async fn set_profile(
    State(state): State<AppState>,
    Json(profile): Json<RoommateProfile>,
) -> Result<StatusCode, AppError> {
    state.profiles().set(&profile).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn remove_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.profiles().remove(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// Management surface, routed through the admin adapter.

async fn admin_add_hostel(
    State(state): State<AppState>,
    Json(draft): Json<NewHostel>,
) -> Result<Json<Hostel>, AppError> {
    Ok(Json(AdminHandler::new(&state.store).add(&draft).await?))
}

async fn admin_update_hostel(
    State(state): State<AppState>,
    Json(record): Json<Hostel>,
) -> Result<StatusCode, AppError> {
    AdminHandler::new(&state.store).update(&record).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn admin_remove_hostel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    AdminHandler::<Hostel>::new(&state.store).remove(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn admin_add_news(
    State(state): State<AppState>,
    Json(draft): Json<NewNewsItem>,
) -> Result<Json<NewsItem>, AppError> {
    Ok(Json(AdminHandler::new(&state.store).add(&draft).await?))
}

async fn admin_update_news(
    State(state): State<AppState>,
    Json(record): Json<NewsItem>,
) -> Result<StatusCode, AppError> {
    AdminHandler::new(&state.store).update(&record).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn admin_remove_news(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    AdminHandler::<NewsItem>::new(&state.store).remove(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn admin_add_event(
    State(state): State<AppState>,
    Json(draft): Json<NewEvent>,
) -> Result<Json<Event>, AppError> {
    Ok(Json(AdminHandler::new(&state.store).add(&draft).await?))
}

async fn admin_update_event(
    State(state): State<AppState>,
    Json(record): Json<Event>,
) -> Result<StatusCode, AppError> {
    AdminHandler::new(&state.store).update(&record).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn admin_remove_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    AdminHandler::<Event>::new(&state.store).remove(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn admin_add_job(
    State(state): State<AppState>,
    Json(draft): Json<NewJob>,
) -> Result<Json<Job>, AppError> {
    Ok(Json(AdminHandler::new(&state.store).add(&draft).await?))
}

async fn admin_update_job(
    State(state): State<AppState>,
    Json(record): Json<Job>,
) -> Result<StatusCode, AppError> {
    AdminHandler::new(&state.store).update(&record).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn admin_remove_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    AdminHandler::<Job>::new(&state.store).remove(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// Mock auth.

#[derive(Deserialize)]
struct SignupRequest {
    name: String,
    email: String,
    password: String,
}

#[derive(Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Deserialize)]
struct SocialLoginRequest {
    provider: String,
}

async fn sign_up(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<User>, AppError> {
    Ok(Json(state.auth.sign_up(&req.name, &req.email, &req.password)?))
}

async fn log_in(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<User>, AppError> {
    Ok(Json(state.auth.log_in(&req.email, &req.password)?))
}

async fn social_login(
    State(state): State<AppState>,
    Json(req): Json<SocialLoginRequest>,
) -> Result<Json<User>, AppError> {
    Ok(Json(state.auth.social_login(&req.provider)?))
}
