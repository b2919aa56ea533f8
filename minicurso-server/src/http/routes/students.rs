//! Student endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::db::StudentRepo;
use crate::http::error::ApiError;
use crate::http::extractors::RecordId;
use crate::http::server::AppState;
use crate::models::{NewStudent, Student};

/// GET /api/students - list all students
async fn list_students(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let students = StudentRepo::new(&state.pool).list().await?;
    Ok(Json(students))
}

/// GET /api/students/{id} - get a single student
async fn get_student(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<Student>, ApiError> {
    StudentRepo::new(&state.pool)
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound {
            resource: "student",
            id: id.to_string(),
        })
}

/// POST /api/students - create a student
///
/// Responds 201 with the stored record and a Location header pointing at it.
async fn create_student(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewStudent>,
) -> Result<impl IntoResponse, ApiError> {
    let student = StudentRepo::new(&state.pool).create(req).await?;
    tracing::info!(id = student.id, "student created");

    let location = format!("/api/students/{}", student.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(student),
    ))
}

/// Student routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/students", get(list_students).post(create_student))
        .route("/api/students/{id}", get(get_student))
}
