//! End-to-end tests for the student endpoints
//!
//! Require a database: DATABASE_URL=postgres://... cargo test -p minicurso-server -- --ignored

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use minicurso_server::{build_router, ServerConfig, Student};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

fn app(pool: PgPool) -> Router {
    build_router(pool, &ServerConfig::default())
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post_student(app: Router, body: Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/students")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[sqlx::test(migrator = "minicurso_server::MIGRATOR")]
#[ignore = "requires database"]
async fn create_get_and_list(pool: PgPool) {
    let response = post_student(
        app(pool.clone()),
        json!({"name": "Ana", "age": 20, "email": "ana@x.com", "phone": "1111"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("missing Location header")
        .to_str()
        .unwrap()
        .to_owned();
    let created: Student = serde_json::from_value(body_json(response).await).unwrap();
    assert_eq!(location, format!("/api/students/{}", created.id));
    assert_eq!(created.name, "Ana");

    let response = get(app(pool.clone()), &location).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Student = serde_json::from_value(body_json(response).await).unwrap();
    assert_eq!(fetched, created);

    let response = get(app(pool), "/api/students").await;
    assert_eq!(response.status(), StatusCode::OK);
    let all: Vec<Student> = serde_json::from_value(body_json(response).await).unwrap();
    assert_eq!(all, vec![created]);
}

#[sqlx::test(migrator = "minicurso_server::MIGRATOR")]
#[ignore = "requires database"]
async fn missing_student_is_404(pool: PgPool) {
    let response = get(app(pool), "/api/students/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "not_found");
}

#[sqlx::test(migrator = "minicurso_server::MIGRATOR")]
#[ignore = "requires database"]
async fn client_supplied_id_is_ignored(pool: PgPool) {
    let response = post_student(
        app(pool),
        json!({"id": 4242, "name": "", "age": -5, "email": "", "phone": ""}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created: Student = serde_json::from_value(body_json(response).await).unwrap();
    assert_ne!(created.id, 4242);
    assert_eq!(created.age, -5);
    assert!(created.name.is_empty());
}

#[sqlx::test(migrator = "minicurso_server::MIGRATOR")]
#[ignore = "requires database"]
async fn empty_table_lists_empty_array(pool: PgPool) {
    let response = get(app(pool), "/api/students").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}
