//! minicurso-server: student/course backend over PostgreSQL
//!
//! Exposes the student endpoints over HTTP and owns the relational
//! schema for students, courses and enrollments.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, create_pool_with_options, DbError, StudentRepo, MIGRATOR};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::{Course, Enrollment, NewStudent, Student};
pub use sqlx::PgPool;
