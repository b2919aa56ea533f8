//! Student repository
//!
//! - list: full table scan in storage order
//! - get: primary-key lookup, `None` when absent
//! - create: INSERT ... RETURNING with the generated id

use sqlx::PgPool;

use crate::db::DbError;
use crate::models::{NewStudent, Student};

/// Student repository
pub struct StudentRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> StudentRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every student.
    ///
    /// No ORDER BY: rows come back in whatever order Postgres yields them.
    pub async fn list(&self) -> Result<Vec<Student>, DbError> {
        let students = sqlx::query_as::<_, Student>(
            "SELECT id, name, age, email, phone FROM students",
        )
        .fetch_all(self.pool)
        .await?;

        tracing::debug!(count = students.len(), "listed students");
        Ok(students)
    }

    /// Fetch a single student by id.
    pub async fn get(&self, id: i32) -> Result<Option<Student>, DbError> {
        let student = sqlx::query_as::<_, Student>(
            "SELECT id, name, age, email, phone FROM students WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        tracing::debug!(id, found = student.is_some(), "fetched student");
        Ok(student)
    }

    /// Insert a student and return it with its assigned id.
    pub async fn create(&self, student: NewStudent) -> Result<Student, DbError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO students (name, age, email, phone)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&student.name)
        .bind(student.age)
        .bind(&student.email)
        .bind(&student.phone)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(id, "created student");
        Ok(student.with_id(id))
    }
}
