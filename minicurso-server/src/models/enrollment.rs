use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `enrollments` table linking a student to a course.
///
/// `student_id` and `course_id` are not foreign keys; the schema does not
/// check that they point anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Enrollment {
    pub id: i32,
    pub student_id: i32,
    pub course_id: i32,
}
