//! Student records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `students` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Student {
    /// Assigned by the database on insert.
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub email: String,
    pub phone: String,
}

/// Student fields supplied by a caller on create.
///
/// Carries no `id`; an `id` in an incoming JSON body is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub age: i32,
    pub email: String,
    pub phone: String,
}

impl NewStudent {
    /// Attach the identifier the store assigned.
    pub fn with_id(self, id: i32) -> Student {
        Student {
            id,
            name: self.name,
            age: self.age,
            email: self.email,
            phone: self.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_student_ignores_client_id() {
        let body = r#"{"id": 42, "name": "Ana", "age": 20, "email": "ana@x.com", "phone": "1111"}"#;
        let new: NewStudent = serde_json::from_str(body).unwrap();
        assert_eq!(new.name, "Ana");

        let student = new.with_id(7);
        assert_eq!(student.id, 7);
    }

    #[test]
    fn new_student_accepts_unchecked_values() {
        let body = r#"{"name": "", "age": -5, "email": "not-an-email", "phone": ""}"#;
        let new: NewStudent = serde_json::from_str(body).unwrap();
        assert_eq!(new.age, -5);
        assert!(new.name.is_empty());
    }

    #[test]
    fn new_student_requires_every_field() {
        let body = r#"{"name": "Ana", "age": 20, "email": "ana@x.com"}"#;
        assert!(serde_json::from_str::<NewStudent>(body).is_err());
    }

    #[test]
    fn student_serializes_field_names() {
        let student = Student {
            id: 1,
            name: "Ana".into(),
            age: 20,
            email: "ana@x.com".into(),
            phone: "1111".into(),
        };
        let value = serde_json::to_value(&student).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "name": "Ana",
                "age": 20,
                "email": "ana@x.com",
                "phone": "1111"
            })
        );
    }
}
