use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `courses` table. Storage only; no endpoints read or write it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub description: String,
}
