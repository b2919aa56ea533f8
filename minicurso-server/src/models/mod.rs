//! Stored records
//!
//! Plain data with public fields. Nothing is validated here: whatever the
//! caller supplies is what gets stored.

pub mod course;
pub mod enrollment;
pub mod student;

pub use course::Course;
pub use enrollment::Enrollment;
pub use student::{NewStudent, Student};
