//! Repository implementations for database access
//!
//! Each repository borrows the pool and issues a single statement per call.
//! Courses and enrollments are storage only and have no repository.

pub mod students;

pub use students::StudentRepo;
