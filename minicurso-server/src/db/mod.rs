//! Database layer - connection pool, migrations and repositories
//!
//! # Design Principles
//!
//! - One pool per process, handed to repositories by reference
//! - One statement per operation, no transactions
//! - Repositories hold no state between calls

pub mod error;
pub mod migrate;
pub mod pool;
pub mod repos;

pub use error::DbError;
pub use migrate::MIGRATOR;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
