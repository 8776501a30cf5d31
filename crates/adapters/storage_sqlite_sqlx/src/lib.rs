//! # inkwell-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `inkwell-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `inkwell-app` (for port traits) and `inkwell-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod blog_repo;
mod error;
mod pool;

pub use blog_repo::SqliteBlogRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
