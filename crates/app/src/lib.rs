//! # inkwell-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters must implement:
//!   - `BlogRepository` — CRUD for blogs, storage-assigned ids
//! - Define the **driving/inbound** use-cases:
//!   - `BlogService` — save draft, publish, list, get, delete
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `inkwell-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
