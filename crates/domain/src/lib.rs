//! # inkwell-domain
//!
//! Pure domain model for the inkwell blog service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **Blog** entity and its lifecycle status (draft / published)
//! - Define **Tags** and their comma-delimited column form
//! - Define **change sets** for saving drafts and publishing, including the
//!   field-merge rules applied when an existing blog is updated
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod blog;
pub mod changes;
pub mod tags;
