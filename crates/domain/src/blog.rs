//! Blog — the single persisted entity.
//!
//! A blog is either a work-in-progress draft or a published post. The JSON
//! form produced by `Serialize` is the public wire shape:
//! `{id, title, content, tags, status, created_at, updated_at}`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::id::BlogId;
use crate::tags::Tags;
use crate::time::Timestamp;

/// Title given to drafts saved without one.
pub const UNTITLED_DRAFT: &str = "Untitled Draft";

/// Lifecycle status of a blog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogStatus {
    #[default]
    Draft,
    Published,
}

impl BlogStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

impl fmt::Display for BlogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stored status string is neither `draft` nor `published`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown blog status {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for BlogStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// A persisted blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    pub id: BlogId,
    pub title: String,
    pub content: String,
    pub tags: Tags,
    pub status: BlogStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Blog {
    /// Refresh `updated_at`, never moving it before `created_at`.
    pub fn touch(&mut self, now: Timestamp) {
        self.updated_at = now.max(self.created_at);
    }

    #[must_use]
    pub fn is_published(&self) -> bool {
        self.status == BlogStatus::Published
    }
}

/// A blog that has not been stored yet and therefore has no id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBlog {
    pub title: String,
    pub content: String,
    pub tags: Tags,
    pub status: BlogStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl NewBlog {
    /// Attach the storage-assigned id.
    #[must_use]
    pub fn with_id(self, id: BlogId) -> Blog {
        Blog {
            id,
            title: self.title,
            content: self.content,
            tags: self.tags,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
