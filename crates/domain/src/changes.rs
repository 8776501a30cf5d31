//! Change sets — what a save-draft or publish request asks to write.
//!
//! Both kinds can create a new blog or update an existing one. They differ in
//! what they require and in how they merge into a stored blog:
//!
//! | Field     | Draft update                   | Publish update              |
//! |-----------|--------------------------------|-----------------------------|
//! | `title`   | kept when absent               | always replaced             |
//! | `content` | kept when absent               | always replaced             |
//! | `tags`    | kept when absent or empty      | replaced, cleared if absent |
//! | `status`  | forced to `draft`              | forced to `published`       |

use crate::blog::{Blog, BlogStatus, NewBlog, UNTITLED_DRAFT};
use crate::error::ValidationError;
use crate::tags::Tags;
use crate::time::Timestamp;

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

/// Fields supplied with a save-draft request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Tags>,
}

impl DraftChanges {
    /// A draft needs at least a title or some content.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingTitleOrContent`] when both are
    /// absent or empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if is_blank(self.title.as_deref()) && is_blank(self.content.as_deref()) {
            return Err(ValidationError::MissingTitleOrContent);
        }
        Ok(())
    }

    /// Build a brand new draft, filling in placeholders for missing fields.
    #[must_use]
    pub fn into_new_blog(self, now: Timestamp) -> NewBlog {
        let title = self
            .title
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| UNTITLED_DRAFT.to_string());

        NewBlog {
            title,
            content: self.content.unwrap_or_default(),
            tags: self.tags.unwrap_or_default(),
            status: BlogStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge into an existing blog and demote it to a draft.
    pub fn apply_to(self, blog: &mut Blog, now: Timestamp) {
        if let Some(title) = self.title {
            blog.title = title;
        }
        if let Some(content) = self.content {
            blog.content = content;
        }
        if let Some(tags) = self.tags.filter(|tags| !tags.is_empty()) {
            blog.tags = tags;
        }
        blog.status = BlogStatus::Draft;
        blog.touch(now);
    }
}

/// Fields supplied with a publish request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublishChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Tags>,
}

/// A publish request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidPublish {
    title: String,
    content: String,
    tags: Tags,
}

impl PublishChanges {
    /// A published post must have both a title and content.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingTitle`] or
    /// [`ValidationError::MissingContent`], title checked first.
    pub fn validate(self) -> Result<ValidPublish, ValidationError> {
        let title = self
            .title
            .filter(|title| !title.is_empty())
            .ok_or(ValidationError::MissingTitle)?;
        let content = self
            .content
            .filter(|content| !content.is_empty())
            .ok_or(ValidationError::MissingContent)?;

        Ok(ValidPublish {
            title,
            content,
            tags: self.tags.unwrap_or_default(),
        })
    }
}

impl ValidPublish {
    #[must_use]
    pub fn into_new_blog(self, now: Timestamp) -> NewBlog {
        NewBlog {
            title: self.title,
            content: self.content,
            tags: self.tags,
            status: BlogStatus::Published,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the existing blog and mark it published.
    pub fn apply_to(self, blog: &mut Blog, now: Timestamp) {
        blog.title = self.title;
        blog.content = self.content;
        blog.tags = self.tags;
        blog.status = BlogStatus::Published;
        blog.touch(now);
    }
}
