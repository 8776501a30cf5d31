//! Blog service — use-cases for drafting, publishing and managing blogs.

use inkwell_domain::blog::Blog;
use inkwell_domain::changes::{DraftChanges, PublishChanges};
use inkwell_domain::error::{InkwellError, NotFoundError};
use inkwell_domain::id::BlogId;
use inkwell_domain::time;

use crate::ports::BlogRepository;

/// Outcome of an upsert, so callers can tell a new record from an edit.
#[derive(Debug, Clone, PartialEq)]
pub enum Upsert<T> {
    Created(T),
    Updated(T),
}

impl<T> Upsert<T> {
    /// Unwrap the stored value regardless of which branch produced it.
    pub fn into_inner(self) -> T {
        match self {
            Self::Created(value) | Self::Updated(value) => value,
        }
    }
}

fn not_found(id: BlogId) -> InkwellError {
    NotFoundError {
        entity: "Blog",
        id: id.to_string(),
    }
    .into()
}

/// Application service for blog operations.
pub struct BlogService<R> {
    repo: R,
}

impl<R: BlogRepository> BlogService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Save a draft, creating it when `id` is `None`.
    ///
    /// Updating an existing blog always demotes it to a draft.
    ///
    /// # Errors
    ///
    /// Returns [`InkwellError::Validation`] when both title and content are
    /// missing, [`InkwellError::NotFound`] when `id` matches nothing, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, changes))]
    pub async fn save_draft(
        &self,
        id: Option<BlogId>,
        changes: DraftChanges,
    ) -> Result<Upsert<Blog>, InkwellError> {
        changes.validate()?;

        let Some(id) = id else {
            let blog = self.repo.create(changes.into_new_blog(time::now())).await?;
            tracing::debug!(blog_id = %blog.id, "draft created");
            return Ok(Upsert::Created(blog));
        };

        let mut blog = self.repo.get_by_id(id).await?.ok_or_else(|| not_found(id))?;
        changes.apply_to(&mut blog, time::now());
        let saved = self.repo.update(blog).await?.ok_or_else(|| not_found(id))?;
        Ok(Upsert::Updated(saved))
    }

    /// Publish a blog, creating it when `id` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`InkwellError::Validation`] when title or content is missing,
    /// [`InkwellError::NotFound`] when `id` matches nothing, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self, changes))]
    pub async fn publish(
        &self,
        id: Option<BlogId>,
        changes: PublishChanges,
    ) -> Result<Upsert<Blog>, InkwellError> {
        let valid = changes.validate()?;

        let Some(id) = id else {
            let blog = self.repo.create(valid.into_new_blog(time::now())).await?;
            tracing::debug!(blog_id = %blog.id, "blog published");
            return Ok(Upsert::Created(blog));
        };

        let mut blog = self.repo.get_by_id(id).await?.ok_or_else(|| not_found(id))?;
        valid.apply_to(&mut blog, time::now());
        let saved = self.repo.update(blog).await?.ok_or_else(|| not_found(id))?;
        Ok(Upsert::Updated(saved))
    }

    /// Look up a blog by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`InkwellError::NotFound`] when no blog with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_blog(&self, id: BlogId) -> Result<Blog, InkwellError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// List all blogs, most recently updated first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_blogs(&self) -> Result<Vec<Blog>, InkwellError> {
        self.repo.get_all().await
    }

    /// Delete a blog by id.
    ///
    /// # Errors
    ///
    /// Returns [`InkwellError::NotFound`] when nothing was deleted, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_blog(&self, id: BlogId) -> Result<(), InkwellError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}
