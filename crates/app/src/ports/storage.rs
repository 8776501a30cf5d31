//! Storage port — repository trait for blog persistence.

use std::future::Future;

use inkwell_domain::blog::{Blog, NewBlog};
use inkwell_domain::error::InkwellError;
use inkwell_domain::id::BlogId;

/// Repository for persisting and querying [`Blog`]s.
///
/// Every mutating method is atomic: it either commits fully or leaves the
/// store untouched and returns [`InkwellError::Storage`].
pub trait BlogRepository {
    /// Insert a new blog; storage assigns the id.
    fn create(&self, blog: NewBlog) -> impl Future<Output = Result<Blog, InkwellError>> + Send;

    /// Get a blog by its identifier.
    fn get_by_id(
        &self,
        id: BlogId,
    ) -> impl Future<Output = Result<Option<Blog>, InkwellError>> + Send;

    /// Get all blogs, most recently updated first.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Blog>, InkwellError>> + Send;

    /// Overwrite a stored blog. Returns `None` if the row no longer exists.
    fn update(&self, blog: Blog) -> impl Future<Output = Result<Option<Blog>, InkwellError>> + Send;

    /// Delete a blog. Returns `false` if nothing matched.
    fn delete(&self, id: BlogId) -> impl Future<Output = Result<bool, InkwellError>> + Send;
}
