//! Shared application state for axum handlers.

use std::sync::Arc;

use inkwell_app::ports::BlogRepository;
use inkwell_app::services::blog_service::BlogService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need to
/// be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Blog use-cases.
    pub blog_service: Arc<BlogService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            blog_service: Arc::clone(&self.blog_service),
        }
    }
}

impl<R> AppState<R>
where
    R: BlogRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(blog_service: BlogService<R>) -> Self {
        Self {
            blog_service: Arc::new(blog_service),
        }
    }
}
