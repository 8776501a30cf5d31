//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod blogs;

use axum::Router;
use axum::routing::{get, post};

use inkwell_app::ports::BlogRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: BlogRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/blogs", get(blogs::list::<R>))
        .route("/blogs/save-draft", post(blogs::save_draft::<R>))
        .route("/blogs/publish", post(blogs::publish::<R>))
        .route(
            "/blogs/{id}",
            get(blogs::get::<R>).delete(blogs::delete::<R>),
        )
}
