//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use inkwell_app::ports::BlogRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api`, accepts cross-origin requests from any
/// origin, and includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: BlogRepository + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use inkwell_app::services::blog_service::BlogService;
    use inkwell_domain::blog::{Blog, NewBlog};
    use inkwell_domain::error::InkwellError;
    use inkwell_domain::id::BlogId;
    use tower::ServiceExt;

    struct StubBlogRepo;

    impl BlogRepository for StubBlogRepo {
        async fn create(&self, blog: NewBlog) -> Result<Blog, InkwellError> {
            Ok(blog.with_id(BlogId::new(1)))
        }
        async fn get_by_id(&self, _id: BlogId) -> Result<Option<Blog>, InkwellError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Blog>, InkwellError> {
            Ok(vec![])
        }
        async fn update(&self, _blog: Blog) -> Result<Option<Blog>, InkwellError> {
            Ok(None)
        }
        async fn delete(&self, _id: BlogId) -> Result<bool, InkwellError> {
            Ok(false)
        }
    }

    struct BrokenBlogRepo;

    fn broken() -> InkwellError {
        InkwellError::Storage(Box::new(std::io::Error::other("database is locked")))
    }

    impl BlogRepository for BrokenBlogRepo {
        async fn create(&self, _blog: NewBlog) -> Result<Blog, InkwellError> {
            Err(broken())
        }
        async fn get_by_id(&self, _id: BlogId) -> Result<Option<Blog>, InkwellError> {
            Err(broken())
        }
        async fn get_all(&self) -> Result<Vec<Blog>, InkwellError> {
            Err(broken())
        }
        async fn update(&self, _blog: Blog) -> Result<Option<Blog>, InkwellError> {
            Err(broken())
        }
        async fn delete(&self, _id: BlogId) -> Result<bool, InkwellError> {
            Err(broken())
        }
    }

    fn stub_app() -> Router {
        build(AppState::new(BlogService::new(StubBlogRepo)))
    }

    fn broken_app() -> Router {
        build(AppState::new(BlogService::new(BrokenBlogRepo)))
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = stub_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_allow_any_origin_on_preflight() {
        let response = stub_app()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/blogs/publish")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn should_return_created_for_new_draft() {
        let response = stub_app()
            .oneshot(post_json("/api/blogs/save-draft", r#"{"title": "Hi"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = json_body(response).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["status"], "draft");
    }

    #[tokio::test]
    async fn should_return_bad_request_with_message_when_draft_is_empty() {
        let response = stub_app()
            .oneshot(post_json("/api/blogs/save-draft", "{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"], "Title or content is required to save a draft");
    }

    #[tokio::test]
    async fn should_return_bad_request_as_json_when_body_is_malformed() {
        let response = stub_app()
            .oneshot(post_json("/api/blogs/publish", "{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn should_return_not_found_for_non_integer_id() {
        let response = stub_app()
            .oneshot(
                Request::builder()
                    .uri("/api/blogs/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response).await;
        assert_eq!(body["error"], "Blog not found");
    }

    #[tokio::test]
    async fn should_pass_storage_message_through_with_server_error() {
        let response = broken_app()
            .oneshot(
                Request::builder()
                    .uri("/api/blogs")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["error"], "database is locked");
    }

    #[tokio::test]
    async fn should_check_validation_before_storage() {
        let response = broken_app()
            .oneshot(post_json("/api/blogs/publish", r#"{"title": "T"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"], "Content is required to publish");
    }
}
