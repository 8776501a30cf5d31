//! JSON REST handlers for blogs.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use inkwell_app::ports::BlogRepository;
use inkwell_app::services::blog_service::Upsert;
use inkwell_domain::blog::Blog;
use inkwell_domain::changes::{DraftChanges, PublishChanges};
use inkwell_domain::error::{InkwellError, NotFoundError};
use inkwell_domain::id::BlogId;
use inkwell_domain::tags::Tags;

use crate::error::ApiError;
use crate::state::AppState;

const DELETED_MESSAGE: &str = "Blog deleted successfully";

/// Tags as sent by clients: a JSON array, or one comma-separated string.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum TagsInput {
    List(Vec<String>),
    Text(String),
}

impl From<TagsInput> for Tags {
    fn from(input: TagsInput) -> Self {
        match input {
            TagsInput::List(values) => Tags::new(values),
            TagsInput::Text(text) => Tags::parse_list(&text),
        }
    }
}

/// Request body shared by the save-draft and publish endpoints.
#[derive(Deserialize)]
pub struct BlogRequest {
    pub id: Option<BlogId>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<TagsInput>,
}

impl BlogRequest {
    fn into_draft(self) -> (Option<BlogId>, DraftChanges) {
        let changes = DraftChanges {
            title: self.title,
            content: self.content,
            tags: self.tags.map(Tags::from),
        };
        (self.id, changes)
    }

    fn into_publish(self) -> (Option<BlogId>, PublishChanges) {
        let changes = PublishChanges {
            title: self.title,
            content: self.content,
            tags: self.tags.map(Tags::from),
        };
        (self.id, changes)
    }
}

#[derive(Serialize)]
struct MessageBody {
    message: &'static str,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Blog>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Blog>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the save-draft and publish endpoints.
pub enum SaveResponse {
    Created(Json<Blog>),
    Updated(Json<Blog>),
}

impl From<Upsert<Blog>> for SaveResponse {
    fn from(outcome: Upsert<Blog>) -> Self {
        match outcome {
            Upsert::Created(blog) => Self::Created(Json(blog)),
            Upsert::Updated(blog) => Self::Updated(Json(blog)),
        }
    }
}

impl IntoResponse for SaveResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
            Self::Updated(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted => Json(MessageBody {
                message: DELETED_MESSAGE,
            })
            .into_response(),
        }
    }
}

/// Path ids that are not integers can never match a blog.
fn parse_id(raw: &str) -> Result<BlogId, ApiError> {
    raw.parse().map_err(|_| {
        ApiError::from(InkwellError::from(NotFoundError {
            entity: "Blog",
            id: raw.to_string(),
        }))
    })
}

/// `POST /api/blogs/save-draft`
pub async fn save_draft<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<BlogRequest>, JsonRejection>,
) -> Result<SaveResponse, ApiError>
where
    R: BlogRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let (id, changes) = req.into_draft();
    let outcome = state.blog_service.save_draft(id, changes).await?;
    Ok(outcome.into())
}

/// `POST /api/blogs/publish`
pub async fn publish<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<BlogRequest>, JsonRejection>,
) -> Result<SaveResponse, ApiError>
where
    R: BlogRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let (id, changes) = req.into_publish();
    let outcome = state.blog_service.publish(id, changes).await?;
    Ok(outcome.into())
}

/// `GET /api/blogs`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: BlogRepository + Send + Sync + 'static,
{
    let blogs = state.blog_service.list_blogs().await?;
    Ok(ListResponse::Ok(Json(blogs)))
}

/// `GET /api/blogs/{id}`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: BlogRepository + Send + Sync + 'static,
{
    let blog_id = parse_id(&id)?;
    let blog = state.blog_service.get_blog(blog_id).await?;
    Ok(GetResponse::Ok(Json(blog)))
}

/// `DELETE /api/blogs/{id}`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: BlogRepository + Send + Sync + 'static,
{
    let blog_id = parse_id(&id)?;
    state.blog_service.delete_blog(blog_id).await?;
    Ok(DeleteResponse::Deleted)
}
