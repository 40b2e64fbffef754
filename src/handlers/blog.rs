use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::blog::{BlogPost, NewBlogPost};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct BlogPostRequest {
    pub title: String,
    pub content: String,
    pub author: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BlogPostResponse {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: Option<String>,
}

impl From<BlogPost> for BlogPostResponse {
    fn from(p: BlogPost) -> Self {
        Self {
            id: p.id,
            title: p.title,
            content: p.content,
            author: p.author,
        }
    }
}

/// POST /blog
#[utoipa::path(
    post,
    path = "/blog",
    request_body = BlogPostRequest,
    responses(
        (status = 201, description = "Post created", body = BlogPostResponse),
        (status = 422, description = "Malformed body"),
    ),
    tag = "blog"
)]
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<BlogPostRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let post = state.blog.create(NewBlogPost {
        title: body.title,
        content: body.content,
        author: body.author,
    })?;
    Ok(HttpResponse::Created().json(BlogPostResponse::from(post)))
}

/// GET /getBlog
///
/// Returns every post in creation order.
#[utoipa::path(
    get,
    path = "/getBlog",
    responses(
        (status = 200, description = "All posts", body = Vec<BlogPostResponse>),
    ),
    tag = "blog"
)]
pub async fn list_posts(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let posts: Vec<BlogPostResponse> = state
        .blog
        .list()?
        .into_iter()
        .map(BlogPostResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(posts))
}
