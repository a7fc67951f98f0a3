//! Blog post handlers.

use actix_web::{HttpResponse, http::header, web};
use uuid::Uuid;

use blog_core::DomainError;
use blog_core::domain::{Author, BlogPost, BlogPostUpdate};
use blog_core::error::RepoError;
use blog_core::ports::BaseRepository;
use blog_shared::dto::{
    AuthorDto, BlogPostResponse, CreateBlogPostRequest, UpdateBlogPostRequest,
};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

fn not_found(id: Uuid) -> DomainError {
    DomainError::NotFound {
        entity_type: "BlogPost",
        id,
    }
}

fn post_response(post: BlogPost) -> BlogPostResponse {
    BlogPostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        author: AuthorDto {
            first_name: post.author.first_name,
            last_name: post.author.last_name,
        },
        created: post.created,
    }
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<BlogPostResponse> = posts.into_iter().map(post_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state.posts.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

    Ok(HttpResponse::Ok().json(post_response(post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<CreateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = BlogPost::new(
        req.title,
        req.content,
        Author::new(req.author.first_name, req.author.last_name),
        req.created,
    );
    post.validate()?;

    let saved = state.posts.create(post).await?;
    tracing::info!(
        request_id = %request_id.as_str(),
        post_id = %saved.id,
        "Blog post created"
    );

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/posts/{}", saved.id)))
        .json(post_response(saved)))
}

/// PUT /posts/{id} - updates `title` and/or `content`.
pub async fn update_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<Uuid>,
    body: web::Json<UpdateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    if let Some(body_id) = req.id
        && body_id != id
    {
        return Err(AppError::BadRequest(format!(
            "Request path id ({}) and request body id ({}) must match",
            id, body_id
        )));
    }

    let update = BlogPostUpdate {
        title: req.title,
        content: req.content,
    };
    update.validate()?;

    let mut post = state.posts.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
    post.apply(update);
    state.posts.update(post).await?;

    tracing::info!(request_id = %request_id.as_str(), post_id = %id, "Blog post updated");
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state.posts.delete(id).await.map_err(|e| match e {
        RepoError::NotFound => AppError::from(not_found(id)),
        other => AppError::from(other),
    })?;

    tracing::info!(request_id = %request_id.as_str(), post_id = %id, "Blog post deleted");
    Ok(HttpResponse::NoContent().finish())
}
