use crate::application::post_service::PostService;
use crate::data::post_repository::SqlitePostRepository;
use crate::domain::error::DomainError;
use crate::presentation::dto::{ListPostsQuery, StatusResponse};
use crate::presentation::handlers::request_id;
use actix_web::{HttpRequest, HttpResponse, get, post, web};
use tracing::{debug, info};

#[get("/posts")]
async fn list_posts(
    req: HttpRequest,
    posts: web::Data<PostService<SqlitePostRepository>>,
    query: web::Query<ListPostsQuery>,
) -> Result<HttpResponse, DomainError> {
    let posts = posts.list_posts(query.into_inner().into()).await?;

    debug!(
        request_id = %request_id(&req),
        count = posts.len(),
        "posts retrieved"
    );

    Ok(HttpResponse::Ok().json(posts))
}

#[get("/posts/featured")]
async fn featured_post(
    req: HttpRequest,
    posts: web::Data<PostService<SqlitePostRepository>>,
) -> Result<HttpResponse, DomainError> {
    let post = posts.featured_post().await?;

    debug!(
        request_id = %request_id(&req),
        post_id = post.id,
        "featured post picked"
    );

    Ok(HttpResponse::Ok().json(post))
}

#[post("/like/{post_id}")]
async fn toggle_like(
    req: HttpRequest,
    posts: web::Data<PostService<SqlitePostRepository>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, DomainError> {
    let post_id = path.into_inner();
    let outcome = posts.toggle_like(post_id).await?;

    info!(
        request_id = %request_id(&req),
        post_id,
        %outcome,
        "like toggled"
    );

    Ok(HttpResponse::Ok().json(StatusResponse::success()))
}
