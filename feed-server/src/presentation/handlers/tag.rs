use crate::application::tag_service::TagService;
use crate::data::tag_repository::SqliteTagRepository;
use crate::domain::error::DomainError;
use crate::presentation::handlers::request_id;
use actix_web::{HttpRequest, HttpResponse, get, web};
use tracing::debug;

#[get("/tags")]
async fn list_tags(
    req: HttpRequest,
    tags: web::Data<TagService<SqliteTagRepository>>,
) -> Result<HttpResponse, DomainError> {
    let tags = tags.list_tags().await?;

    debug!(
        request_id = %request_id(&req),
        count = tags.len(),
        "tags retrieved"
    );

    Ok(HttpResponse::Ok().json(tags))
}
