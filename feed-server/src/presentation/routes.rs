use crate::infrastructure::config::AppConfig;
use crate::presentation::dto::HealthResponse;
use crate::presentation::handlers;
use actix_cors::Cors;
use actix_web::{HttpResponse, Responder, web};
use chrono::Utc;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .service(handlers::tag::list_tags)
        .service(handlers::post::featured_post)
        .service(handlers::post::list_posts)
        .service(handlers::post::toggle_like);
}

pub fn build_cors(config: &AppConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![actix_web::http::header::CONTENT_TYPE])
        .max_age(3600);

    if config.allows_any_origin() {
        return cors.allow_any_origin();
    }

    for origin in &config.cors_origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}

async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::post_service::PostService;
    use crate::application::tag_service::TagService;
    use crate::data::post_repository::SqlitePostRepository;
    use crate::data::tag_repository::SqliteTagRepository;
    use crate::infrastructure::database::seeded_pool;
    use crate::infrastructure::fixtures::Fixtures;
    use crate::presentation::middleware::RequestIdMiddleware;
    use actix_web::body::MessageBody;
    use actix_web::dev::{Service, ServiceResponse};
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::Value;
    use std::collections::HashMap;
    use std::sync::Arc;

    type Request = actix_http::Request;

    macro_rules! demo_app {
        ($fixtures:expr) => {{
            let pool = seeded_pool(&$fixtures).await;
            let config = AppConfig::from_lookup(|_| None).unwrap();
            let post_service = PostService::new(Arc::new(SqlitePostRepository::new(pool.clone())));
            let tag_service = TagService::new(Arc::new(SqliteTagRepository::new(pool)));

            test::init_service(
                App::new()
                    .wrap(RequestIdMiddleware)
                    .wrap(build_cors(&config))
                    .app_data(web::Data::new(post_service))
                    .app_data(web::Data::new(tag_service))
                    .configure(configure),
            )
            .await
        }};
    }

    async fn get_json<S, B>(app: &S, uri: &str) -> Value
    where
        S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
        B: MessageBody,
    {
        let res = test::call_service(app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(res.status(), StatusCode::OK, "GET {uri}");
        test::read_body_json(res).await
    }

    async fn like<S, B>(app: &S, post_id: &str) -> ServiceResponse<B>
    where
        S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    {
        let req = test::TestRequest::post()
            .uri(&format!("/like/{post_id}"))
            .to_request();
        test::call_service(app, req).await
    }

    fn post_by_id(posts: &Value, id: i64) -> Value {
        posts
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["id"] == id)
            .cloned()
            .unwrap()
    }

    fn ids(posts: &Value) -> Vec<i64> {
        posts
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_i64().unwrap())
            .collect()
    }

    #[actix_web::test]
    async fn lists_tags() {
        let app = demo_app!(Fixtures::demo());
        let tags = get_json(&app, "/tags").await;

        let tags = tags.as_array().unwrap();
        assert_eq!(tags.len(), 11);
        assert_eq!(tags[0], serde_json::json!({ "id": 1, "name": "anime" }));
    }

    #[actix_web::test]
    async fn lists_posts_with_tags_likes_and_liked() {
        let app = demo_app!(Fixtures::demo());
        let posts = get_json(&app, "/posts").await;

        assert_eq!(ids(&posts), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(
            post_by_id(&posts, 1),
            serde_json::json!({
                "id": 1,
                "username": "Ellie",
                "content": "Just finished watching the latest episode of my favorite anime! So intense!",
                "created_at": "2024-09-24T14:30:00",
                "tags": ["anime", "reviews"],
                "likes": 3,
                "liked": true,
            })
        );
    }

    #[actix_web::test]
    async fn filters_posts_by_tag() {
        let app = demo_app!(Fixtures::demo());

        assert_eq!(ids(&get_json(&app, "/posts?tag=manga").await), vec![6]);
        assert_eq!(get_json(&app, "/posts?tag=unknown").await, serde_json::json!([]));
        assert_eq!(ids(&get_json(&app, "/posts?tag=").await).len(), 6);
    }

    #[actix_web::test]
    async fn sorts_posts() {
        let app = demo_app!(Fixtures::demo());

        let latest = get_json(&app, "/posts?sort=latest").await;
        let stamps: Vec<&str> = latest
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["created_at"].as_str().unwrap())
            .collect();
        assert!(stamps.windows(2).all(|w| w[0] <= w[1]));

        let popular = get_json(&app, "/posts?sort=popular").await;
        let likes: Vec<i64> = popular
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["likes"].as_i64().unwrap())
            .collect();
        assert_eq!(likes.len(), 6);
        assert!(likes.windows(2).all(|w| w[0] >= w[1]));

        let unknown = get_json(&app, "/posts?sort=sideways").await;
        assert_eq!(ids(&unknown), vec![1, 2, 3, 4, 5, 6]);
    }

    #[actix_web::test]
    async fn like_toggles_post_one() {
        let app = demo_app!(Fixtures::demo());

        let res = like(&app, "1").await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, serde_json::json!({ "status": "Success" }));

        let post = post_by_id(&get_json(&app, "/posts").await, 1);
        assert_eq!(post["likes"], 2);
        assert_eq!(post["liked"], false);

        assert_eq!(like(&app, "1").await.status(), StatusCode::OK);
        let post = post_by_id(&get_json(&app, "/posts").await, 1);
        assert_eq!(post["likes"], 3);
        assert_eq!(post["liked"], true);
    }

    #[actix_web::test]
    async fn like_rejects_unknown_or_malformed_posts() {
        let app = demo_app!(Fixtures::demo());

        let res = like(&app, "42").await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["details"]["post_id"], 42);

        assert_eq!(like(&app, "abc").await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn featured_post_matches_listing() {
        let app = demo_app!(Fixtures::demo());
        let posts = get_json(&app, "/posts").await;

        let mut seen = HashMap::new();
        for _ in 0..20 {
            let featured = get_json(&app, "/posts/featured").await;
            let id = featured["id"].as_i64().unwrap();
            assert_eq!(featured, post_by_id(&posts, id));
            *seen.entry(id).or_insert(0) += 1;
        }
        assert!(!seen.is_empty());
    }

    #[actix_web::test]
    async fn featured_post_on_empty_store_is_not_found() {
        let app = demo_app!(Fixtures::empty());

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/posts/featured").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(get_json(&app, "/posts").await, serde_json::json!([]));
        assert_eq!(get_json(&app, "/tags").await, serde_json::json!([]));
    }

    #[actix_web::test]
    async fn allows_any_origin() {
        let app = demo_app!(Fixtures::demo());

        let req = test::TestRequest::get()
            .uri("/tags")
            .insert_header(("Origin", "http://frontend.example"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().contains_key("access-control-allow-origin"));
        assert!(res.headers().contains_key("x-request-id"));
    }

    #[actix_web::test]
    async fn health_reports_ok() {
        let app = demo_app!(Fixtures::empty());
        let health = get_json(&app, "/health").await;
        assert_eq!(health["status"], "ok");
    }
}
