// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{controllers::articles, openapi};
use axum::{Extension, Router, http::Method, routing::get};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route(
            "/articles",
            get(articles::list_articles).post(articles::search_articles),
        )
        .route("/articles/details/{id}", get(articles::article_details))
        .route(
            "/articles/create",
            get(articles::new_article_form).post(articles::create_article),
        )
        .route(
            "/articles/edit/{id}",
            get(articles::edit_article_form).post(articles::edit_article),
        )
        .route("/articles/delete/{id}", get(articles::delete_article))
        .route(
            "/art_cat/",
            get(articles::articles_by_category).post(articles::search_articles_by_category),
        )
        .route(
            "/art_prix/",
            get(articles::articles_by_price).post(articles::search_articles_by_price),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<openapi::StatusResponse> {
    axum::Json(openapi::StatusResponse {
        status: "ok".into(),
    })
}
