// src/presentation/http/openapi.rs
use crate::application::dto::{ArticleDto, CategoryDto};
use crate::presentation::http::controllers::articles::{
    ArticleFormParams, ArticleFormView, CategorySearchParams, PriceSearchParams,
    PropertySearchParams,
};
use crate::presentation::http::error::FieldError;
use axum::Router;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::routes::health,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::search_articles,
        crate::presentation::http::controllers::articles::article_details,
        crate::presentation::http::controllers::articles::new_article_form,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::edit_article_form,
        crate::presentation::http::controllers::articles::edit_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::articles::articles_by_category,
        crate::presentation::http::controllers::articles::search_articles_by_category,
        crate::presentation::http::controllers::articles::articles_by_price,
        crate::presentation::http::controllers::articles::search_articles_by_price,
    ),
    components(schemas(
        ArticleDto,
        CategoryDto,
        ArticleFormView,
        ArticleFormParams,
        PropertySearchParams,
        PriceSearchParams,
        CategorySearchParams,
        FieldError,
        StatusResponse,
    )),
    tags(
        (name = "Articles", description = "Article catalogue: CRUD and filtered listings."),
        (name = "System", description = "Service plumbing.")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
}
