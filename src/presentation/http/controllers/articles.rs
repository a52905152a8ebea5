// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, CategoryDto},
    queries::articles::{
        ArticlesByCategoryQuery, ArticlesByPriceQuery, GetArticleQuery, ListArticlesQuery,
    },
};
use crate::domain::article::{CategorySearch, Price, PriceSearch, PropertySearch};
use crate::domain::category::CategoryId;
use crate::presentation::http::error::{FieldError, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Form, Json,
    extract::{Path, Query},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

/// Name filter input. A missing `name` key means the filter form was never
/// submitted; an empty value is a submission with an empty name.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct PropertySearchParams {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct PriceSearchParams {
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct CategorySearchParams {
    pub category: Option<String>,
}

/// Creation/edit form fields. Everything arrives as text and is mapped to
/// typed values by `validate_article_form`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ArticleFormParams {
    pub name: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
}

/// Form-support document for the create/edit views: the article being edited
/// (absent on create) plus the categories available for selection.
#[derive(Debug, Serialize, ToSchema)]
pub struct ArticleFormView {
    pub article: Option<ArticleDto>,
    pub categories: Vec<CategoryDto>,
}

fn property_criteria(params: PropertySearchParams) -> Option<PropertySearch> {
    params.name.map(|name| PropertySearch { name })
}

/// A price window counts as submitted only when both bounds are present and
/// parse to valid prices; anything else is an invalid submission and issues
/// no query.
fn price_criteria(params: PriceSearchParams) -> Option<PriceSearch> {
    let min_price = parse_price(params.min_price?.trim())?;
    let max_price = parse_price(params.max_price?.trim())?;
    Some(PriceSearch {
        min_price,
        max_price,
    })
}

fn parse_price(raw: &str) -> Option<Price> {
    let value = raw.parse::<Decimal>().ok()?;
    Price::new(value).ok()
}

fn category_criteria(params: CategorySearchParams) -> Option<CategorySearch> {
    let raw = params.category?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(CategorySearch { category: None });
    }
    let category = CategoryId::new(raw.parse::<i64>().ok()?).ok()?;
    Some(CategorySearch {
        category: Some(category),
    })
}

#[derive(Debug)]
struct ArticleFormData {
    name: String,
    price: Decimal,
    category_id: Option<i64>,
}

/// Explicit per-operation validation: collects every invalid field so the
/// submitter gets the full list in one response.
fn validate_article_form(params: ArticleFormParams) -> Result<ArticleFormData, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = params.name.unwrap_or_default();
    if name.trim().is_empty() {
        errors.push(FieldError::new("name", "name is required"));
    }

    let price = match params.price.as_deref().map(str::trim) {
        None | Some("") => {
            errors.push(FieldError::new("price", "price is required"));
            None
        }
        Some(raw) => match raw.parse::<Decimal>() {
            Ok(value) => match Price::new(value) {
                Ok(price) => Some(Decimal::from(price)),
                Err(_) => {
                    errors.push(FieldError::new("price", "price cannot be negative"));
                    None
                }
            },
            Err(_) => {
                errors.push(FieldError::new("price", "price must be numeric"));
                None
            }
        },
    };

    let category_id = match params.category.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match raw.parse::<i64>() {
            Ok(id) if id > 0 => Some(id),
            _ => {
                errors.push(FieldError::new("category", "category must be a valid id"));
                None
            }
        },
    };

    match price {
        Some(price) if errors.is_empty() => Ok(ArticleFormData {
            name,
            price,
            category_id,
        }),
        _ => Err(errors),
    }
}

async fn run_article_listing(
    state: &HttpState,
    params: PropertySearchParams,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            search: property_criteria(params),
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/articles",
    params(PropertySearchParams),
    responses((status = 200, description = "Articles, optionally filtered by exact name.", body = [ArticleDto])),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PropertySearchParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    run_article_listing(&state, params).await
}

#[utoipa::path(
    post,
    path = "/articles",
    request_body(content = PropertySearchParams, content_type = "application/x-www-form-urlencoded"),
    responses((status = 200, description = "Articles matching the submitted name filter.", body = [ArticleDto])),
    tag = "Articles"
)]
pub async fn search_articles(
    Extension(state): Extension<HttpState>,
    Form(params): Form<PropertySearchParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    run_article_listing(&state, params).await
}

#[utoipa::path(
    get,
    path = "/articles/details/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "One article.", body = ArticleDto),
        (status = 404, description = "No article with this id.")
    ),
    tag = "Articles"
)]
pub async fn article_details(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article(GetArticleQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/articles/create",
    responses((status = 200, description = "Form-support data for article creation.", body = ArticleFormView)),
    tag = "Articles"
)]
pub async fn new_article_form(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<ArticleFormView>> {
    let categories = state
        .services
        .category_queries
        .list_categories()
        .await
        .into_http()?;

    Ok(Json(ArticleFormView {
        article: None,
        categories,
    }))
}

#[utoipa::path(
    post,
    path = "/articles/create",
    request_body(content = ArticleFormParams, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "The created article.", body = ArticleDto),
        (status = 400, description = "Invalid form fields.")
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Form(params): Form<ArticleFormParams>,
) -> HttpResult<Json<ArticleDto>> {
    let form = validate_article_form(params).map_err(HttpError::from_form_errors)?;

    state
        .services
        .article_commands
        .create_article(CreateArticleCommand {
            name: form.name,
            price: form.price,
            category_id: form.category_id,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/articles/edit/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Form-support data for editing.", body = ArticleFormView),
        (status = 404, description = "No article with this id.")
    ),
    tag = "Articles"
)]
pub async fn edit_article_form(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleFormView>> {
    let article = state
        .services
        .article_queries
        .get_article(GetArticleQuery { id })
        .await
        .into_http()?;
    let categories = state
        .services
        .category_queries
        .list_categories()
        .await
        .into_http()?;

    Ok(Json(ArticleFormView {
        article: Some(article),
        categories,
    }))
}

#[utoipa::path(
    post,
    path = "/articles/edit/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body(content = ArticleFormParams, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "The updated article.", body = ArticleDto),
        (status = 400, description = "Invalid form fields."),
        (status = 404, description = "No article with this id."),
        (status = 409, description = "The article changed while it was being edited.")
    ),
    tag = "Articles"
)]
pub async fn edit_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Form(params): Form<ArticleFormParams>,
) -> HttpResult<Json<ArticleDto>> {
    let form = validate_article_form(params).map_err(HttpError::from_form_errors)?;

    // Only name and price are editable; a category in the form body is
    // validated but not applied.
    state
        .services
        .article_commands
        .update_article(UpdateArticleCommand {
            id,
            name: form.name,
            price: form.price,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/articles/delete/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article was deleted."),
        (status = 404, description = "No article with this id.")
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

async fn run_category_listing(
    state: &HttpState,
    params: CategorySearchParams,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_by_category(ArticlesByCategoryQuery {
            search: category_criteria(params),
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/art_cat/",
    params(CategorySearchParams),
    responses((status = 200, description = "Articles in the selected category; all articles when the filter is submitted empty.", body = [ArticleDto])),
    tag = "Articles"
)]
pub async fn articles_by_category(
    Extension(state): Extension<HttpState>,
    Query(params): Query<CategorySearchParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    run_category_listing(&state, params).await
}

#[utoipa::path(
    post,
    path = "/art_cat/",
    request_body(content = CategorySearchParams, content_type = "application/x-www-form-urlencoded"),
    responses((status = 200, description = "Articles in the submitted category.", body = [ArticleDto])),
    tag = "Articles"
)]
pub async fn search_articles_by_category(
    Extension(state): Extension<HttpState>,
    Form(params): Form<CategorySearchParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    run_category_listing(&state, params).await
}

async fn run_price_listing(
    state: &HttpState,
    params: PriceSearchParams,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_by_price(ArticlesByPriceQuery {
            search: price_criteria(params),
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/art_prix/",
    params(PriceSearchParams),
    responses((status = 200, description = "Articles inside the inclusive price window.", body = [ArticleDto])),
    tag = "Articles"
)]
pub async fn articles_by_price(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PriceSearchParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    run_price_listing(&state, params).await
}

#[utoipa::path(
    post,
    path = "/art_prix/",
    request_body(content = PriceSearchParams, content_type = "application/x-www-form-urlencoded"),
    responses((status = 200, description = "Articles inside the submitted price window.", body = [ArticleDto])),
    tag = "Articles"
)]
pub async fn search_articles_by_price(
    Extension(state): Extension<HttpState>,
    Form(params): Form<PriceSearchParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    run_price_listing(&state, params).await
}
