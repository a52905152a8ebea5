// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;
use vitrine::application::{ports::time::Clock, services::ApplicationServices};
use vitrine::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    category::CategoryRepository,
};
use vitrine::presentation::http::{routes::build_router, state::HttpState};

use super::mocks::{FixedClock, InMemoryArticleRepo, InMemoryCategoryRepo};

pub fn make_services(
    articles: &Arc<InMemoryArticleRepo>,
    categories: &Arc<InMemoryCategoryRepo>,
    clock: &Arc<FixedClock>,
) -> Arc<ApplicationServices> {
    let write_repo: Arc<dyn ArticleWriteRepository> = articles.clone();
    let read_repo: Arc<dyn ArticleReadRepository> = articles.clone();
    let category_repo: Arc<dyn CategoryRepository> = categories.clone();
    let clock: Arc<dyn Clock> = clock.clone();

    Arc::new(ApplicationServices::new(
        write_repo,
        read_repo,
        category_repo,
        clock,
    ))
}

pub fn make_test_router(
    articles: &Arc<InMemoryArticleRepo>,
    categories: &Arc<InMemoryCategoryRepo>,
    clock: &Arc<FixedClock>,
) -> Router {
    build_router(HttpState {
        services: make_services(articles, categories, clock),
    })
}
