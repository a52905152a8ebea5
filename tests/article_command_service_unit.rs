// tests/article_command_service_unit.rs
use std::sync::Arc;

use chrono::Duration;

mod support;

use support::builders::{BASE_TIME, article, category, dec};
use support::helpers::make_services;
use support::mocks::{FixedClock, InMemoryArticleRepo, InMemoryCategoryRepo};
use vitrine::application::commands::articles::{
    CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand,
};
use vitrine::application::error::ApplicationError;
use vitrine::application::queries::articles::GetArticleQuery;
use vitrine::domain::article::{ArticleId, ArticleName, ArticleUpdate, ArticleWriteRepository};
use vitrine::domain::errors::DomainError;

fn fresh_env() -> (
    Arc<InMemoryArticleRepo>,
    Arc<InMemoryCategoryRepo>,
    Arc<FixedClock>,
) {
    let articles = Arc::new(InMemoryArticleRepo::new());
    let categories = Arc::new(InMemoryCategoryRepo::seeded(vec![
        category(1, "Tools"),
        category(2, "Garden"),
    ]));
    let clock = Arc::new(FixedClock::at(*BASE_TIME));
    (articles, categories, clock)
}

#[tokio::test]
async fn create_assigns_id_and_persists() {
    let (articles, categories, clock) = fresh_env();
    let services = make_services(&articles, &categories, &clock);

    let created = services
        .article_commands
        .create_article(CreateArticleCommand {
            name: "Hammer".into(),
            price: dec("9.99"),
            category_id: None,
        })
        .await
        .unwrap();

    assert_eq!(created.id, 1);
    assert_eq!(created.name, "Hammer");
    assert_eq!(created.price, dec("9.99"));
    assert_eq!(created.category_id, None);

    let stored = articles.snapshot(1).unwrap();
    assert_eq!(stored.name.as_str(), "Hammer");
    assert_eq!(stored.price.amount(), dec("9.99"));
}

#[tokio::test]
async fn create_resolves_the_category_reference() {
    let (articles, categories, clock) = fresh_env();
    let services = make_services(&articles, &categories, &clock);

    let created = services
        .article_commands
        .create_article(CreateArticleCommand {
            name: "Rake".into(),
            price: dec("14.50"),
            category_id: Some(2),
        })
        .await
        .unwrap();

    assert_eq!(created.category_id, Some(2));
}

#[tokio::test]
async fn create_rejects_an_unknown_category() {
    let (articles, categories, clock) = fresh_env();
    let services = make_services(&articles, &categories, &clock);

    let err = services
        .article_commands
        .create_article(CreateArticleCommand {
            name: "Rake".into(),
            price: dec("14.50"),
            category_id: Some(99),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn create_rejects_blank_name_and_negative_price() {
    let (articles, categories, clock) = fresh_env();
    let services = make_services(&articles, &categories, &clock);

    let blank = services
        .article_commands
        .create_article(CreateArticleCommand {
            name: "   ".into(),
            price: dec("1.00"),
            category_id: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(
        blank,
        ApplicationError::Domain(DomainError::Validation(_))
    ));

    let negative = services
        .article_commands
        .create_article(CreateArticleCommand {
            name: "Hammer".into(),
            price: dec("-1.00"),
            category_id: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(
        negative,
        ApplicationError::Domain(DomainError::Validation(_))
    ));
}

#[tokio::test]
async fn update_changes_only_name_and_price() {
    let articles = Arc::new(InMemoryArticleRepo::seeded(vec![article(
        1,
        "Hammer",
        "9.99",
        Some(2),
    )]));
    let categories = Arc::new(InMemoryCategoryRepo::seeded(vec![category(2, "Garden")]));
    let clock = Arc::new(FixedClock::at(*BASE_TIME));
    clock.advance(Duration::minutes(5));
    let services = make_services(&articles, &categories, &clock);

    let updated = services
        .article_commands
        .update_article(UpdateArticleCommand {
            id: 1,
            name: "Sledgehammer".into(),
            price: dec("24.50"),
        })
        .await
        .unwrap();

    assert_eq!(updated.name, "Sledgehammer");
    assert_eq!(updated.price, dec("24.50"));
    // the category reference survives the edit untouched
    assert_eq!(updated.category_id, Some(2));

    let stored = articles.snapshot(1).unwrap();
    assert_eq!(stored.created_at, *BASE_TIME);
    assert_eq!(stored.updated_at, *BASE_TIME + Duration::minutes(5));
}

#[tokio::test]
async fn update_of_a_missing_article_is_not_found() {
    let (articles, categories, clock) = fresh_env();
    let services = make_services(&articles, &categories, &clock);

    let err = services
        .article_commands
        .update_article(UpdateArticleCommand {
            id: 42,
            name: "Ghost".into(),
            price: dec("1.00"),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn stale_update_is_a_conflict() {
    let articles = Arc::new(InMemoryArticleRepo::seeded(vec![article(
        1, "Hammer", "9.99", None,
    )]));

    let stale = ArticleUpdate {
        id: ArticleId::new(1).unwrap(),
        name: ArticleName::new("Sledgehammer").unwrap(),
        price: support::builders::price("24.50"),
        original_updated_at: *BASE_TIME - Duration::minutes(1),
        updated_at: *BASE_TIME + Duration::minutes(5),
    };

    let err = ArticleWriteRepository::update(articles.as_ref(), stale)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));
}

#[tokio::test]
async fn delete_then_find_is_not_found() {
    let articles = Arc::new(InMemoryArticleRepo::seeded(vec![article(
        1, "Hammer", "9.99", None,
    )]));
    let categories = Arc::new(InMemoryCategoryRepo::empty());
    let clock = Arc::new(FixedClock::at(*BASE_TIME));
    let services = make_services(&articles, &categories, &clock);

    services
        .article_commands
        .delete_article(DeleteArticleCommand { id: 1 })
        .await
        .unwrap();

    let err = services
        .article_queries
        .get_article(GetArticleQuery { id: 1 })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn delete_of_a_missing_article_is_not_found() {
    let (articles, categories, clock) = fresh_env();
    let services = make_services(&articles, &categories, &clock);

    let err = services
        .article_commands
        .delete_article(DeleteArticleCommand { id: 7 })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}
