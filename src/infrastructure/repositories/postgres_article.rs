// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticleName, ArticleReadRepository, ArticleUpdate, ArticleWriteRepository,
    NewArticle, Price,
};
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    name: String,
    price: Decimal,
    category_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            name: ArticleName::new(row.name)?,
            price: Price::new(row.price)?,
            category_id: row.category_id.map(CategoryId::new).transpose()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn collect_articles(rows: Vec<ArticleRow>) -> DomainResult<Vec<Article>> {
    rows.into_iter().map(Article::try_from).collect()
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            name,
            price,
            category_id,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (name, price, category_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, name, price, category_id, created_at, updated_at",
        )
        .bind(name.as_str())
        .bind(Decimal::from(price))
        .bind(category_id.map(i64::from))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            name,
            price,
            original_updated_at,
            updated_at,
        } = update;

        // Compare-and-set on updated_at so an interleaved edit cannot be
        // silently overwritten.
        let maybe_row = sqlx::query_as::<_, ArticleRow>(
            "UPDATE articles SET name = $1, price = $2, updated_at = $3
             WHERE id = $4 AND updated_at = $5
             RETURNING id, name, price, category_id, created_at, updated_at",
        )
        .bind(name.as_str())
        .bind(Decimal::from(price))
        .bind(updated_at)
        .bind(i64::from(id))
        .bind(original_updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let row = maybe_row
            .ok_or_else(|| DomainError::Conflict("article update conflict, please retry".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, name, price, category_id, created_at, updated_at
             FROM articles WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, name, price, category_id, created_at, updated_at
             FROM articles ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        collect_articles(rows)
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, name, price, category_id, created_at, updated_at
             FROM articles WHERE name = $1 ORDER BY id",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        collect_articles(rows)
    }

    async fn find_by_price_range(&self, min: Price, max: Price) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, name, price, category_id, created_at, updated_at
             FROM articles WHERE price >= $1 AND price <= $2 ORDER BY id",
        )
        .bind(Decimal::from(min))
        .bind(Decimal::from(max))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        collect_articles(rows)
    }

    async fn find_by_category(&self, category: CategoryId) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, name, price, category_id, created_at, updated_at
             FROM articles WHERE category_id = $1 ORDER BY id",
        )
        .bind(i64::from(category))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        collect_articles(rows)
    }
}
