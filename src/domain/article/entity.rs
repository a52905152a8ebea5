// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleName, Price};
use crate::domain::category::CategoryId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub name: ArticleName,
    pub price: Price,
    pub category_id: Option<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Replace the editable fields. The category reference is not editable
    /// through this path.
    pub fn set_listing(&mut self, name: ArticleName, price: Price, now: DateTime<Utc>) {
        self.name = name;
        self.price = price;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub name: ArticleName,
    pub price: Price,
    pub category_id: Option<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Name/price update for one article. `original_updated_at` is the
/// concurrency token: the store applies the update only if the row still
/// carries it.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub name: ArticleName,
    pub price: Price,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
