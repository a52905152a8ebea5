use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, Price};
use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Persist a new article; the store assigns the id.
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Apply a name/price update. Fails with `Conflict` when the row no
    /// longer carries `original_updated_at`.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    /// Remove an article. Fails with `NotFound` when no row was removed.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

/// Read side of the article store. Every listing operation returns rows in
/// ascending id order (insertion order), kept deterministic for testability.
#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn list(&self) -> DomainResult<Vec<Article>>;
    /// Exact equality on the stored name, no substring matching.
    async fn find_by_name(&self, name: &str) -> DomainResult<Vec<Article>>;
    /// All articles with `min <= price <= max`, inclusive at both ends.
    async fn find_by_price_range(&self, min: Price, max: Price) -> DomainResult<Vec<Article>>;
    async fn find_by_category(&self, category: CategoryId) -> DomainResult<Vec<Article>>;
}
