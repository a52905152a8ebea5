// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use vitrine::application::ports::time::Clock;
use vitrine::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleUpdate, ArticleWriteRepository, NewArticle,
    Price,
};
use vitrine::domain::category::{Category, CategoryId, CategoryRepository};
use vitrine::domain::errors::{DomainError, DomainResult};

/* -------------------------------- Article store -------------------------------- */

/// In-memory article store backing both repository traits. A BTreeMap keyed
/// by id reproduces the ascending-id listing order of the real store.
pub struct InMemoryArticleRepo {
    inner: Mutex<BTreeMap<i64, Article>>,
    next_id: AtomicI64,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn seeded(articles: Vec<Article>) -> Self {
        let next = articles
            .iter()
            .map(|a| i64::from(a.id))
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            inner: Mutex::new(
                articles
                    .into_iter()
                    .map(|a| (i64::from(a.id), a))
                    .collect(),
            ),
            next_id: AtomicI64::new(next),
        }
    }

    pub fn snapshot(&self, id: i64) -> Option<Article> {
        self.inner.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut map = self.inner.lock().unwrap();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = Article {
            id: ArticleId::new(id)?,
            name: article.name,
            price: article.price,
            category_id: article.category_id,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        map.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut map = self.inner.lock().unwrap();
        let article = map
            .get_mut(&i64::from(update.id))
            .filter(|a| a.updated_at == update.original_updated_at)
            .ok_or_else(|| {
                DomainError::Conflict("article update conflict, please retry".into())
            })?;
        article.name = update.name;
        article.price = update.price;
        article.updated_at = update.updated_at;
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut map = self.inner.lock().unwrap();
        map.remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.inner.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        Ok(self.inner.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Vec<Article>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .values()
            .filter(|a| a.name.as_str() == name)
            .cloned()
            .collect())
    }

    async fn find_by_price_range(&self, min: Price, max: Price) -> DomainResult<Vec<Article>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .values()
            .filter(|a| min <= a.price && a.price <= max)
            .cloned()
            .collect())
    }

    async fn find_by_category(&self, category: CategoryId) -> DomainResult<Vec<Article>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .values()
            .filter(|a| a.category_id == Some(category))
            .cloned()
            .collect())
    }
}

/* -------------------------------- Category store -------------------------------- */

pub struct InMemoryCategoryRepo {
    inner: Mutex<BTreeMap<i64, Category>>,
}

impl InMemoryCategoryRepo {
    pub fn empty() -> Self {
        Self {
            inner: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn seeded(categories: Vec<Category>) -> Self {
        Self {
            inner: Mutex::new(
                categories
                    .into_iter()
                    .map(|c| (i64::from(c.id), c))
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepo {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.inner.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        Ok(self.inner.lock().unwrap().values().cloned().collect())
    }
}

/* -------------------------------- Clock -------------------------------- */

/// Deterministic clock; `advance` lets a test move time between operations.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += delta;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
