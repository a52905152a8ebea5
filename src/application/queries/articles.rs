use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        ArticleId, ArticleReadRepository, CategorySearch, PriceSearch, PropertySearch,
    },
};
use std::sync::Arc;

/// Listing filter. `search: None` means the filter form was never submitted.
pub struct ListArticlesQuery {
    pub search: Option<PropertySearch>,
}

pub struct GetArticleQuery {
    pub id: i64,
}

/// `search: None` covers both "not submitted" and "submitted but invalid";
/// neither issues a store query.
pub struct ArticlesByCategoryQuery {
    pub search: Option<CategorySearch>,
}

pub struct ArticlesByPriceQuery {
    pub search: Option<PriceSearch>,
}

pub struct ArticleQueryService {
    read_repo: Arc<dyn ArticleReadRepository>,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>) -> Self {
        Self { read_repo }
    }

    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let records = match query.search {
            None => self.read_repo.list().await?,
            // Submitting the filter with an empty name yields an empty result
            // set rather than the full listing.
            Some(search) if search.name.is_empty() => Vec::new(),
            Some(search) => self.read_repo.find_by_name(&search.name).await?,
        };
        Ok(records.into_iter().map(Into::into).collect())
    }

    pub async fn get_article(&self, query: GetArticleQuery) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(article.into())
    }

    pub async fn list_by_category(
        &self,
        query: ArticlesByCategoryQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let records = match query.search {
            None => Vec::new(),
            Some(CategorySearch {
                category: Some(category),
            }) => self.read_repo.find_by_category(category).await?,
            // Submitted with no category selected: fall back to the full
            // listing.
            Some(CategorySearch { category: None }) => self.read_repo.list().await?,
        };
        Ok(records.into_iter().map(Into::into).collect())
    }

    pub async fn list_by_price(
        &self,
        query: ArticlesByPriceQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let records = match query.search {
            None => Vec::new(),
            Some(search) => {
                self.read_repo
                    .find_by_price_range(search.min_price, search.max_price)
                    .await?
            }
        };
        Ok(records.into_iter().map(Into::into).collect())
    }
}
