use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub name: String,
    #[schema(value_type = String, example = "9.99")]
    pub price: Decimal,
    pub category_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            name: article.name.into(),
            price: article.price.into(),
            category_id: article.category_id.map(Into::into),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
