// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleName, NewArticle, Price},
        category::CategoryId,
    },
};
use rust_decimal::Decimal;

pub struct CreateArticleCommand {
    pub name: String,
    pub price: Decimal,
    pub category_id: Option<i64>,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let name = ArticleName::new(command.name)?;
        let price = Price::new(command.price)?;

        let category_id = match command.category_id {
            Some(raw) => {
                let id = CategoryId::new(raw)?;
                self.category_repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| ApplicationError::validation("unknown category"))?;
                Some(id)
            }
            None => None,
        };

        let now = self.clock.now();
        let new_article = NewArticle {
            name,
            price,
            category_id,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        Ok(created.into())
    }
}
