use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticleName, ArticleUpdate, Price},
};
use rust_decimal::Decimal;

pub struct UpdateArticleCommand {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
}

impl ArticleCommandService {
    /// Apply a name/price edit. The category reference is not editable here.
    /// A concurrent edit of the same article between the load and the write
    /// surfaces as a conflict.
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let name = ArticleName::new(command.name)?;
        let price = Price::new(command.price)?;

        let original_updated_at = article.updated_at;
        article.set_listing(name.clone(), price, self.clock.now());

        let update = ArticleUpdate {
            id,
            name,
            price,
            original_updated_at,
            updated_at: article.updated_at,
        };

        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }
}
