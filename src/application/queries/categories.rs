use crate::{
    application::{dto::CategoryDto, error::ApplicationResult},
    domain::category::CategoryRepository,
};
use std::sync::Arc;

pub struct CategoryQueryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryQueryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let records = self.repo.list().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
