use crate::domain::category::entity::Category;
use crate::domain::category::value_objects::CategoryId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    /// All categories, ordered by ascending id.
    async fn list(&self) -> DomainResult<Vec<Category>>;
}
