// src/domain/category/entity.rs
use crate::domain::category::value_objects::{CategoryId, CategoryName};

/// Grouping referenced by articles. Managed elsewhere; this service only
/// reads categories to resolve references and populate filter forms.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
}
