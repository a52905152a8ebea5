pub mod entity;
pub mod repository;
pub mod search;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use search::{CategorySearch, PriceSearch, PropertySearch};
pub use value_objects::{ArticleId, ArticleName, Price};
