pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{Article, ArticleDetails, ArticleUpdate, NewArticle};
pub use repository::{ArticleFilter, ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleBody, ArticleId, ArticleTitle};
