pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use services::ArticleSlugService;
pub use value_objects::{ArticleBody, ArticleId, ArticleSlug, ArticleTitle, AuthorId};
