// src/infrastructure/repositories/mod.rs
mod sqlite_article;

pub use sqlite_article::{SqliteArticleReadRepository, SqliteArticleWriteRepository};
