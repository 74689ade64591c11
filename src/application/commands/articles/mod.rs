// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod service;
mod update;
mod validate;

pub use create::{ArticleDraft, CreateArticleCommand, CreateArticleOutcome};
pub use delete::DeleteArticleCommand;
pub use service::{ArticleCommandService, ArticleRef};
pub use update::UpdateArticleCommand;
pub use validate::{FieldErrors, TITLE_MIN_LENGTH, validate_draft};
