// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::domain::article::AuthorId;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Principal attributed to articles created over HTTP until a real
    /// authentication context exists.
    pub default_author: AuthorId,
    pub page_size: u32,
}
