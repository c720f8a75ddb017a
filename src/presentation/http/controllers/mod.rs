// src/presentation/http/controllers/mod.rs
use serde::Deserialize;

pub mod articles;
pub mod auth;
pub mod authors;
pub mod categories;
pub mod media;
pub mod search;
pub mod subscriptions;
pub mod tags;
pub mod users;

fn first_page() -> u32 {
    1
}

/// `?page=N`, one-based.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageParams {
    #[serde(default = "first_page")]
    pub page: u32,
}

pub(crate) fn author_route(id: impl std::fmt::Display) -> String {
    format!("/authors/{id}")
}

pub(crate) fn article_route(id: impl std::fmt::Display) -> String {
    format!("/articles/{id}")
}
