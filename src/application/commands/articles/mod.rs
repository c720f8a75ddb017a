mod create;
mod delete;
mod service;
mod update;

pub use service::ArticleCommandService;
