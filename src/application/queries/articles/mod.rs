mod forms;
mod list;
mod service;
mod view;

pub use service::ArticleQueryService;
