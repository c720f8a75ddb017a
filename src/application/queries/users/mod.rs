mod authors;
mod service;
mod subscriptions;

pub use service::UserQueryService;
