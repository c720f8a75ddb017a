mod service;

pub use service::SearchQueryService;
