mod service;

pub use service::CommentCommandService;
