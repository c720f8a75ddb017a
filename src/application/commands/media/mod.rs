mod avatar;
mod photo;
mod service;

pub use service::MediaCommandService;
