mod delete;
mod follow;
mod login;
mod register;
mod role;
mod service;

pub use delete::UserDeletion;
pub use service::UserCommandService;
