pub mod article;
pub mod category;
pub mod codes;
pub mod comment;
pub mod errors;
pub mod media;
pub mod pagination;
pub mod tag;
pub mod user;
