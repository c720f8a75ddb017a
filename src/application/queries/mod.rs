pub mod articles;
pub mod categories;
pub mod search;
pub mod users;
