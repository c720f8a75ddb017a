pub mod database;
pub mod markdown;
pub mod repositories;
pub mod security;
pub mod storage;
pub mod time;
pub mod util;
