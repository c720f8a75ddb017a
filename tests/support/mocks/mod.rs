// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod memory;
pub mod security;
pub mod time;

pub use memory::MemoryStore;
pub use security::{
    ADMIN_ID, ADMIN_TOKEN, AUTHOR_ID, AUTHOR_TOKEN, DummyPasswordHasher, DummyTokenManager,
    READER_ID, READER_TOKEN,
};
pub use time::{FixedClock, fixed_now};
