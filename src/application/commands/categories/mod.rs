mod service;

pub use service::{CategoryCommandService, CategoryDeletion};
