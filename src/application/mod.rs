pub mod capability;
pub mod commands;
pub mod dto;
pub mod error;
pub mod fixtures;
pub mod forms;
pub mod ports;
pub mod queries;
pub mod services;
pub mod uploads;

pub use error::ApplicationResult;
