// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{AuthorProfile, AuthorSummary, NewUser, User};
pub use repository::{FollowRepository, UserRepository};
pub use value_objects::{
    Bio, BlogName, Capability, Email, FirstName, PasswordHash, Role, UserId, capabilities_for,
};
