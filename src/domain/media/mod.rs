pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{Avatar, NewAvatar, NewPhoto, Photo};
pub use repository::{AvatarRepository, PhotoRepository};
pub use value_objects::{
    ALLOWED_IMAGE_TYPES, AvatarId, ImageFormat, MAX_IMAGE_BYTES, PhotoId, StoredFileName,
    validate_image,
};
