use crate::application::uploads::UploadListener;
use crate::domain::media::{Avatar, Photo};
use serde::{Deserialize, Serialize};

/// A stored file name rehydrated with its public location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredFileView {
    pub file: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoDto {
    pub id: i64,
    pub article_id: i64,
    pub file: String,
    pub url: String,
}

impl PhotoDto {
    pub fn from_photo(photo: Photo, uploads: &UploadListener) -> Self {
        let StoredFileView { file, url } = uploads.post_load(&photo.file);
        Self {
            id: photo.id.into(),
            article_id: photo.article_id.into(),
            file,
            url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarDto {
    pub id: i64,
    pub user_id: i64,
    pub file: String,
    pub url: String,
}

impl AvatarDto {
    pub fn from_avatar(avatar: Avatar, uploads: &UploadListener) -> Self {
        let StoredFileView { file, url } = uploads.post_load(&avatar.file);
        Self {
            id: avatar.id.into(),
            user_id: avatar.user_id.into(),
            file,
            url,
        }
    }
}
