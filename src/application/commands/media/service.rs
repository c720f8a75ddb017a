use std::sync::Arc;

use crate::application::{ports::time::Clock, uploads::UploadListener};
use crate::domain::{
    article::ArticleReadRepository,
    media::{AvatarRepository, PhotoRepository},
};

/// Upload flows for article cover photos and user avatars.
pub struct MediaCommandService {
    pub(super) photo_repo: Arc<dyn PhotoRepository>,
    pub(super) avatar_repo: Arc<dyn AvatarRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) uploads: Arc<UploadListener>,
    pub(super) clock: Arc<dyn Clock>,
}

impl MediaCommandService {
    pub fn new(
        photo_repo: Arc<dyn PhotoRepository>,
        avatar_repo: Arc<dyn AvatarRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        uploads: Arc<UploadListener>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            photo_repo,
            avatar_repo,
            article_repo,
            uploads,
            clock,
        }
    }
}
