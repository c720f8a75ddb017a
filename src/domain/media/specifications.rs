use std::collections::HashSet;

use crate::domain::article::Article;
use crate::domain::media::entity::Avatar;
use crate::domain::user::{Capability, UserId};

/// Cover photos may be managed by the article's author or by an admin.
pub struct CanManagePhotoSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    article: &'a Article,
    user_id: UserId,
}

impl<'a> CanManagePhotoSpec<'a> {
    pub fn new(
        capabilities: &'a HashSet<Capability>,
        article: &'a Article,
        user_id: UserId,
    ) -> Self {
        Self {
            capabilities,
            article,
            user_id,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.has_capability("media", "manage:any")
            || (self.has_capability("media", "manage:own") && self.article.author_id == self.user_id)
    }

    fn has_capability(&self, resource: &str, action: &str) -> bool {
        self.capabilities
            .iter()
            .any(|cap| cap.matches(resource, action))
    }
}

/// Avatars belong to exactly one user and only that user may change them.
pub struct CanManageAvatarSpec<'a> {
    avatar: &'a Avatar,
    user_id: UserId,
}

impl<'a> CanManageAvatarSpec<'a> {
    pub fn new(avatar: &'a Avatar, user_id: UserId) -> Self {
        Self { avatar, user_id }
    }

    pub fn is_satisfied(&self) -> bool {
        self.avatar.user_id == self.user_id
    }
}
