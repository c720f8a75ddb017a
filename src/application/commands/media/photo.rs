use super::MediaCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PhotoDto},
        error::{ApplicationError, ApplicationResult},
        ports::storage::UploadedFile,
    },
    domain::{
        article::{ArticleDetails, ArticleId},
        media::{NewPhoto, PhotoId, specifications::CanManagePhotoSpec},
    },
};

impl MediaCommandService {
    pub async fn add_photo(
        &self,
        actor: &AuthenticatedUser,
        article_id: i64,
        upload: UploadedFile,
    ) -> ApplicationResult<PhotoDto> {
        let details = self.authorized_article(actor, article_id).await?;
        if details.photo.is_some() {
            return Err(ApplicationError::conflict("article already has a cover photo"));
        }

        let file = self.uploads.pre_persist(&upload).await?;
        let inserted = self
            .photo_repo
            .insert(NewPhoto {
                article_id: details.article.id,
                file: file.clone(),
                created_at: self.clock.now(),
            })
            .await;

        match inserted {
            Ok(photo) => Ok(PhotoDto::from_photo(photo, &self.uploads)),
            Err(err) => {
                self.uploads.post_remove(&file).await;
                Err(err.into())
            }
        }
    }

    /// Stores the new file, points the photo at it, then deletes the old file.
    pub async fn replace_photo(
        &self,
        actor: &AuthenticatedUser,
        article_id: i64,
        photo_id: i64,
        upload: UploadedFile,
    ) -> ApplicationResult<PhotoDto> {
        let details = self.authorized_article(actor, article_id).await?;
        let photo_id = PhotoId::new(photo_id)?;
        let photo = self
            .photo_repo
            .find_by_id(photo_id)
            .await?
            .filter(|photo| photo.article_id == details.article.id)
            .ok_or_else(|| ApplicationError::not_found("photo not found"))?;

        let file = self.uploads.pre_persist(&upload).await?;
        let updated = match self
            .photo_repo
            .replace_file(photo.id, file.clone(), self.clock.now())
            .await
        {
            Ok(updated) => updated,
            Err(err) => {
                self.uploads.post_remove(&file).await;
                return Err(err.into());
            }
        };

        self.uploads.post_remove(&photo.file).await;
        Ok(PhotoDto::from_photo(updated, &self.uploads))
    }

    async fn authorized_article(
        &self,
        actor: &AuthenticatedUser,
        article_id: i64,
    ) -> ApplicationResult<ArticleDetails> {
        let article_id = ArticleId::new(article_id)?;
        let details = self
            .article_repo
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let spec = CanManagePhotoSpec::new(&actor.capabilities, &details.article, actor.id);
        if !spec.is_satisfied() {
            return Err(ApplicationError::forbidden(
                "only the author or an admin may change the cover photo",
            ));
        }
        Ok(details)
    }
}
