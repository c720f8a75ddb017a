use std::sync::Arc;

use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        forms::TagsTransformer,
        ports::time::Clock,
        uploads::UploadListener,
    },
    domain::{
        article::{ArticleDetails, ArticleId, ArticleReadRepository, ArticleWriteRepository},
        category::{CategoryId, CategoryRepository},
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) tags: Arc<TagsTransformer>,
    pub(super) uploads: Arc<UploadListener>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        tags: Arc<TagsTransformer>,
        uploads: Arc<UploadListener>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            tags,
            uploads,
            clock,
        }
    }

    pub(super) async fn load(&self, id: ArticleId) -> ApplicationResult<ArticleDetails> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }

    pub(super) async fn ensure_category_exists(&self, id: CategoryId) -> ApplicationResult<()> {
        match self.category_repo.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(ApplicationError::invalid_field(
                "category_id",
                "the selected category does not exist",
            )),
        }
    }

    pub(super) async fn reload(&self, id: ArticleId) -> ApplicationResult<ArticleDto> {
        let details = self.load(id).await?;
        Ok(ArticleDto::from_details(details, &self.uploads))
    }
}
