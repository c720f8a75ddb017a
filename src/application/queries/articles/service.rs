use std::sync::Arc;

use crate::{
    application::{
        dto::{ArticleDto, PaginatedResult},
        error::{ApplicationError, ApplicationResult},
        ports::markdown::MarkdownRenderer,
        uploads::UploadListener,
    },
    domain::{
        article::{ArticleDetails, ArticleFilter, ArticleId, ArticleReadRepository},
        category::CategoryRepository,
        comment::CommentRepository,
        pagination::{ARTICLES_PER_PAGE, PageRequest},
        tag::TagRepository,
    },
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
    pub(super) uploads: Arc<UploadListener>,
    pub(super) markdown: Arc<dyn MarkdownRenderer>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        tag_repo: Arc<dyn TagRepository>,
        uploads: Arc<UploadListener>,
        markdown: Arc<dyn MarkdownRenderer>,
    ) -> Self {
        Self {
            read_repo,
            comment_repo,
            category_repo,
            tag_repo,
            uploads,
            markdown,
        }
    }

    pub(super) async fn load(&self, id: i64) -> ApplicationResult<ArticleDetails> {
        let id = ArticleId::new(id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }

    pub(super) async fn page_of(
        &self,
        filter: ArticleFilter,
        page: u32,
    ) -> ApplicationResult<PaginatedResult<ArticleDto>> {
        let page = self
            .read_repo
            .list(filter, PageRequest::new(page, ARTICLES_PER_PAGE))
            .await?;
        Ok(PaginatedResult::from_page(page, |details| {
            ArticleDto::from_details(details, &self.uploads)
        }))
    }
}
