use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, ArticleViewDto, AuthenticatedUser, CommentDto, PaginatedResult},
        error::ApplicationResult,
    },
    domain::{
        article::specifications::CanUpdateArticleSpec,
        pagination::{COMMENTS_PER_PAGE, PageRequest},
    },
};

impl ArticleQueryService {
    /// Single article with its rendered body and a page of comments.
    pub async fn view_article(
        &self,
        actor: Option<&AuthenticatedUser>,
        id: i64,
        comments_page: u32,
    ) -> ApplicationResult<ArticleViewDto> {
        let details = self.load(id).await?;
        let comments = self
            .comment_repo
            .list_for_article(
                details.article.id,
                PageRequest::new(comments_page, COMMENTS_PER_PAGE),
            )
            .await?;

        let can_comment = actor.is_some_and(|user| user.has_capability("comments", "create"));
        let can_edit = actor.is_some_and(|user| {
            CanUpdateArticleSpec::new(&user.capabilities, &details.article, user.id).is_satisfied()
        });
        let body_html = self.markdown.render(details.article.body.as_str());

        Ok(ArticleViewDto {
            article: ArticleDto::from_details(details, &self.uploads),
            body_html,
            comments: PaginatedResult::from_page(comments, CommentDto::from),
            can_comment,
            can_edit,
        })
    }
}
