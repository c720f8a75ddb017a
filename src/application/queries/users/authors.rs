use super::UserQueryService;
use crate::{
    application::{
        capability::ensure_capability,
        dto::{ArticleDto, AuthenticatedUser, AuthorDto, AuthorViewDto, PaginatedResult},
        error::ApplicationResult,
    },
    domain::{
        article::ArticleFilter,
        pagination::{ARTICLES_PER_PAGE, AUTHORS_PER_PAGE, PageRequest},
    },
};

impl UserQueryService {
    /// Authors directory, ordered by first name descending.
    pub async fn list_authors(&self, page: u32) -> ApplicationResult<PaginatedResult<AuthorDto>> {
        let page = self
            .user_repo
            .list_authors(PageRequest::new(page, AUTHORS_PER_PAGE))
            .await?;
        Ok(PaginatedResult::from_page(page, |profile| {
            self.to_dto(profile)
        }))
    }

    /// Author page with their articles and the viewer's subscription state.
    pub async fn author_profile(
        &self,
        actor: Option<&AuthenticatedUser>,
        id: i64,
        page: u32,
    ) -> ApplicationResult<AuthorViewDto> {
        let profile = self.load_profile(id).await?;
        let author_id = profile.user.id;

        let articles = self
            .article_repo
            .list(
                ArticleFilter::Author(author_id),
                PageRequest::new(page, ARTICLES_PER_PAGE),
            )
            .await?;

        let is_self = actor.is_some_and(|user| user.id == author_id);
        let is_subscribed = match actor {
            Some(user) if !is_self => self.follow_repo.is_following(user.id, author_id).await?,
            _ => false,
        };

        Ok(AuthorViewDto {
            author: self.to_dto(profile),
            articles: PaginatedResult::from_page(articles, |details| {
                ArticleDto::from_details(details, &self.uploads)
            }),
            is_subscribed,
            is_self,
        })
    }

    /// User record shown on the admin role and delete pages.
    pub async fn admin_user_view(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<AuthorDto> {
        ensure_capability(actor, "users", "manage")?;
        let profile = self.load_profile(id).await?;
        Ok(self.to_dto(profile))
    }
}
