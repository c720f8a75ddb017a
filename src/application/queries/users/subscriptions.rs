use super::UserQueryService;
use crate::{
    application::{
        capability::ensure_capability,
        dto::{AuthenticatedUser, AuthorDto, PaginatedResult},
        error::ApplicationResult,
    },
    domain::pagination::{AUTHORS_PER_PAGE, PageRequest},
};

impl UserQueryService {
    pub async fn followed_authors(
        &self,
        actor: &AuthenticatedUser,
        page: u32,
    ) -> ApplicationResult<PaginatedResult<AuthorDto>> {
        ensure_capability(actor, "subscriptions", "manage")?;
        let page = self
            .follow_repo
            .followed_authors(actor.id, PageRequest::new(page, AUTHORS_PER_PAGE))
            .await?;
        Ok(PaginatedResult::from_page(page, |profile| {
            self.to_dto(profile)
        }))
    }

    pub async fn followers(
        &self,
        actor: &AuthenticatedUser,
        page: u32,
    ) -> ApplicationResult<PaginatedResult<AuthorDto>> {
        ensure_capability(actor, "subscriptions", "manage")?;
        let page = self
            .follow_repo
            .followers(actor.id, PageRequest::new(page, AUTHORS_PER_PAGE))
            .await?;
        Ok(PaginatedResult::from_page(page, |profile| {
            self.to_dto(profile)
        }))
    }
}
