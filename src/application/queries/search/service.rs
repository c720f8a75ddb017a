use std::sync::Arc;

use crate::{
    application::{
        dto::{ArticleDto, AuthorDto, PaginatedResult, SearchResultsDto, TagDto},
        error::ApplicationResult,
        uploads::UploadListener,
    },
    domain::{
        article::{ArticleFilter, ArticleReadRepository},
        pagination::{ARTICLES_PER_PAGE, Page, PageRequest},
        tag::TagRepository,
        user::UserRepository,
    },
};

/// Site-wide search across article titles, author names and tags.
pub struct SearchQueryService {
    article_repo: Arc<dyn ArticleReadRepository>,
    user_repo: Arc<dyn UserRepository>,
    tag_repo: Arc<dyn TagRepository>,
    uploads: Arc<UploadListener>,
}

impl SearchQueryService {
    pub fn new(
        article_repo: Arc<dyn ArticleReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        tag_repo: Arc<dyn TagRepository>,
        uploads: Arc<UploadListener>,
    ) -> Self {
        Self {
            article_repo,
            user_repo,
            tag_repo,
            uploads,
        }
    }

    /// A missing or blank term yields empty results rather than everything.
    pub async fn search(
        &self,
        term: Option<String>,
        page: u32,
    ) -> ApplicationResult<SearchResultsDto> {
        let request = PageRequest::new(page, ARTICLES_PER_PAGE);
        let term = term.map(|t| t.trim().to_string()).unwrap_or_default();

        if term.is_empty() {
            return Ok(SearchResultsDto {
                search: term,
                articles: PaginatedResult::from_page(Page::<ArticleDto>::empty(request), |a| a),
                authors: Vec::new(),
                tags: Vec::new(),
            });
        }

        let articles = self
            .article_repo
            .list(ArticleFilter::TitleContains(term.clone()), request)
            .await?;
        let authors = self.user_repo.search(&term).await?;
        let tags = self.tag_repo.search(&term).await?;
        tracing::debug!(
            search = %term,
            articles = articles.total,
            authors = authors.len(),
            tags = tags.len(),
            "search executed"
        );

        Ok(SearchResultsDto {
            search: term,
            articles: PaginatedResult::from_page(articles, |details| {
                ArticleDto::from_details(details, &self.uploads)
            }),
            authors: authors
                .into_iter()
                .map(|profile| AuthorDto::from_profile(profile, &self.uploads))
                .collect(),
            tags: tags.into_iter().map(TagDto::from).collect(),
        })
    }
}
