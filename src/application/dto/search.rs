use serde::{Deserialize, Serialize};

use super::{articles::ArticleDto, pagination::PaginatedResult, tags::TagDto, users::AuthorDto};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultsDto {
    pub search: String,
    pub articles: PaginatedResult<ArticleDto>,
    pub authors: Vec<AuthorDto>,
    pub tags: Vec<TagDto>,
}
