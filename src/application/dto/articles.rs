use crate::application::forms::TagsTransformer;
use crate::application::uploads::UploadListener;
use crate::domain::article::ArticleDetails;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    categories::CategoryDto, comments::CommentDto, media::PhotoDto, pagination::PaginatedResult,
    serde_time, tags::TagDto, users::AuthorSummaryDto,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub body: String,
    #[serde(with = "serde_time")]
    pub published_at: DateTime<Utc>,
    pub category: CategoryDto,
    pub author: AuthorSummaryDto,
    pub tags: Vec<TagDto>,
    pub photo: Option<PhotoDto>,
}

impl ArticleDto {
    pub fn from_details(details: ArticleDetails, uploads: &UploadListener) -> Self {
        let ArticleDetails {
            article,
            category,
            author,
            tags,
            photo,
        } = details;
        Self {
            id: article.id.into(),
            title: article.title.into(),
            body: article.body.into(),
            published_at: article.published_at,
            category: category.into(),
            author: author.into(),
            tags: tags.into_iter().map(TagDto::from).collect(),
            photo: photo.map(|photo| PhotoDto::from_photo(photo, uploads)),
        }
    }
}

/// Article page: rendered body plus the first page of comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleViewDto {
    pub article: ArticleDto,
    pub body_html: String,
    pub comments: PaginatedResult<CommentDto>,
    pub can_comment: bool,
    pub can_edit: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleFormValues {
    pub title: String,
    pub body: String,
    pub category_id: i64,
    pub tags: String,
}

impl From<&ArticleDetails> for ArticleFormValues {
    fn from(details: &ArticleDetails) -> Self {
        Self {
            title: details.article.title.to_string(),
            body: details.article.body.as_str().to_string(),
            category_id: details.article.category_id.into(),
            tags: TagsTransformer::transform(&details.tags),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleFormView {
    pub categories: Vec<CategoryDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<ArticleFormValues>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryArticlesDto {
    pub category: CategoryDto,
    pub articles: PaginatedResult<ArticleDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagArticlesDto {
    pub tag: TagDto,
    pub articles: PaginatedResult<ArticleDto>,
}
