// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleTitle};
use crate::domain::category::{Category, CategoryId};
use crate::domain::media::Photo;
use crate::domain::tag::{Tag, TagId};
use crate::domain::user::{AuthorSummary, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub published_at: DateTime<Utc>,
    pub category_id: CategoryId,
    pub author_id: UserId,
}

impl Article {
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }

    /// Applies edited content. The publication date is left untouched.
    pub fn revise(&mut self, title: ArticleTitle, body: ArticleBody, category_id: CategoryId) {
        self.title = title;
        self.body = body;
        self.category_id = category_id;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub published_at: DateTime<Utc>,
    pub category_id: CategoryId,
    pub author_id: UserId,
    pub tag_ids: Vec<TagId>,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub category_id: CategoryId,
    pub tag_ids: Vec<TagId>,
}

impl ArticleUpdate {
    pub fn from_article(article: &Article, tag_ids: Vec<TagId>) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            body: article.body.clone(),
            category_id: article.category_id,
            tag_ids,
        }
    }
}

/// Article with the relations every view needs.
#[derive(Debug, Clone)]
pub struct ArticleDetails {
    pub article: Article,
    pub category: Category,
    pub author: AuthorSummary,
    pub tags: Vec<Tag>,
    pub photo: Option<Photo>,
}
