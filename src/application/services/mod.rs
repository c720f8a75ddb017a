// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, categories::CategoryCommandService,
            comments::CommentCommandService, media::MediaCommandService,
            users::UserCommandService,
        },
        dto::AuthenticatedUser,
        forms::TagsTransformer,
        ports::{
            markdown::MarkdownRenderer,
            security::{PasswordHasher, TokenManager},
            storage::FileStorage,
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            articles::ArticleQueryService, categories::CategoryQueryService,
            search::SearchQueryService, users::UserQueryService,
        },
        uploads::UploadListener,
        ApplicationResult,
        error::ApplicationError,
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        category::{CategoryRepository, services::CategoryCodeService},
        comment::CommentRepository,
        media::{AvatarRepository, PhotoRepository},
        tag::{TagRepository, services::TagCodeService},
        user::{FollowRepository, UserRepository, capabilities_for},
    },
};

/// Persistence adapters handed to the application layer.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub follows: Arc<dyn FollowRepository>,
    pub article_write: Arc<dyn ArticleWriteRepository>,
    pub article_read: Arc<dyn ArticleReadRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub photos: Arc<dyn PhotoRepository>,
    pub avatars: Arc<dyn AvatarRepository>,
}

/// Non-persistence collaborators: crypto, time, slugs, files, rendering.
#[derive(Clone)]
pub struct Ports {
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
    pub storage: Arc<dyn FileStorage>,
    pub markdown: Arc<dyn MarkdownRenderer>,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub media_commands: Arc<MediaCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub user_queries: Arc<UserQueryService>,
    pub search_queries: Arc<SearchQueryService>,
    token_manager: Arc<dyn TokenManager>,
    users: Arc<dyn UserRepository>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories, ports: Ports) -> Self {
        let uploads = Arc::new(UploadListener::new(Arc::clone(&ports.storage)));

        let tag_codes = Arc::new(TagCodeService::new(
            Arc::clone(&repos.tags),
            Arc::clone(&ports.slugger),
        ));
        let tags = Arc::new(TagsTransformer::new(
            Arc::clone(&repos.tags),
            tag_codes,
            Arc::clone(&ports.clock),
        ));
        let category_codes = Arc::new(CategoryCodeService::new(
            Arc::clone(&repos.categories),
            Arc::clone(&ports.slugger),
        ));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&repos.follows),
            Arc::clone(&repos.avatars),
            Arc::clone(&uploads),
            Arc::clone(&ports.password_hasher),
            Arc::clone(&ports.token_manager),
            Arc::clone(&ports.clock),
        ));
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&repos.article_write),
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.categories),
            tags,
            Arc::clone(&uploads),
            Arc::clone(&ports.clock),
        ));
        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&repos.categories),
            category_codes,
        ));
        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&repos.comments),
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.users),
            Arc::clone(&ports.clock),
        ));
        let media_commands = Arc::new(MediaCommandService::new(
            Arc::clone(&repos.photos),
            Arc::clone(&repos.avatars),
            Arc::clone(&repos.article_read),
            Arc::clone(&uploads),
            Arc::clone(&ports.clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.comments),
            Arc::clone(&repos.categories),
            Arc::clone(&repos.tags),
            Arc::clone(&uploads),
            Arc::clone(&ports.markdown),
        ));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&repos.categories)));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&repos.users),
            Arc::clone(&repos.follows),
            Arc::clone(&repos.article_read),
            Arc::clone(&uploads),
        ));
        let search_queries = Arc::new(SearchQueryService::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.users),
            Arc::clone(&repos.tags),
            uploads,
        ));

        Self {
            user_commands,
            article_commands,
            category_commands,
            comment_commands,
            media_commands,
            article_queries,
            category_queries,
            user_queries,
            search_queries,
            token_manager: ports.token_manager,
            users: repos.users,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    /// Resolves a bearer token into the acting user.
    ///
    /// Roles and capabilities come from the stored user, not from the token,
    /// so a demotion or deletion takes effect on the next request.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let mut actor = self.token_manager.authenticate(token).await?;
        let Some(user) = self.users.find_by_id(actor.id).await? else {
            tracing::info!(user_id = i64::from(actor.id), "token for a deleted user rejected");
            return Err(ApplicationError::unauthorized("account no longer exists"));
        };

        actor.email = user.email.as_str().to_string();
        actor.roles = user.roles().clone();
        actor.capabilities = capabilities_for(user.roles());
        Ok(actor)
    }
}
