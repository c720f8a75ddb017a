// tests/support/mocks/memory.rs
//! A single in-memory store implementing every repository trait, so that
//! the services see one consistent data set within a test.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use folio_core::domain::{
    article::{
        Article, ArticleDetails, ArticleFilter, ArticleId, ArticleReadRepository, ArticleUpdate,
        ArticleWriteRepository, NewArticle,
    },
    category::{Category, CategoryCode, CategoryId, CategoryRepository, CategoryUpdate, NewCategory},
    comment::{Comment, CommentDetails, CommentId, CommentRepository, NewComment},
    errors::{DomainError, DomainResult},
    media::{
        Avatar, AvatarId, AvatarRepository, NewAvatar, NewPhoto, Photo, PhotoId, PhotoRepository,
        StoredFileName,
    },
    pagination::{Page, PageRequest},
    tag::{NewTag, Tag, TagCode, TagId, TagName, TagRepository},
    user::{
        AuthorProfile, Email, FollowRepository, NewUser, Role, User, UserId, UserRepository,
    },
};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default)]
struct State {
    next_id: i64,
    users: BTreeMap<i64, User>,
    follows: BTreeSet<(i64, i64)>,
    categories: BTreeMap<i64, Category>,
    tags: BTreeMap<i64, Tag>,
    articles: BTreeMap<i64, (Article, Vec<TagId>)>,
    comments: BTreeMap<i64, Comment>,
    photos: BTreeMap<i64, Photo>,
    avatars: BTreeMap<i64, Avatar>,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn profile(&self, user: &User) -> AuthorProfile {
        AuthorProfile {
            user: user.clone(),
            avatar: self
                .avatars
                .values()
                .find(|avatar| avatar.user_id == user.id)
                .cloned(),
        }
    }

    fn details(&self, article: &Article, tag_ids: &[TagId]) -> DomainResult<ArticleDetails> {
        let category = self
            .categories
            .get(&article.category_id.0)
            .cloned()
            .ok_or_else(|| DomainError::Persistence("dangling category".into()))?;
        let author = self
            .users
            .get(&article.author_id.0)
            .map(User::summary)
            .ok_or_else(|| DomainError::Persistence("dangling author".into()))?;
        let mut tags: Vec<Tag> = tag_ids
            .iter()
            .filter_map(|id| self.tags.get(&id.0).cloned())
            .collect();
        tags.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        let photo = self
            .photos
            .values()
            .find(|photo| photo.article_id == article.id)
            .cloned();
        Ok(ArticleDetails {
            article: article.clone(),
            category,
            author,
            tags,
            photo,
        })
    }

    fn matches(&self, filter: &ArticleFilter, article: &Article, tag_ids: &[TagId]) -> bool {
        match filter {
            ArticleFilter::All => true,
            ArticleFilter::CategoryName(name) => self
                .categories
                .get(&article.category_id.0)
                .is_some_and(|category| category.name.as_str() == name),
            ArticleFilter::Author(user) => article.author_id == *user,
            ArticleFilter::FollowedBy(user) => {
                self.follows.contains(&(user.0, article.author_id.0))
            }
            ArticleFilter::Tag(tag) => tag_ids.contains(tag),
            ArticleFilter::TitleContains(term) => article
                .title
                .as_str()
                .to_lowercase()
                .contains(&term.to_lowercase()),
        }
    }

    fn sorted_profiles(&self, ids: impl Iterator<Item = i64>, descending: bool) -> Vec<AuthorProfile> {
        let mut users: Vec<&User> = ids.filter_map(|id| self.users.get(&id)).collect();
        users.sort_by(|a, b| {
            (a.first_name.as_str(), a.id.0).cmp(&(b.first_name.as_str(), b.id.0))
        });
        if descending {
            users.reverse();
        }
        users.into_iter().map(|user| self.profile(user)).collect()
    }
}

/// Cloning shares the underlying data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
    fail_comment_inserts: Arc<AtomicBool>,
}

impl MemoryStore {
    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("memory store poisoned")
    }

    /// Makes every following comment insert fail like a lost database connection.
    pub fn fail_comment_inserts(&self) {
        self.fail_comment_inserts.store(true, Ordering::SeqCst);
    }

    pub fn seed_user(&self, first_name: &str, email: &str, roles: &[Role]) -> i64 {
        let mut state = self.state();
        let id = state.next_id();
        let now = super::time::fixed_now();
        let user = User::new(
            UserId::new(id).unwrap(),
            Email::new(email).unwrap(),
            folio_core::domain::user::PasswordHash::new("hashed:secret1").unwrap(),
            roles.iter().copied(),
            folio_core::domain::user::FirstName::new(first_name).unwrap(),
            None,
            None,
            now,
            now,
        );
        state.users.insert(id, user);
        id
    }

    pub fn seed_category(&self, name: &str) -> i64 {
        let mut state = self.state();
        let id = state.next_id();
        state.categories.insert(
            id,
            Category {
                id: CategoryId::new(id).unwrap(),
                name: folio_core::domain::category::CategoryName::new(name).unwrap(),
                code: CategoryCode::new(name.to_lowercase()).unwrap(),
            },
        );
        id
    }

    pub fn seed_tag(&self, name: &str) -> i64 {
        let mut state = self.state();
        let id = state.next_id();
        let now = super::time::fixed_now();
        state.tags.insert(
            id,
            Tag {
                id: TagId::new(id).unwrap(),
                name: TagName::new(name).unwrap(),
                code: TagCode::new(name.to_lowercase()).unwrap(),
                created_at: now,
                updated_at: now,
            },
        );
        id
    }

    pub fn seed_article(&self, title: &str, author: i64, category: i64, tags: &[i64]) -> i64 {
        let mut state = self.state();
        let id = state.next_id();
        let article = Article {
            id: ArticleId::new(id).unwrap(),
            title: folio_core::domain::article::ArticleTitle::new(title).unwrap(),
            body: folio_core::domain::article::ArticleBody::new(format!("# {title}\n\nBody."))
                .unwrap(),
            published_at: super::time::fixed_now() + chrono::Duration::seconds(id),
            category_id: CategoryId::new(category).unwrap(),
            author_id: UserId::new(author).unwrap(),
        };
        let tag_ids = tags.iter().map(|tag| TagId::new(*tag).unwrap()).collect();
        state.articles.insert(id, (article, tag_ids));
        id
    }

    pub fn seed_follow(&self, follower: i64, followed: i64) {
        self.state().follows.insert((follower, followed));
    }

    pub fn article_count(&self) -> usize {
        self.state().articles.len()
    }

    pub fn article_title(&self, id: i64) -> Option<String> {
        self.state()
            .articles
            .get(&id)
            .map(|(article, _)| article.title.to_string())
    }

    pub fn latest_article(&self) -> Option<(i64, String, i64)> {
        self.state()
            .articles
            .values()
            .max_by_key(|(article, _)| article.id.0)
            .map(|(article, _)| (article.id.0, article.title.to_string(), article.author_id.0))
    }

    pub fn has_category(&self, id: i64) -> bool {
        self.state().categories.contains_key(&id)
    }

    pub fn has_user(&self, id: i64) -> bool {
        self.state().users.contains_key(&id)
    }

    pub fn comment_count(&self) -> usize {
        self.state().comments.len()
    }

    pub fn follows_of(&self, follower: i64) -> BTreeSet<i64> {
        self.state()
            .follows
            .iter()
            .filter(|(from, _)| *from == follower)
            .map(|(_, to)| *to)
            .collect()
    }

    pub fn followers_of(&self, followed: i64) -> BTreeSet<i64> {
        self.state()
            .follows
            .iter()
            .filter(|(_, to)| *to == followed)
            .map(|(from, _)| *from)
            .collect()
    }

    pub fn avatar_file(&self, user: i64) -> Option<String> {
        self.state()
            .avatars
            .values()
            .find(|avatar| avatar.user_id.0 == user)
            .map(|avatar| avatar.file.to_string())
    }

    pub fn avatar_id(&self, user: i64) -> Option<i64> {
        self.state()
            .avatars
            .values()
            .find(|avatar| avatar.user_id.0 == user)
            .map(|avatar| avatar.id.0)
    }

    pub fn photo_of(&self, article: i64) -> Option<(i64, String)> {
        self.state()
            .photos
            .values()
            .find(|photo| photo.article_id.0 == article)
            .map(|photo| (photo.id.0, photo.file.to_string()))
    }

    pub fn is_admin(&self, user: i64) -> bool {
        self.state().users.get(&user).is_some_and(User::is_admin)
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut state = self.state();
        if state.users.values().any(|user| user.email == new_user.email) {
            return Err(DomainError::Conflict("email already registered".into()));
        }
        let id = state.next_id();
        let user = User::new(
            UserId::new(id)?,
            new_user.email,
            new_user.password_hash,
            new_user.roles,
            new_user.first_name,
            None,
            None,
            new_user.created_at,
            new_user.created_at,
        );
        state.users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.state().users.get(&id.0).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(self
            .state()
            .users
            .values()
            .find(|user| &user.email == email)
            .cloned())
    }

    async fn find_profile(&self, id: UserId) -> DomainResult<Option<AuthorProfile>> {
        let state = self.state();
        Ok(state.users.get(&id.0).map(|user| state.profile(user)))
    }

    async fn list_authors(&self, page: PageRequest) -> DomainResult<Page<AuthorProfile>> {
        let state = self.state();
        let all = state.sorted_profiles(state.users.keys().copied(), true);
        Ok(Page::from_sorted(all, page))
    }

    async fn search(&self, term: &str) -> DomainResult<Vec<AuthorProfile>> {
        let state = self.state();
        let term = term.to_lowercase();
        let ids = state.users.values().filter(|user| {
            user.first_name.as_str().to_lowercase().contains(&term)
                || user
                    .blog_name
                    .as_ref()
                    .is_some_and(|blog| blog.as_str().to_lowercase().contains(&term))
        });
        let ids: Vec<i64> = ids.map(|user| user.id.0).collect();
        Ok(state.sorted_profiles(ids.into_iter(), false))
    }

    async fn update_roles(
        &self,
        id: UserId,
        roles: &BTreeSet<Role>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<User> {
        let mut state = self.state();
        let user = state
            .users
            .get_mut(&id.0)
            .ok_or_else(|| DomainError::not_found("user"))?;
        *user = User::new(
            user.id,
            user.email.clone(),
            user.password_hash.clone(),
            roles.iter().copied(),
            user.first_name.clone(),
            user.blog_name.clone(),
            user.bio.clone(),
            user.created_at,
            updated_at,
        );
        Ok(user.clone())
    }

    async fn count_articles(&self, id: UserId) -> DomainResult<u64> {
        Ok(self
            .state()
            .articles
            .values()
            .filter(|(article, _)| article.author_id == id)
            .count() as u64)
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let mut state = self.state();
        if state.articles.values().any(|(article, _)| article.author_id == id) {
            return Err(DomainError::Conflict("user still owns articles".into()));
        }
        state.comments.retain(|_, comment| comment.author_id != id);
        state.avatars.retain(|_, avatar| avatar.user_id != id);
        state
            .follows
            .retain(|(from, to)| *from != id.0 && *to != id.0);
        state.users.remove(&id.0);
        Ok(())
    }
}

#[async_trait]
impl FollowRepository for MemoryStore {
    async fn follow(&self, follower: UserId, followed: UserId) -> DomainResult<bool> {
        Ok(self.state().follows.insert((follower.0, followed.0)))
    }

    async fn unfollow(&self, follower: UserId, followed: UserId) -> DomainResult<bool> {
        Ok(self.state().follows.remove(&(follower.0, followed.0)))
    }

    async fn is_following(&self, follower: UserId, followed: UserId) -> DomainResult<bool> {
        Ok(self.state().follows.contains(&(follower.0, followed.0)))
    }

    async fn followed_authors(
        &self,
        user: UserId,
        page: PageRequest,
    ) -> DomainResult<Page<AuthorProfile>> {
        let state = self.state();
        let ids: Vec<i64> = state
            .follows
            .iter()
            .filter(|(from, _)| *from == user.0)
            .map(|(_, to)| *to)
            .collect();
        Ok(Page::from_sorted(state.sorted_profiles(ids.into_iter(), false), page))
    }

    async fn followers(
        &self,
        user: UserId,
        page: PageRequest,
    ) -> DomainResult<Page<AuthorProfile>> {
        let state = self.state();
        let ids: Vec<i64> = state
            .follows
            .iter()
            .filter(|(_, to)| *to == user.0)
            .map(|(from, _)| *from)
            .collect();
        Ok(Page::from_sorted(state.sorted_profiles(ids.into_iter(), false), page))
    }
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn list(&self, page: PageRequest) -> DomainResult<Page<Category>> {
        let mut all: Vec<Category> = self.state().categories.values().cloned().collect();
        all.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(Page::from_sorted(all, page))
    }

    async fn list_all(&self) -> DomainResult<Vec<Category>> {
        let mut all: Vec<Category> = self.state().categories.values().cloned().collect();
        all.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(all)
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.state().categories.get(&id.0).cloned())
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Category>> {
        Ok(self
            .state()
            .categories
            .values()
            .find(|category| category.name.as_str() == name)
            .cloned())
    }

    async fn find_by_code(&self, code: &CategoryCode) -> DomainResult<Option<Category>> {
        Ok(self
            .state()
            .categories
            .values()
            .find(|category| &category.code == code)
            .cloned())
    }

    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut state = self.state();
        if state
            .categories
            .values()
            .any(|existing| existing.name == category.name)
        {
            return Err(DomainError::Conflict("category name already used".into()));
        }
        let id = state.next_id();
        let created = Category {
            id: CategoryId::new(id)?,
            name: category.name,
            code: category.code,
        };
        state.categories.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut state = self.state();
        if state
            .categories
            .values()
            .any(|existing| existing.id != update.id && existing.name == update.name)
        {
            return Err(DomainError::Conflict("category name already used".into()));
        }
        let category = state
            .categories
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::not_found("category"))?;
        category.name = update.name;
        category.code = update.code;
        Ok(category.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut state = self.state();
        if state
            .articles
            .values()
            .any(|(article, _)| article.category_id == id)
        {
            return Err(DomainError::Conflict("category still referenced".into()));
        }
        state.categories.remove(&id.0);
        Ok(())
    }

    async fn count_articles(&self, id: CategoryId) -> DomainResult<u64> {
        Ok(self
            .state()
            .articles
            .values()
            .filter(|(article, _)| article.category_id == id)
            .count() as u64)
    }
}

#[async_trait]
impl TagRepository for MemoryStore {
    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>> {
        Ok(self.state().tags.get(&id.0).cloned())
    }

    async fn find_by_names(&self, names: &[TagName]) -> DomainResult<Vec<Tag>> {
        let mut found: Vec<Tag> = self
            .state()
            .tags
            .values()
            .filter(|tag| names.contains(&tag.name))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(found)
    }

    async fn find_by_code(&self, code: &TagCode) -> DomainResult<Option<Tag>> {
        Ok(self
            .state()
            .tags
            .values()
            .find(|tag| &tag.code == code)
            .cloned())
    }

    async fn insert(&self, tag: NewTag) -> DomainResult<Tag> {
        let mut state = self.state();
        if state.tags.values().any(|existing| existing.name == tag.name) {
            return Err(DomainError::Conflict("tag name already used".into()));
        }
        let id = state.next_id();
        let created = Tag {
            id: TagId::new(id)?,
            name: tag.name,
            code: tag.code,
            created_at: tag.created_at,
            updated_at: tag.created_at,
        };
        state.tags.insert(id, created.clone());
        Ok(created)
    }

    async fn search(&self, term: &str) -> DomainResult<Vec<Tag>> {
        let term = term.to_lowercase();
        let mut found: Vec<Tag> = self
            .state()
            .tags
            .values()
            .filter(|tag| tag.name.as_str().to_lowercase().contains(&term))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(found)
    }
}

#[async_trait]
impl ArticleWriteRepository for MemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.state();
        if !state.categories.contains_key(&article.category_id.0) {
            return Err(DomainError::not_found("category"));
        }
        let id = state.next_id();
        let created = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            body: article.body,
            published_at: article.published_at,
            category_id: article.category_id,
            author_id: article.author_id,
        };
        state.articles.insert(id, (created.clone(), article.tag_ids));
        Ok(created)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.state();
        let (article, tags) = state
            .articles
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::not_found("article"))?;
        article.revise(update.title, update.body, update.category_id);
        *tags = update.tag_ids;
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.state();
        state.comments.retain(|_, comment| comment.article_id != id);
        state.photos.retain(|_, photo| photo.article_id != id);
        state.articles.remove(&id.0);
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for MemoryStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleDetails>> {
        let state = self.state();
        state
            .articles
            .get(&id.0)
            .map(|(article, tags)| state.details(article, tags))
            .transpose()
    }

    async fn list(
        &self,
        filter: ArticleFilter,
        page: PageRequest,
    ) -> DomainResult<Page<ArticleDetails>> {
        let state = self.state();
        let mut selected: Vec<&(Article, Vec<TagId>)> = state
            .articles
            .values()
            .filter(|(article, tags)| state.matches(&filter, article, tags))
            .collect();
        selected.sort_by(|(a, _), (b, _)| {
            (b.published_at, b.id.0).cmp(&(a.published_at, a.id.0))
        });
        let all = selected
            .into_iter()
            .map(|(article, tags)| state.details(article, tags))
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Page::from_sorted(all, page))
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        if self.fail_comment_inserts.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("connection reset".into()));
        }
        let mut state = self.state();
        let id = state.next_id();
        let created = Comment {
            id: CommentId::new(id)?,
            content: comment.content,
            article_id: comment.article_id,
            author_id: comment.author_id,
            created_at: comment.created_at,
            updated_at: comment.created_at,
        };
        state.comments.insert(id, created.clone());
        Ok(created)
    }

    async fn list_for_article(
        &self,
        article_id: ArticleId,
        page: PageRequest,
    ) -> DomainResult<Page<CommentDetails>> {
        let state = self.state();
        let mut selected: Vec<&Comment> = state
            .comments
            .values()
            .filter(|comment| comment.article_id == article_id)
            .collect();
        selected.sort_by(|a, b| (b.created_at, b.id.0).cmp(&(a.created_at, a.id.0)));
        let all = selected
            .into_iter()
            .filter_map(|comment| {
                state.users.get(&comment.author_id.0).map(|user| CommentDetails {
                    comment: comment.clone(),
                    author: user.summary(),
                })
            })
            .collect();
        Ok(Page::from_sorted(all, page))
    }
}

#[async_trait]
impl PhotoRepository for MemoryStore {
    async fn find_by_id(&self, id: PhotoId) -> DomainResult<Option<Photo>> {
        Ok(self.state().photos.get(&id.0).cloned())
    }

    async fn find_by_article(&self, article_id: ArticleId) -> DomainResult<Option<Photo>> {
        Ok(self
            .state()
            .photos
            .values()
            .find(|photo| photo.article_id == article_id)
            .cloned())
    }

    async fn insert(&self, photo: NewPhoto) -> DomainResult<Photo> {
        let mut state = self.state();
        if state
            .photos
            .values()
            .any(|existing| existing.article_id == photo.article_id)
        {
            return Err(DomainError::Conflict("article already has a photo".into()));
        }
        let id = state.next_id();
        let created = Photo {
            id: PhotoId::new(id)?,
            article_id: photo.article_id,
            file: photo.file,
            created_at: photo.created_at,
            updated_at: photo.created_at,
        };
        state.photos.insert(id, created.clone());
        Ok(created)
    }

    async fn replace_file(
        &self,
        id: PhotoId,
        file: StoredFileName,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Photo> {
        let mut state = self.state();
        let photo = state
            .photos
            .get_mut(&id.0)
            .ok_or_else(|| DomainError::not_found("photo"))?;
        photo.file = file;
        photo.updated_at = updated_at;
        Ok(photo.clone())
    }
}

#[async_trait]
impl AvatarRepository for MemoryStore {
    async fn find_by_id(&self, id: AvatarId) -> DomainResult<Option<Avatar>> {
        Ok(self.state().avatars.get(&id.0).cloned())
    }

    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Option<Avatar>> {
        Ok(self
            .state()
            .avatars
            .values()
            .find(|avatar| avatar.user_id == user_id)
            .cloned())
    }

    async fn insert(&self, avatar: NewAvatar) -> DomainResult<Avatar> {
        let mut state = self.state();
        if state
            .avatars
            .values()
            .any(|existing| existing.user_id == avatar.user_id)
        {
            return Err(DomainError::Conflict("user already has an avatar".into()));
        }
        let id = state.next_id();
        let created = Avatar {
            id: AvatarId::new(id)?,
            user_id: avatar.user_id,
            file: avatar.file,
            created_at: avatar.created_at,
            updated_at: avatar.created_at,
        };
        state.avatars.insert(id, created.clone());
        Ok(created)
    }

    async fn replace_file(
        &self,
        id: AvatarId,
        file: StoredFileName,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Avatar> {
        let mut state = self.state();
        let avatar = state
            .avatars
            .get_mut(&id.0)
            .ok_or_else(|| DomainError::not_found("avatar"))?;
        avatar.file = file;
        avatar.updated_at = updated_at;
        Ok(avatar.clone())
    }

    async fn delete(&self, id: AvatarId) -> DomainResult<()> {
        self.state().avatars.remove(&id.0);
        Ok(())
    }
}
