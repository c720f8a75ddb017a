//! Demo content for development databases.
//!
//! Generation is driven by a seeded [`StdRng`], so the same seed always
//! produces the same users, categories, tags, articles and comments.
use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{security::PasswordHasher, time::Clock, util::SlugGenerator},
        services::Repositories,
    },
    domain::{
        article::{ArticleBody, ArticleId, ArticleTitle, NewArticle},
        category::{CategoryId, CategoryName, NewCategory, services::CategoryCodeService},
        comment::{CommentContent, NewComment},
        pagination::PageRequest,
        tag::{NewTag, TagId, TagName, services::TagCodeService},
        user::{Email, FirstName, NewUser, PasswordHash, Role, UserId},
    },
};

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bruno", "Chiara", "Dmitri", "Elena", "Farid", "Greta", "Hugo", "Ines", "Jonas",
    "Kasia", "Leon", "Maja", "Nils", "Olga", "Piotr", "Rosa", "Stefan", "Tove", "Wiktor",
];

const CATEGORY_NAMES: &[&str] = &[
    "Travel", "Cooking", "Programming", "Photography", "Music", "Gardening", "Books", "Cinema",
    "Science", "Sports",
];

const WORDS: &[&str] = &[
    "amber", "anchor", "autumn", "balance", "harbor", "bright", "canvas", "cedar", "circle",
    "copper", "crystal", "dawn", "delta", "desert", "drift", "echo", "ember", "fabric", "falcon",
    "feather", "field", "forest", "garden", "glacier", "granite", "harvest", "horizon", "island",
    "journey", "lantern", "ledger", "marble", "meadow", "mirror", "morning", "mountain", "nebula",
    "orbit", "orchard", "paper", "pebble", "pillar", "planet", "prairie", "quartz", "river",
    "saddle", "season", "shadow", "signal", "silver", "spring", "summit", "thunder", "timber",
    "valley", "velvet", "voyage", "willow", "winter",
];

/// How much demo content to generate.
#[derive(Debug, Clone)]
pub struct FixtureOptions {
    pub seed: u64,
    pub users: usize,
    pub categories: usize,
    pub tags: usize,
    pub articles: usize,
    pub comments: usize,
    /// Plain password shared by every generated account.
    pub password: String,
}

impl Default for FixtureOptions {
    fn default() -> Self {
        Self {
            seed: 42,
            users: 10,
            categories: 5,
            tags: 35,
            articles: 50,
            comments: 60,
            password: "password123".into(),
        }
    }
}

/// Rows written by one [`FixtureLoader::load`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixtureReport {
    pub users: usize,
    pub categories: usize,
    pub tags: usize,
    pub articles: usize,
    pub comments: usize,
}

pub struct FixtureLoader {
    repos: Repositories,
    password_hasher: Arc<dyn PasswordHasher>,
    clock: Arc<dyn Clock>,
    category_codes: CategoryCodeService,
    tag_codes: TagCodeService,
}

impl FixtureLoader {
    pub fn new(
        repos: Repositories,
        password_hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let category_codes =
            CategoryCodeService::new(Arc::clone(&repos.categories), Arc::clone(&slugger));
        let tag_codes = TagCodeService::new(Arc::clone(&repos.tags), slugger);
        Self {
            repos,
            password_hasher,
            clock,
            category_codes,
            tag_codes,
        }
    }

    /// Fills an empty database. The first generated user is an admin
    /// (`admin@example.com`); the others are regular authors.
    pub async fn load(&self, options: &FixtureOptions) -> ApplicationResult<FixtureReport> {
        let existing = self.repos.users.list_authors(PageRequest::first(1)).await?;
        if existing.total > 0 {
            return Err(ApplicationError::conflict(
                "database already contains users; fixtures only load into an empty database",
            ));
        }
        if options.users == 0 || options.categories == 0 {
            return Err(ApplicationError::validation(
                "fixtures need at least one user and one category",
            ));
        }

        let mut rng = StdRng::seed_from_u64(options.seed);
        let now = self.clock.now();

        let users = self.load_users(options, now).await?;
        let categories = self.load_categories(options.categories).await?;
        let tags = self.load_tags(&mut rng, options.tags, now).await?;
        let articles = self
            .load_articles(&mut rng, options.articles, &users, &categories, &tags, now)
            .await?;
        let comments = self
            .load_comments(&mut rng, options.comments, &users, &articles, now)
            .await?;

        let report = FixtureReport {
            users: users.len(),
            categories: categories.len(),
            tags: tags.len(),
            articles: articles.len(),
            comments,
        };
        tracing::info!(?report, seed = options.seed, "fixtures loaded");
        Ok(report)
    }

    async fn load_users(
        &self,
        options: &FixtureOptions,
        now: DateTime<Utc>,
    ) -> ApplicationResult<Vec<UserId>> {
        // One hash for every account; argon2 is too slow to run per row.
        let hash = PasswordHash::new(self.password_hasher.hash(&options.password).await?)?;

        let mut ids = Vec::with_capacity(options.users);
        for index in 0..options.users {
            let first_name = FIRST_NAMES[index % FIRST_NAMES.len()];
            let (email, roles) = if index == 0 {
                ("admin@example.com".to_string(), vec![Role::User, Role::Admin])
            } else {
                (
                    format!("{}{index}@example.com", first_name.to_lowercase()),
                    vec![Role::User],
                )
            };
            let user = self
                .repos
                .users
                .insert(NewUser {
                    email: Email::new(email)?,
                    password_hash: hash.clone(),
                    roles: roles.into_iter().collect::<BTreeSet<_>>(),
                    first_name: FirstName::new(first_name)?,
                    created_at: now,
                })
                .await?;
            ids.push(user.id);
        }
        Ok(ids)
    }

    async fn load_categories(&self, count: usize) -> ApplicationResult<Vec<CategoryId>> {
        let mut ids = Vec::with_capacity(count);
        for index in 0..count {
            let name = CategoryName::new(numbered(CATEGORY_NAMES, index))?;
            let code = self.category_codes.generate_unique_code(&name, None).await?;
            let category = self.repos.categories.insert(NewCategory { name, code }).await?;
            ids.push(category.id);
        }
        Ok(ids)
    }

    async fn load_tags(
        &self,
        rng: &mut StdRng,
        count: usize,
        now: DateTime<Utc>,
    ) -> ApplicationResult<Vec<TagId>> {
        let mut words = WORDS.to_vec();
        words.shuffle(rng);

        let mut ids = Vec::with_capacity(count);
        for index in 0..count {
            let name = TagName::new(numbered(&words, index))?;
            let code = self.tag_codes.generate_unique_code(&name).await?;
            let tag = self
                .repos
                .tags
                .insert(NewTag {
                    name,
                    code,
                    created_at: past(rng, now),
                })
                .await?;
            ids.push(tag.id);
        }
        Ok(ids)
    }

    async fn load_articles(
        &self,
        rng: &mut StdRng,
        count: usize,
        users: &[UserId],
        categories: &[CategoryId],
        tags: &[TagId],
        now: DateTime<Utc>,
    ) -> ApplicationResult<Vec<(ArticleId, DateTime<Utc>)>> {
        let mut articles = Vec::with_capacity(count);
        for _ in 0..count {
            let tag_count = rng.gen_range(0..=3).min(tags.len());
            let tag_ids = tags.choose_multiple(rng, tag_count).copied().collect();
            let article = self
                .repos
                .article_write
                .insert(NewArticle {
                    title: ArticleTitle::new(sentence(rng))?,
                    body: ArticleBody::new(paragraph(rng))?,
                    published_at: past(rng, now),
                    category_id: pick(rng, categories)?,
                    author_id: pick(rng, users)?,
                    tag_ids,
                })
                .await?;
            articles.push((article.id, article.published_at));
        }
        Ok(articles)
    }

    async fn load_comments(
        &self,
        rng: &mut StdRng,
        count: usize,
        users: &[UserId],
        articles: &[(ArticleId, DateTime<Utc>)],
        now: DateTime<Utc>,
    ) -> ApplicationResult<usize> {
        if articles.is_empty() {
            return Ok(0);
        }

        for _ in 0..count {
            let (article_id, published_at) = pick(rng, articles)?;
            let since = (now - published_at).num_minutes().max(1);
            let created_at = published_at + Duration::minutes(rng.gen_range(0..since));
            self.repos
                .comments
                .insert(NewComment {
                    content: CommentContent::new(paragraph(rng))?,
                    article_id,
                    author_id: pick(rng, users)?,
                    created_at,
                })
                .await?;
        }
        Ok(count)
    }
}

fn pick<T: Copy>(rng: &mut StdRng, items: &[T]) -> ApplicationResult<T> {
    items
        .choose(rng)
        .copied()
        .ok_or_else(|| ApplicationError::validation("nothing to pick fixtures from"))
}

/// `items[index]`, with a numeric suffix once the list wraps around.
fn numbered(items: &[&str], index: usize) -> String {
    let base = items[index % items.len()];
    match index / items.len() {
        0 => base.to_string(),
        round => format!("{base} {}", round + 1),
    }
}

/// Somewhere between one and a hundred days before `now`.
fn past(rng: &mut StdRng, now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::minutes(rng.gen_range(24 * 60..=100 * 24 * 60))
}

fn sentence(rng: &mut StdRng) -> String {
    let len = rng.gen_range(3..=7);
    let words: Vec<&str> = (0..len)
        .filter_map(|_| WORDS.choose(&mut *rng).copied())
        .collect();
    let mut text = words.join(" ");
    if let Some(first) = text.get(0..1).map(str::to_uppercase) {
        text.replace_range(0..1, &first);
    }
    text.push('.');
    text
}

fn paragraph(rng: &mut StdRng) -> String {
    let len = rng.gen_range(2..=5);
    (0..len)
        .map(|_| sentence(&mut *rng))
        .collect::<Vec<_>>()
        .join(" ")
}
