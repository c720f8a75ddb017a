use std::collections::HashSet;
use std::sync::Arc;

use crate::application::{error::ApplicationResult, ports::time::Clock};
use crate::domain::errors::DomainResult;
use crate::domain::tag::{NewTag, Tag, TagName, TagRepository, services::TagCodeService};

/// Maps between the comma-separated tag field and tag entities.
pub struct TagsTransformer {
    repo: Arc<dyn TagRepository>,
    codes: Arc<TagCodeService>,
    clock: Arc<dyn Clock>,
}

impl TagsTransformer {
    pub fn new(
        repo: Arc<dyn TagRepository>,
        codes: Arc<TagCodeService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { repo, codes, clock }
    }

    pub fn transform(tags: &[Tag]) -> String {
        tags.iter()
            .map(|tag| tag.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Splits on commas, trims, drops empty entries and case-insensitive duplicates.
    pub fn parse(input: &str) -> DomainResult<Vec<TagName>> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for raw in input.split(',') {
            let raw = raw.trim();
            if raw.is_empty() || !seen.insert(raw.to_lowercase()) {
                continue;
            }
            names.push(TagName::new(raw)?);
        }
        Ok(names)
    }

    /// Resolves names to tags, creating the ones that do not exist yet.
    pub async fn reverse_transform(&self, names: &[TagName]) -> ApplicationResult<Vec<Tag>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let existing = self.repo.find_by_names(names).await?;
        let mut tags = Vec::with_capacity(names.len());
        for name in names {
            if let Some(tag) = existing.iter().find(|tag| &tag.name == name) {
                tags.push(tag.clone());
                continue;
            }
            let code = self.codes.generate_unique_code(name).await?;
            let created = self
                .repo
                .insert(NewTag {
                    name: name.clone(),
                    code,
                    created_at: self.clock.now(),
                })
                .await?;
            tracing::debug!(tag = %created.name, "created tag");
            tags.push(created);
        }
        Ok(tags)
    }
}
