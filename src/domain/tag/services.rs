use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::codes::bounded_candidate;
use crate::domain::errors::DomainResult;
use crate::domain::tag::repository::TagRepository;
use crate::domain::tag::value_objects::{TagCode, TagName};

pub struct TagCodeService {
    repo: Arc<dyn TagRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl TagCodeService {
    pub fn new(repo: Arc<dyn TagRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self { repo, generator }
    }

    pub async fn generate_unique_code(&self, name: &TagName) -> DomainResult<TagCode> {
        let base = self.generator.slugify(name.as_str());
        let base_code = if base.is_empty() { "tag".to_string() } else { base };

        let mut attempt = 0u64;
        loop {
            let candidate = bounded_candidate(&base_code, attempt, TagCode::MAX_LENGTH);
            let code = TagCode::new(candidate)?;
            if self.repo.find_by_code(&code).await?.is_none() {
                return Ok(code);
            }
            attempt += 1;
        }
    }
}
