use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::codes::bounded_candidate;
use crate::domain::category::value_objects::{CategoryCode, CategoryId, CategoryName};
use crate::domain::errors::DomainResult;

/// Produces unique category codes from category names.
pub struct CategoryCodeService {
    repo: Arc<dyn CategoryRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl CategoryCodeService {
    pub fn new(repo: Arc<dyn CategoryRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self { repo, generator }
    }

    pub async fn generate_unique_code(
        &self,
        name: &CategoryName,
        ignore_id: Option<CategoryId>,
    ) -> DomainResult<CategoryCode> {
        let base = self.generator.slugify(name.as_str());
        let base_code = if base.is_empty() {
            "category".to_string()
        } else {
            base
        };

        let mut attempt = 0u64;
        loop {
            let candidate = bounded_candidate(&base_code, attempt, CategoryCode::MAX_LENGTH);
            let code = CategoryCode::new(candidate)?;
            match self.repo.find_by_code(&code).await? {
                Some(existing) if ignore_id == Some(existing.id) => return Ok(code),
                Some(_) => attempt += 1,
                None => return Ok(code),
            }
        }
    }
}
