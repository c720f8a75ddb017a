use crate::domain::pagination::Page;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u64,
}

impl<T> PaginatedResult<T> {
    pub fn from_page<U>(page: Page<U>, convert: impl FnMut(U) -> T) -> Self {
        let total_pages = page.total_pages();
        let request = page.request;
        Self {
            items: page.items.into_iter().map(convert).collect(),
            total: page.total,
            page: request.page(),
            per_page: request.per_page(),
            total_pages,
        }
    }
}
