use crate::application::dto::SearchResultsDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
}

pub async fn search(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SearchParams>,
) -> HttpResult<Json<SearchResultsDto>> {
    state
        .services
        .search_queries
        .search(params.search, params.page.unwrap_or(1))
        .await
        .into_http()
        .map(Json)
}
