use super::PageParams;
use crate::application::dto::TagArticlesDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};

pub async fn tag_articles(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<TagArticlesDto>> {
    state
        .services
        .article_queries
        .list_by_tag(id, params.page)
        .await
        .into_http()
        .map(Json)
}
