use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use nlg_core::{Article, Error, Newsletter};
use nlg_feeds::SearchQuery;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::AppState;

pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::NoArticles => StatusCode::NOT_FOUND,
            Error::Feed(_) | Error::Routing(_) => StatusCode::BAD_REQUEST,
            Error::Http(_) | Error::Model(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub keywords: String,
    pub source: Option<String>,
    pub max_articles: Option<usize>,
    pub freshness_days: Option<u32>,
}

impl SearchParams {
    fn to_query(&self) -> SearchQuery {
        let mut query = SearchQuery::from_keywords(&self.keywords)
            .with_freshness_days(self.freshness_days);
        if let Some(max_articles) = self.max_articles {
            query = query.with_max_articles(max_articles);
        }
        query
    }
}

#[derive(Debug, Deserialize)]
pub struct NewsletterRequest {
    pub keywords: String,
    pub source: Option<String>,
    pub max_articles: Option<usize>,
    pub freshness_days: Option<u32>,
}

pub async fn list_sources(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    let names = state
        .feeds
        .source_names()
        .into_iter()
        .map(String::from)
        .collect();
    Json(names)
}

pub async fn search_articles(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Article>>, ApiError> {
    let query = params.to_query();
    let articles = state.feeds.search(params.source.as_deref(), &query).await?;
    Ok(Json(articles))
}

pub async fn create_newsletter(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NewsletterRequest>,
) -> Result<Json<Newsletter>, ApiError> {
    let query = SearchParams {
        keywords: request.keywords,
        source: request.source,
        max_articles: request.max_articles,
        freshness_days: request.freshness_days,
    };

    let articles = state
        .feeds
        .search(query.source.as_deref(), &query.to_query())
        .await?;
    info!("📰 Collected {} articles for newsletter request", articles.len());

    let newsletter = nlg_agent::generate_newsletter(state.model.as_ref(), &articles).await?;
    Ok(Json(newsletter))
}
