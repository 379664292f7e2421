use std::collections::HashSet;

use chrono::{Duration, Utc};
use nlg_core::{Article, Error, Result};
use tracing::{info, warn};

use crate::sources::{NewsSource, SearchQuery};

type BoxedSource = Box<dyn NewsSource>;

/// Owns the registered news sources and merges their results into one
/// ordered article set: dedup on (title, link), drop stale entries, newest
/// first with undated entries last, capped at the query limit.
pub struct FeedManager {
    sources: Vec<BoxedSource>,
}

impl FeedManager {
    pub fn new() -> Self {
        Self { sources: Vec::new() }
    }

    pub fn add_source(&mut self, source: BoxedSource) {
        self.sources.push(source);
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|source| source.name()).collect()
    }

    fn get_source(&self, name: &str) -> Result<&BoxedSource> {
        self.sources
            .iter()
            .find(|source| source.name() == name)
            .ok_or_else(|| Error::Feed(format!("No news source named {}", name)))
    }

    /// Searches one source by name, or every registered source when `source`
    /// is None. A single failing source is skipped when searching all; a
    /// named source's failure propagates.
    pub async fn search(&self, source: Option<&str>, query: &SearchQuery) -> Result<Vec<Article>> {
        let mut collected = Vec::new();

        if let Some(name) = source {
            let source = self.get_source(name)?;
            collected.extend(source.search(query).await?);
        } else {
            for source in &self.sources {
                match source.search(query).await {
                    Ok(articles) => {
                        info!("📰 {} returned {} articles", source.name(), articles.len());
                        collected.extend(articles);
                    }
                    Err(e) => warn!("Skipping source {}: {}", source.name(), e),
                }
            }
        }

        Ok(Self::consolidate(collected, query))
    }

    fn consolidate(articles: Vec<Article>, query: &SearchQuery) -> Vec<Article> {
        let mut seen = HashSet::new();
        let mut unique: Vec<Article> = articles
            .into_iter()
            .filter(|article| seen.insert((article.title.clone(), article.link.clone())))
            .collect();

        if let Some(days) = query.freshness_days {
            let cutoff = Utc::now() - Duration::days(days as i64);
            unique.retain(|article| match article.published_at {
                Some(published) => published >= cutoff,
                // Undated entries cannot be judged, keep them
                None => true,
            });
        }

        unique.sort_by(|a, b| match (a.published_at, b.published_at) {
            (Some(a_ts), Some(b_ts)) => b_ts.cmp(&a_ts),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        unique.truncate(query.max_articles);
        unique
    }
}

impl Default for FeedManager {
    fn default() -> Self {
        Self::new()
    }
}
