use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder used when an upstream feed entry carries no description.
pub const EMPTY_DESCRIPTION: &str = "내용 없음";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub link: String,
    pub description: String,
    pub published_at: Option<DateTime<Utc>>,
    pub source: String,
}

impl Article {
    pub fn new(title: impl Into<String>, link: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            description: EMPTY_DESCRIPTION.to_string(),
            published_at: None,
            source: source.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        if !description.trim().is_empty() {
            self.description = description;
        }
        self
    }

    pub fn with_published_at(mut self, published_at: Option<DateTime<Utc>>) -> Self {
        self.published_at = published_at;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub title: String,
    pub link: String,
}

/// Result of the topic-selection stage: a newsletter title plus subtopics in
/// generation-priority order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSelection {
    pub title: String,
    pub subtopics: Vec<String>,
}

/// Body text and citations produced for a single subtopic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionContent {
    pub text: String,
    pub references: Vec<Reference>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterSection {
    pub subtopic: String,
    pub content: SectionContent,
}

/// The assembled document: a title and ordered (subtopic, content) pairs.
/// Section order equals the subtopic order returned by topic selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Newsletter {
    pub title: String,
    pub sections: Vec<NewsletterSection>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_placeholder() {
        let article = Article::new("Title", "https://example.com/1", "test");
        assert_eq!(article.description, EMPTY_DESCRIPTION);

        let article = article.with_description("   ");
        assert_eq!(article.description, EMPTY_DESCRIPTION);

        let article = article.with_description("실제 설명");
        assert_eq!(article.description, "실제 설명");
    }

    #[test]
    fn test_topic_selection_roundtrip() {
        let json = r#"{"title":"제목","subtopics":["a","b","c"]}"#;
        let selection: TopicSelection = serde_json::from_str(json).unwrap();
        assert_eq!(selection.title, "제목");
        assert_eq!(selection.subtopics.len(), 3);
    }
}
