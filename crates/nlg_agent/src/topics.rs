use nlg_core::{Article, ChatMessage, ChatModel, Error, Result, TopicSelection};
use tracing::debug;

use crate::{parser, prompts, SAMPLING_TEMPERATURE};

pub const FALLBACK_TITLE: &str = "주간 뉴스 하이라이트";
pub const FALLBACK_SUBTOPICS: [&str; 5] = ["주요 이슈", "산업 동향", "기술 혁신", "경제 전망", "사회 이슈"];

/// The fixed result substituted when topic-selection output cannot be parsed.
pub fn fallback_selection() -> TopicSelection {
    TopicSelection {
        title: FALLBACK_TITLE.to_string(),
        subtopics: FALLBACK_SUBTOPICS.iter().map(|s| s.to_string()).collect(),
    }
}

/// Topic-selection stage: asks the model for a newsletter title and an
/// ordered subtopic list over the full article set.
///
/// Malformed model output degrades to [`fallback_selection`]; transport
/// errors from the model propagate unchanged.
pub async fn select_topics(model: &dyn ChatModel, articles: &[Article]) -> Result<TopicSelection> {
    if articles.is_empty() {
        return Err(Error::NoArticles);
    }

    let messages = [
        ChatMessage::system(prompts::TOPIC_SELECTION_SYSTEM),
        ChatMessage::user(prompts::topic_selection_user(articles)?),
    ];

    let raw = model.complete(&messages, SAMPLING_TEMPERATURE).await?;
    debug!("Topic selection raw response: {} bytes", raw.len());

    Ok(parser::extract_json(&raw, fallback_selection()))
}
