use std::sync::Arc;

use nlg_core::ChatModel;
use nlg_feeds::FeedManager;

pub struct AppState {
    pub model: Arc<dyn ChatModel>,
    pub feeds: Arc<FeedManager>,
}
