use std::fmt;
use std::str::FromStr;

use nlg_core::{Article, ChatModel, Error, Result, SectionContent, TopicSelection};

use crate::{content, topics};

/// A single workflow invocation. The variant carries exactly the data its
/// stage needs; there is no shared mutable task state.
#[derive(Debug, Clone)]
pub enum Task {
    SelectTopics {
        articles: Vec<Article>,
    },
    GenerateContent {
        articles: Vec<Article>,
        subtopic: String,
    },
}

impl Task {
    pub fn kind(&self) -> TaskKind {
        match self {
            Task::SelectTopics { .. } => TaskKind::SelectTopics,
            Task::GenerateContent { .. } => TaskKind::GenerateContent,
        }
    }
}

/// Task identifiers as they arrive over the CLI/web boundary. Parsing is the
/// routing edge: an unrecognized kind is an explicit error, never a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    SelectTopics,
    GenerateContent,
}

impl FromStr for TaskKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "SELECT_TOPICS" => Ok(TaskKind::SelectTopics),
            "GENERATE_CONTENT" => Ok(TaskKind::GenerateContent),
            other => Err(Error::Routing(other.to_string())),
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskKind::SelectTopics => write!(f, "SELECT_TOPICS"),
            TaskKind::GenerateContent => write!(f, "GENERATE_CONTENT"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutput {
    Topics(TopicSelection),
    Section(SectionContent),
}

impl TaskOutput {
    pub fn into_topics(self) -> Option<TopicSelection> {
        match self {
            TaskOutput::Topics(selection) => Some(selection),
            TaskOutput::Section(_) => None,
        }
    }

    pub fn into_section(self) -> Option<SectionContent> {
        match self {
            TaskOutput::Section(section) => Some(section),
            TaskOutput::Topics(_) => None,
        }
    }
}

/// Dispatches a task to its stage and returns that stage's result untouched.
/// Two terminal states, no retries, no loop-back edges.
pub async fn run(model: &dyn ChatModel, task: Task) -> Result<TaskOutput> {
    match task {
        Task::SelectTopics { articles } => {
            let selection = topics::select_topics(model, &articles).await?;
            Ok(TaskOutput::Topics(selection))
        }
        Task::GenerateContent { articles, subtopic } => {
            let section = content::generate_content(model, &articles, &subtopic).await?;
            Ok(TaskOutput::Section(section))
        }
    }
}
