use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand, ValueEnum};
use nlg_agent::{create_model, generate_newsletter, ModelConfig};
use nlg_core::{render, Result};
use nlg_feeds::{FeedManager, GoogleNewsSource, NaverNewsSource, SampleSource, SearchQuery};
use nlg_web::AppState;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "AI newsletter generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch matching articles and print them
    Fetch {
        #[command(flatten)]
        fetch: FetchArgs,
    },
    /// Fetch articles and generate the full newsletter
    Generate {
        #[command(flatten)]
        fetch: FetchArgs,
        #[command(flatten)]
        model: ModelArgs,
        /// Output format for the rendered newsletter
        #[arg(long, value_enum, default_value = "markdown")]
        format: OutputFormat,
        /// Write the rendered newsletter to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Run the JSON API server
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: String,
        #[command(flatten)]
        model: ModelArgs,
    },
}

#[derive(Args, Debug)]
struct FetchArgs {
    /// Comma-separated search keywords, e.g. "인공지능, 기후변화"
    #[arg(long)]
    keywords: String,
    /// News source to query: google, naver, sample. Omit to query all.
    #[arg(long)]
    source: Option<String>,
    #[arg(long, default_value_t = SearchQuery::DEFAULT_MAX_ARTICLES)]
    max_articles: usize,
    /// Drop articles older than this many days
    #[arg(long)]
    freshness_days: Option<u32>,
}

#[derive(Args, Debug)]
struct ModelArgs {
    /// Model backend: openai or dummy
    #[arg(long, default_value = "openai")]
    model: String,
    /// API key; falls back to the OPENAI_API_KEY environment variable
    #[arg(long)]
    api_key: Option<String>,
    /// Override the model API base URL (OpenAI-compatible endpoints)
    #[arg(long)]
    base_url: Option<String>,
    /// Model name sent to the backend, e.g. gpt-4o
    #[arg(long)]
    model_name: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Markdown,
    Html,
}

impl FetchArgs {
    fn query(&self) -> SearchQuery {
        SearchQuery::from_keywords(&self.keywords)
            .with_max_articles(self.max_articles)
            .with_freshness_days(self.freshness_days)
    }
}

impl ModelArgs {
    fn config(&self) -> ModelConfig {
        ModelConfig {
            api_key: self
                .api_key
                .clone()
                .or_else(|| std::env::var("OPENAI_API_KEY").ok()),
            model_name: self.model_name.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

/// Registers every source that has usable credentials. Naver needs a client
/// id/secret pair; Google RSS and the sample source are always available.
fn build_feed_manager() -> FeedManager {
    let mut feeds = FeedManager::new();
    feeds.add_source(Box::new(GoogleNewsSource::new()));
    if let (Ok(client_id), Ok(client_secret)) = (
        std::env::var("NAVER_CLIENT_ID"),
        std::env::var("NAVER_CLIENT_SECRET"),
    ) {
        feeds.add_source(Box::new(NaverNewsSource::new(client_id, client_secret)));
    }
    feeds.add_source(Box::new(SampleSource::new()));
    feeds
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch { fetch } => {
            let feeds = build_feed_manager();
            let articles = feeds.search(fetch.source.as_deref(), &fetch.query()).await?;
            info!("📰 Found {} articles", articles.len());
            for article in &articles {
                let published = article
                    .published_at
                    .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "날짜 없음".to_string());
                println!("- [{}] {} ({})", published, article.title, article.source);
                println!("  {}", article.link);
            }
        }
        Commands::Generate {
            fetch,
            model,
            format,
            output,
        } => {
            let feeds = build_feed_manager();
            let articles = feeds.search(fetch.source.as_deref(), &fetch.query()).await?;
            info!("📰 Collected {} articles", articles.len());

            let chat_model = create_model(&model.model, model.config())?;
            info!("🧠 Using model backend: {}", chat_model.name());

            let newsletter = generate_newsletter(chat_model.as_ref(), &articles).await?;
            info!(
                "✨ Newsletter \"{}\" assembled with {} sections",
                newsletter.title,
                newsletter.sections.len()
            );

            let rendered = match format {
                OutputFormat::Markdown => render::render_markdown(&newsletter),
                OutputFormat::Html => render::render_html(&newsletter),
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)?;
                    info!("💾 Wrote newsletter to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }
        Commands::Serve { addr, model } => {
            let state = AppState {
                model: create_model(&model.model, model.config())?,
                feeds: Arc::new(build_feed_manager()),
            };
            nlg_web::serve(&addr, state).await?;
        }
    }

    Ok(())
}
