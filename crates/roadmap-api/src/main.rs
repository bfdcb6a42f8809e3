//! Career Roadmap API Server

mod advisor;
mod error;
mod knowledge;
mod prompt;
mod routes;

use advisor::{GeminiAdvisor, RoadmapAdvisor};
use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use error::ApiResult;
use knowledge::KnowledgeBase;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Application state shared across handlers
pub struct AppState {
    pub knowledge: KnowledgeBase,
    pub advisor: Arc<dyn RoadmapAdvisor>,
    pub config: AppConfig,
}

/// Application configuration
#[derive(Parser, Clone, Debug)]
#[command(name = "roadmap-api")]
#[command(about = "Career roadmap generation backend")]
#[command(version)]
pub struct AppConfig {
    /// Address to listen on
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:5000")]
    pub bind: String,

    /// JSON file of college/program offering records
    #[arg(long, env = "KNOWLEDGE_BASE_PATH", default_value = "data/offerings.json")]
    pub knowledge_base: PathBuf,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    /// Gemini model used for generation
    #[arg(long, env = "GEMINI_MODEL", default_value = advisor::DEFAULT_MODEL)]
    pub model: String,

    /// Number of knowledge base documents sent as context
    #[arg(long, env = "ROADMAP_RESULTS", default_value_t = 10)]
    pub results: usize,

    /// Sampling temperature
    #[arg(long, default_value_t = 0.8)]
    pub temperature: f32,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::health_check))
        .route("/generate_roadmap", post(routes::roadmap::generate_roadmap))
        .layer(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> ApiResult<()> {
    let config = AppConfig::parse();

    // Initialize tracing
    let default_filter = if config.verbose {
        "roadmap_api=trace,roadmap_core=debug,tower_http=debug"
    } else {
        "roadmap_api=debug,tower_http=debug"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Roadmap API Server");

    let knowledge = KnowledgeBase::load(&config.knowledge_base)?;
    info!(
        "Knowledge base '{}' loaded with {} documents",
        config.knowledge_base.display(),
        knowledge.len()
    );

    let advisor = GeminiAdvisor::new(
        config.gemini_api_key.clone(),
        config.model.clone(),
        config.temperature,
    )?;
    info!("Gemini advisor initialized with model {}", config.model);

    let bind = config.bind.clone();
    let state = Arc::new(AppState {
        knowledge,
        advisor: Arc::new(advisor),
        config,
    });

    info!("Listening on {}", bind);
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::error::ApiError;
    use crate::prompt::RoadmapPrompt;
    use async_trait::async_trait;
    use roadmap_core::LabelUpdate;
    use std::sync::Mutex;

    /// Advisor returning canned labels and recording the prompts it saw.
    #[derive(Default)]
    pub struct StubAdvisor {
        pub labels: Vec<LabelUpdate>,
        pub fail: bool,
        pub prompts: Mutex<Vec<RoadmapPrompt>>,
    }

    #[async_trait]
    impl RoadmapAdvisor for StubAdvisor {
        async fn generate(&self, prompt: &RoadmapPrompt) -> ApiResult<Vec<LabelUpdate>> {
            self.prompts.lock().unwrap().push(prompt.clone());
            if self.fail {
                return Err(ApiError::Advisor("model unavailable".to_string()));
            }
            Ok(self.labels.clone())
        }
    }

    pub fn state(knowledge: KnowledgeBase, advisor: Arc<StubAdvisor>) -> Arc<AppState> {
        let config = AppConfig::parse_from(["roadmap-api", "--gemini-api-key", "test-key"]);
        Arc::new(AppState {
            knowledge,
            advisor,
            config,
        })
    }
}
