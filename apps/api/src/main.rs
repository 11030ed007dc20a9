mod catalog;
mod config;
mod errors;
mod matching;
mod quiz;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::loader::CatalogStore;
use crate::config::{Config, MatchStrategy};
use crate::matching::category_match::CategoryMatcher;
use crate::matching::keyword_score::KeywordMatcher;
use crate::matching::BookMatcher;
use crate::quiz::models::QuestionBank;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting bookmatch API v{}", env!("CARGO_PKG_VERSION"));

    // Static question bank, built once and shared read-only
    let questions = Arc::new(QuestionBank::standard());
    info!(
        discovery = questions.discovery.len(),
        professional = questions.professional.len(),
        "question bank ready"
    );

    // Catalog store: re-read per request, so a missing file is only a
    // startup warning, not a startup failure
    let catalog = CatalogStore::new(&config.catalog_path);
    match catalog.resolve_path() {
        Ok(path) => info!(path = %path.display(), "catalog file located"),
        Err(_) => warn!(
            configured = %config.catalog_path,
            "no catalog file present; recommendation requests will fail until one appears"
        ),
    }

    // Ranking strategies: keyword scoring is the canonical default, the
    // category matcher stays selectable via MATCH_STRATEGY
    let keyword = Arc::new(KeywordMatcher);
    let matcher: Arc<dyn BookMatcher> = match config.match_strategy {
        MatchStrategy::Keyword => Arc::clone(&keyword) as Arc<dyn BookMatcher>,
        MatchStrategy::Category => Arc::new(CategoryMatcher),
    };
    info!(strategy = matcher.name(), "book matcher ready");

    let state = AppState {
        config: config.clone(),
        questions,
        catalog,
        matcher,
        keyword,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
