//! AstroSoul server binary.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use astrosoul::adapters::ai::{GeminiConfig, GeminiProvider};
use astrosoul::adapters::http::{app_router, AppState};
use astrosoul::adapters::storage::{FilePortraitCache, InMemoryPortraitCache, RedisPortraitCache};
use astrosoul::config::{AiConfig, AppConfig, CacheBackend, CacheConfig, LogFormat};
use astrosoul::ports::{GenerationClient, PortraitCache};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    if !config.ai.has_gemini() {
        tracing::warn!("No Gemini API key configured; generation requests will fail");
    }

    let client = build_client(&config.ai)?;
    let cache = build_cache(&config.cache).await?;

    let state = AppState::new(client, cache);
    let app = app_router(state, &config.server.cors_origins_list());

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "AstroSoul listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    match config.server.log_format() {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

fn build_client(ai: &AiConfig) -> Result<Arc<dyn GenerationClient>, Box<dyn std::error::Error>> {
    let gemini = GeminiConfig::new(ai.gemini_api_key.clone())
        .with_base_url(ai.base_url.clone())
        .with_text_model(ai.text_model.clone())
        .with_image_model(ai.image_model.clone())
        .with_timeout(ai.timeout());

    let provider: Arc<dyn GenerationClient> = Arc::new(GeminiProvider::new(gemini)?);
    Ok(provider)
}

async fn build_cache(
    cache: &CacheConfig,
) -> Result<Arc<dyn PortraitCache>, Box<dyn std::error::Error>> {
    let backend: Arc<dyn PortraitCache> = match cache.backend {
        CacheBackend::Memory => Arc::new(InMemoryPortraitCache::new()),
        CacheBackend::File => {
            tracing::info!(directory = %cache.directory.display(), "Using file portrait cache");
            Arc::new(FilePortraitCache::new(&cache.directory))
        }
        CacheBackend::Redis => {
            let url = cache.redis_url.as_deref().unwrap_or_default();
            Arc::new(RedisPortraitCache::connect(url).await?)
        }
    };
    Ok(backend)
}
