use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use admit_algo::config::{CatalogBackend, Settings};
use admit_algo::core::Matcher;
use admit_algo::models::ScoringWeights;
use admit_algo::routes::{self, AppState};
use admit_algo::services::{CacheManager, CatalogStore, MemoryCatalog, PostgresClient};
use admit_algo::telemetry;
use std::sync::Arc;
use tracing::{error, info, warn};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();

    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();
    if let Err(e) = telemetry::init(&logging) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("Configuration error: {}", e))
    })?;

    info!("Starting Admit Algo recommendation service...");

    // Initialize catalog store
    let store = match settings.catalog.backend {
        CatalogBackend::Memory => {
            let catalog = MemoryCatalog::from_path(&settings.catalog.seed_path).map_err(|e| {
                error!("Failed to load catalog seed {}: {}", settings.catalog.seed_path, e);
                std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
            })?;
            CatalogStore::from(catalog)
        }
        CatalogBackend::Postgres => {
            let client = PostgresClient::from_settings(
                &settings.database.url,
                settings.database.max_connections,
                settings.database.min_connections,
                settings.database.acquire_timeout_secs,
                settings.database.idle_timeout_secs,
            )
            .await
            .map_err(|e| {
                error!("Failed to connect to PostgreSQL: {}", e);
                std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string())
            })?;
            CatalogStore::from(client)
        }
    };

    info!("Catalog store initialized ({} backend)", store.backend_name());

    // Initialize cache manager (Redis is optional)
    let cache_ttl = settings.cache.ttl_secs.unwrap_or(300);
    let l1_cache_size = settings.cache.l1_cache_size.unwrap_or(1000);

    let cache = match settings.cache.redis_url.as_deref() {
        Some(redis_url) => match CacheManager::new(redis_url, l1_cache_size, cache_ttl).await {
            Ok(cache) => cache,
            Err(e) => {
                warn!("Failed to connect to Redis ({}), running with in-process cache only", e);
                CacheManager::in_memory(l1_cache_size, cache_ttl)
            }
        },
        None => CacheManager::in_memory(l1_cache_size, cache_ttl),
    };

    info!(
        "Cache manager initialized (L1: {} entries, TTL: {}s, Redis: {})",
        l1_cache_size,
        cache_ttl,
        cache.has_redis()
    );

    // Initialize matcher with configured weights and unit rule
    let weights = ScoringWeights::from(&settings.scoring.weights);
    let matcher = Matcher::new(weights, settings.scoring.unit_rule.build());

    info!("Matcher initialized with weights: {:?}, unit rule: {:?}", weights, settings.scoring.unit_rule);

    let app_state = AppState {
        store: Arc::new(store),
        cache: Arc::new(cache),
        matcher,
        default_limit: settings.default_limit(),
        max_limit: settings.max_limit(),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
