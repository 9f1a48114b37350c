use redis::aio::ConnectionManager;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Cache miss: {0}")]
    CacheMiss(String),
}

/// Shared Redis tier. Every call is best effort: a failing Redis is
/// logged and reported as a miss so lookups fall through to the store.
struct SharedTier {
    conn: Mutex<ConnectionManager>,
    ttl_secs: u64,
}

impl SharedTier {
    async fn fetch(&self, key: &str) -> Option<String> {
        let mut conn = self.conn.lock().await;
        let result: redis::RedisResult<Option<String>> =
            redis::cmd("GET").arg(key).query_async(&mut *conn).await;
        match result {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Redis GET {} failed: {}", key, e);
                None
            }
        }
    }

    async fn store(&self, key: &str, json: &str) {
        let mut conn = self.conn.lock().await;
        let result: redis::RedisResult<()> = redis::cmd("SETEX")
            .arg(key)
            .arg(self.ttl_secs)
            .arg(json)
            .query_async(&mut *conn)
            .await;
        if let Err(e) = result {
            tracing::warn!("Redis SETEX {} failed: {}", key, e);
        }
    }
}

/// Catalog cache: moka in process, Redis across instances when configured
///
/// Nothing is invalidated explicitly. Entries in both tiers expire after
/// `ttl_secs`, so catalog edits show up within one TTL.
pub struct CacheManager {
    shared: Option<Arc<SharedTier>>,
    local: moka::future::Cache<String, Arc<str>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CacheManager {
    /// Connect the Redis tier. Fails only if Redis is unreachable at startup.
    pub async fn new(redis_url: &str, l1_size: u64, ttl_secs: u64) -> Result<Self, CacheError> {
        let client = redis::Client::open(redis_url)?;
        let conn = ConnectionManager::new(client).await?;

        let mut cache = Self::in_memory(l1_size, ttl_secs);
        cache.shared = Some(Arc::new(SharedTier {
            conn: Mutex::new(conn),
            ttl_secs,
        }));
        Ok(cache)
    }

    pub fn in_memory(l1_size: u64, ttl_secs: u64) -> Self {
        let local = moka::future::CacheBuilder::new(l1_size)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self {
            shared: None,
            local,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn has_redis(&self) -> bool {
        self.shared.is_some()
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T, CacheError> {
        let json = match self.local.get(key).await {
            Some(json) => Some(json),
            None => self.promote(key).await,
        };

        match json {
            Some(json) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                tracing::trace!("Cache hit: {}", key);
                Ok(serde_json::from_str(&json)?)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                tracing::trace!("Cache miss: {}", key);
                Err(CacheError::CacheMiss(key.to_string()))
            }
        }
    }

    // Copy a Redis entry into the local tier
    async fn promote(&self, key: &str) -> Option<Arc<str>> {
        let json: Arc<str> = self.shared.as_ref()?.fetch(key).await?.into();
        self.local.insert(key.to_string(), json.clone()).await;
        Some(json)
    }

    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let json: Arc<str> = serde_json::to_string(value)?.into();

        if let Some(shared) = &self.shared {
            shared.store(key, &json).await;
        }
        self.local.insert(key.to_string(), json).await;

        Ok(())
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            l1_entries: self.local.entry_count(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            redis_enabled: self.has_redis(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub l1_entries: u64,
    pub hits: u64,
    pub misses: u64,
    pub redis_enabled: bool,
}

/// Key namespace for cached catalog records
pub struct CacheKey;

impl CacheKey {
    pub fn universities() -> String {
        "catalog:universities".to_string()
    }

    pub fn student(student_id: &str) -> String {
        format!("student:{}", student_id)
    }
}
