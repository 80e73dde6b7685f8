//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::TieredCache;
use crate::error::{CacheError, Result};
use crate::models::{
    GetResponse, HealthResponse, InvalidateResponse, PutRequest, PutResponse, SizeResponse,
    StatsResponse,
};

/// Application state shared across all handlers.
///
/// Contains the tiered cache wrapped in Arc<RwLock<>> for thread-safe access.
/// All cache operations run under the write lock: even reads mutate recency
/// and may promote entries between tiers.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe tiered cache
    pub cache: Arc<RwLock<TieredCache>>,
}

impl AppState {
    /// Creates a new AppState with the given cache.
    pub fn new(cache: TieredCache) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }
}

/// Handler for PUT /put
///
/// Stores a key-value pair in the fast tier, demoting and evicting as needed.
pub async fn put_handler(
    State(state): State<AppState>,
    Json(req): Json<PutRequest>,
) -> Result<Json<PutResponse>> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    // Acquire write lock and store the value
    let mut cache = state.cache.write().await;
    cache.put(req.key, req.value);

    Ok(Json(PutResponse::new(req.key)))
}

/// Handler for GET /get/:key
///
/// Retrieves a value from the cache by key. A secondary-tier hit promotes
/// the entry back into the fast tier.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<u64>,
) -> Result<Json<GetResponse>> {
    // Write lock: reads refresh recency and may promote
    let mut cache = state.cache.write().await;

    match cache.get(key) {
        Some(value) => Ok(Json(GetResponse::new(key, value))),
        None => Err(CacheError::NotFound(key)),
    }
}

/// Handler for DELETE /invalidate/:key
///
/// Removes a key from whichever tier holds it. Invalidating an absent key is
/// a no-op, reported in the response rather than as an error.
pub async fn invalidate_handler(
    State(state): State<AppState>,
    Path(key): Path<u64>,
) -> Result<Json<InvalidateResponse>> {
    let mut cache = state.cache.write().await;
    let removed = cache.invalidate(key);

    Ok(Json(InvalidateResponse::new(key, removed)))
}

/// Handler for GET /size
///
/// Returns current tier usage.
pub async fn size_handler(State(state): State<AppState>) -> Json<SizeResponse> {
    let cache = state.cache.read().await;
    let size = cache.size();

    Json(SizeResponse::new(size.fast_entries, size.secondary_bytes))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::from_stats(&stats))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
