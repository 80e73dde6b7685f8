//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for the GET operation (GET /get/:key)
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: u64,
    /// The stored value
    pub value: String,
}

impl GetResponse {
    /// Creates a new GetResponse
    pub fn new(key: u64, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// Response body for the PUT operation (PUT /put)
#[derive(Debug, Clone, Serialize)]
pub struct PutResponse {
    /// Success message
    pub message: String,
    /// The key that was stored
    pub key: u64,
}

impl PutResponse {
    /// Creates a new PutResponse
    pub fn new(key: u64) -> Self {
        Self {
            message: format!("Key {} stored successfully", key),
            key,
        }
    }
}

/// Response body for the INVALIDATE operation (DELETE /invalidate/:key)
#[derive(Debug, Clone, Serialize)]
pub struct InvalidateResponse {
    /// Outcome message
    pub message: String,
    /// The key that was invalidated
    pub key: u64,
    /// Whether an entry was actually removed
    pub removed: bool,
}

impl InvalidateResponse {
    /// Creates a new InvalidateResponse
    pub fn new(key: u64, removed: bool) -> Self {
        let message = if removed {
            format!("Key {} invalidated", key)
        } else {
            format!("Key {} was not cached", key)
        };
        Self {
            message,
            key,
            removed,
        }
    }
}

/// Response body for the size endpoint (GET /size)
#[derive(Debug, Clone, Serialize)]
pub struct SizeResponse {
    /// Number of entries in the fast tier
    pub fast_entries: usize,
    /// Cumulative value bytes in the secondary tier
    pub secondary_bytes: usize,
}

impl SizeResponse {
    /// Creates a new SizeResponse
    pub fn new(fast_entries: usize, secondary_bytes: usize) -> Self {
        Self {
            fast_entries,
            secondary_bytes,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of permanently discarded entries
    pub evictions: u64,
    /// Number of fast -> secondary moves
    pub demotions: u64,
    /// Number of secondary -> fast moves
    pub promotions: u64,
    /// Current fast tier entry count
    pub fast_entries: usize,
    /// Current secondary tier byte usage
    pub secondary_bytes: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn from_stats(stats: &crate::cache::CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            demotions: stats.demotions,
            promotions: stats.promotions,
            fast_entries: stats.fast_entries,
            secondary_bytes: stats.secondary_bytes,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    #[allow(dead_code)]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheStats;

    #[test]
    fn test_get_response_serialize() {
        let resp = GetResponse::new(3, "test_value");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"key\":3"));
        assert!(json.contains("test_value"));
    }

    #[test]
    fn test_put_response_serialize() {
        let resp = PutResponse::new(42);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("42"));
        assert!(json.contains("successfully"));
    }

    #[test]
    fn test_invalidate_response_removed() {
        let resp = InvalidateResponse::new(5, true);
        assert!(resp.removed);
        assert!(resp.message.contains("invalidated"));
    }

    #[test]
    fn test_invalidate_response_noop() {
        let resp = InvalidateResponse::new(5, false);
        assert!(!resp.removed);
        assert!(resp.message.contains("not cached"));
    }

    #[test]
    fn test_size_response_serialize() {
        let resp = SizeResponse::new(10, 2048);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"fast_entries\":10"));
        assert!(json.contains("\"secondary_bytes\":2048"));
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let mut stats = CacheStats::new();
        for _ in 0..80 {
            stats.record_hit();
        }
        for _ in 0..20 {
            stats.record_miss();
        }

        let resp = StatsResponse::from_stats(&stats);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_stats_response_zero_requests() {
        let resp = StatsResponse::from_stats(&CacheStats::new());
        assert_eq!(resp.hit_rate, 0.0);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
