//! Caching layer for planning responses.
//!
//! Planning calls are slow and expensive upstream (a language model
//! generates the text), while the itinerary for a given set of preferences
//! is stable enough to reuse. We cache successful responses keyed by the
//! full validated `TripRequest`; failures are never cached, so a retry
//! after an outage goes back to the service.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::TripRequest;
use crate::planning::{PlanTrip, PlannerError};

/// Cached itinerary text.
type ItineraryEntry = Arc<String>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 256,
        }
    }
}

/// Cache for planning responses, keyed by the full request.
pub struct PlannerCache {
    entries: MokaCache<TripRequest, ItineraryEntry>,
}

impl PlannerCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let entries = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { entries }
    }

    /// Get a cached itinerary.
    pub async fn get(&self, key: &TripRequest) -> Option<ItineraryEntry> {
        self.entries.get(key).await
    }

    /// Insert an itinerary into the cache.
    pub async fn insert(&self, key: TripRequest, entry: ItineraryEntry) {
        self.entries.insert(key, entry).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.entries.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.entries.invalidate_all();
    }
}

/// Planner client with caching.
///
/// Wraps any [`PlanTrip`] implementation and caches successful responses.
pub struct CachedPlannerClient<C> {
    client: C,
    cache: PlannerCache,
}

impl<C> CachedPlannerClient<C> {
    /// Create a new cached client.
    pub fn new(client: C, cache_config: &CacheConfig) -> Self {
        Self {
            client,
            cache: PlannerCache::new(cache_config),
        }
    }

    /// Access the underlying client for operations that bypass the cache.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}

impl<C> PlanTrip for CachedPlannerClient<C>
where
    C: PlanTrip + Sync,
{
    async fn plan_trip(&self, request: &TripRequest) -> Result<String, PlannerError> {
        if let Some(cached) = self.cache.get(request).await {
            tracing::debug!(destination = request.destination(), "planner cache hit");
            return Ok((*cached).clone());
        }

        let text = self.client.plan_trip(request).await?;

        self.cache
            .insert(request.clone(), Arc::new(text.clone()))
            .await;

        Ok(text)
    }
}
