//! Rate limiting middleware with tiered throttling.
//!
//! Anonymous callers are keyed by client IP at the lower per-minute rate;
//! authenticated callers are keyed by their token at the higher rate.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::config::RateLimitConfig;
use crate::observability::metrics;

use super::auth::ApiContext;

/// A simple token bucket rate limiter.
struct TokenBucket {
    tokens: f64,
    last_update: Instant,
}

impl TokenBucket {
    fn new(capacity: f64) -> Self {
        Self {
            tokens: capacity,
            last_update: Instant::now(),
        }
    }

    fn try_acquire(&mut self, capacity: f64, refill_per_sec: f64) -> bool {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_update).as_secs_f64();

        // Refill tokens
        self.tokens = (self.tokens + elapsed * refill_per_sec).min(capacity);
        self.last_update = now;

        if self.tokens >= 1.0 {
            self.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}

/// Buckets idle this long are dropped. Any bucket refills completely
/// within a minute, so an evicted client starts over at full capacity.
const IDLE_EVICT: Duration = Duration::from_secs(300);

/// Minimum interval between eviction sweeps.
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

struct Buckets {
    map: HashMap<String, TokenBucket>,
    last_sweep: Instant,
}

/// State for the tiered rate limiter.
pub struct RateLimiterState {
    buckets: Mutex<Buckets>,
    config: RateLimitConfig,
}

impl RateLimiterState {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            buckets: Mutex::new(Buckets {
                map: HashMap::new(),
                last_sweep: Instant::now(),
            }),
            config,
        }
    }

    fn check(&self, key: String, authenticated: bool) -> bool {
        if !self.config.enabled {
            return true;
        }

        let per_minute = if authenticated {
            self.config.authenticated_per_minute
        } else {
            self.config.anonymous_per_minute
        };
        let capacity = per_minute as f64;
        let refill_per_sec = capacity / 60.0;

        let mut buckets = self.buckets.lock().expect("rate limiter mutex poisoned");

        // Keep the map bounded: one entry per recently-seen client only.
        let now = Instant::now();
        if now.duration_since(buckets.last_sweep) >= SWEEP_INTERVAL {
            buckets
                .map
                .retain(|_, bucket| now.duration_since(bucket.last_update) < IDLE_EVICT);
            buckets.last_sweep = now;
        }

        let bucket = buckets
            .map
            .entry(key)
            .or_insert_with(|| TokenBucket::new(capacity));

        bucket.try_acquire(capacity, refill_per_sec)
    }
}

/// Middleware function for tiered rate limiting.
pub async fn rate_limit_middleware(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    State(state): State<Arc<RateLimiterState>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let (key, authenticated) = if let Some(ctx) = request.extensions().get::<ApiContext>() {
        (format!("token:{}", ctx.token), true)
    } else {
        (addr.ip().to_string(), false)
    };

    if state.check(key.clone(), authenticated) {
        next.run(request).await
    } else {
        let tier = if authenticated {
            "authenticated"
        } else {
            "anonymous"
        };
        tracing::warn!(client = %key, tier, "Rate limit exceeded");
        metrics::record_rate_limited(tier);
        let mut response = Response::new(Body::from("Rate limit exceeded"));
        *response.status_mut() = StatusCode::TOO_MANY_REQUESTS;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(anonymous: u32, authenticated: u32) -> RateLimiterState {
        RateLimiterState::new(RateLimitConfig {
            enabled: true,
            anonymous_per_minute: anonymous,
            authenticated_per_minute: authenticated,
        })
    }

    #[test]
    fn test_bucket_exhausts_at_capacity() {
        let limiter = state(2, 60);
        assert!(limiter.check("1.2.3.4".to_string(), false));
        assert!(limiter.check("1.2.3.4".to_string(), false));
        assert!(!limiter.check("1.2.3.4".to_string(), false));
        // Other clients are unaffected.
        assert!(limiter.check("5.6.7.8".to_string(), false));
    }

    #[test]
    fn test_tiers_are_independent() {
        let limiter = state(1, 3);
        assert!(limiter.check("1.2.3.4".to_string(), false));
        assert!(!limiter.check("1.2.3.4".to_string(), false));

        assert!(limiter.check("token:abc".to_string(), true));
        assert!(limiter.check("token:abc".to_string(), true));
        assert!(limiter.check("token:abc".to_string(), true));
        assert!(!limiter.check("token:abc".to_string(), true));
    }

    #[test]
    fn test_idle_buckets_are_evicted() {
        let limiter = state(2, 60);
        assert!(limiter.check("1.2.3.4".to_string(), false));
        assert!(limiter.check("5.6.7.8".to_string(), false));

        // Backdate one bucket past the idle window and force a sweep.
        {
            let mut buckets = limiter.buckets.lock().unwrap();
            let Some(idle_since) = Instant::now().checked_sub(IDLE_EVICT + SWEEP_INTERVAL) else {
                return;
            };
            buckets.map.get_mut("1.2.3.4").unwrap().last_update = idle_since;
            buckets.last_sweep = idle_since;
        }
        assert!(limiter.check("5.6.7.8".to_string(), false));

        let buckets = limiter.buckets.lock().unwrap();
        assert!(!buckets.map.contains_key("1.2.3.4"));
        assert!(buckets.map.contains_key("5.6.7.8"));
    }

    #[test]
    fn test_disabled_limiter_always_allows() {
        let limiter = RateLimiterState::new(RateLimitConfig {
            enabled: false,
            anonymous_per_minute: 1,
            authenticated_per_minute: 1,
        });
        for _ in 0..10 {
            assert!(limiter.check("1.2.3.4".to_string(), false));
        }
    }
}
