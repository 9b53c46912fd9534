//! Exponential backoff with jitter for carrier call retries.

use std::time::Duration;

use rand::Rng;

use crate::config::RetryConfig;

/// Delay before the given retry attempt (attempt 0 is the first try).
pub fn backoff_delay(attempt: u32, config: &RetryConfig) -> Duration {
    if attempt == 0 {
        return Duration::from_millis(0);
    }

    let exponential_base = 2u64.saturating_pow(attempt - 1);
    let delay_ms = config.base_delay_ms.saturating_mul(exponential_base);
    let capped_delay = delay_ms.min(config.max_delay_ms);

    // Jitter up to 10% so concurrent retries spread out
    let jitter_range = capped_delay / 10;
    let jitter = if jitter_range > 0 {
        rand::thread_rng().gen_range(0..jitter_range)
    } else {
        0
    };

    Duration::from_millis(capped_delay + jitter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_grows_and_caps() {
        let config = RetryConfig {
            base_delay_ms: 100,
            max_delay_ms: 1000,
            ..Default::default()
        };

        assert_eq!(backoff_delay(0, &config), Duration::from_millis(0));

        let first = backoff_delay(1, &config);
        assert!(first.as_millis() >= 100);

        let second = backoff_delay(2, &config);
        assert!(second.as_millis() >= 200);

        let capped = backoff_delay(10, &config);
        assert!(capped.as_millis() >= 1000);
        assert!(capped.as_millis() <= 1100);
    }
}
