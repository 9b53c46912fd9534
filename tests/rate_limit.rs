//! Tiered throttling behavior over the wire.

mod common;

#[tokio::test]
async fn test_anonymous_tier_throttles_after_capacity() {
    let carrier_addr = common::start_mock_carrier(common::PICKUP_SUCCESS_XML).await;
    let mut config = common::test_config(carrier_addr);
    config.rate_limit.anonymous_per_minute = 3;
    config.rate_limit.authenticated_per_minute = 60;
    let base_url = common::start_gateway(config).await;

    let client = reqwest::Client::new();
    for _ in 0..3 {
        let res = client
            .get(format!("{}/health", base_url))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 200);
    }

    let res = client
        .get(format!("{}/health", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 429);
}

#[tokio::test]
async fn test_authenticated_tier_has_own_budget() {
    let carrier_addr = common::start_mock_carrier(common::PICKUP_SUCCESS_XML).await;
    let mut config = common::test_config(carrier_addr);
    config.rate_limit.anonymous_per_minute = 1;
    config.rate_limit.authenticated_per_minute = 5;
    config.auth.api_tokens = vec!["test-token".to_string()];
    let base_url = common::start_gateway(config).await;

    let client = reqwest::Client::new();

    // Exhaust the anonymous budget.
    let res = client
        .get(format!("{}/health", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let res = client
        .get(format!("{}/health", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 429);

    // Authenticated callers are keyed by token, not IP.
    for _ in 0..5 {
        let res = client
            .get(format!("{}/health", base_url))
            .bearer_auth("test-token")
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 200);
    }
    let res = client
        .get(format!("{}/health", base_url))
        .bearer_auth("test-token")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 429);
}

#[tokio::test]
async fn test_unknown_token_is_rejected() {
    let carrier_addr = common::start_mock_carrier(common::PICKUP_SUCCESS_XML).await;
    let mut config = common::test_config(carrier_addr);
    config.auth.api_tokens = vec!["test-token".to_string()];
    let base_url = common::start_gateway(config).await;

    let res = reqwest::Client::new()
        .get(format!("{}/health", base_url))
        .bearer_auth("wrong-token")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 401);
}
