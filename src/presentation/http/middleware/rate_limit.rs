// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type RateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client limit of 10 requests per second with bursts of 20.
/// `None` when the limiter configuration is rejected.
pub fn rate_limit_layer() -> Option<RateLimitLayer> {
    static RATE_LIMITER: OnceLock<Option<RateLimitLayer>> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(10);
            builder.burst_size(20);
            let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;
            Some(GovernorLayer::new(config))
        })
        .clone()
}
