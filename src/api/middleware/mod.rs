//! Request middleware: authentication and throttling.

pub mod auth;
pub mod rate_limit;

pub use auth::{auth_middleware, ApiContext, AuthState};
pub use rate_limit::{rate_limit_middleware, RateLimiterState};
