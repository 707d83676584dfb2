// src/api/middleware/mod.rs
pub mod rate_limit;

pub use rate_limit::RouteLimiters;
