//! HTTP client layer — `ChartFeedHttp`.

pub mod client;

pub use client::ChartFeedHttp;
