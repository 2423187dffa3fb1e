//! HTTP API: routing and request/response mapping over the product catalog.

pub mod app;
pub mod config;
