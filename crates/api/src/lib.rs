//! HTTP surface of the showcase: routing, gating middleware, and
//! request/response mapping.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
