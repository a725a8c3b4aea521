//! StatsBasket web server
//!
//! Serves the StatsBasket site: five static HTML pages, a static asset
//! directory (stylesheet and per-page ES modules), and two read-only JSON
//! endpoints describing the deployment.

pub mod api;
pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
pub mod views;
