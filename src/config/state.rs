// Application state module
// Process-wide state shared across request handlers

use crate::handler::router::RouteTable;

use super::types::Config;

/// Application state
///
/// Built once in `main` and shared behind an `Arc`. Nothing here mutates
/// after startup, so handlers take no locks.
pub struct AppState {
    pub config: Config,
    /// Deployment instance id, read from the environment at startup
    pub instance_id: String,
    /// Route table built once and consulted on every request
    pub routes: RouteTable,
}

impl AppState {
    pub fn new(config: Config, instance_id: String) -> Self {
        Self {
            config,
            instance_id,
            routes: RouteTable::new(),
        }
    }
}
