// API payload types module
// Response bodies for the deployment status endpoints

use serde::Serialize;

/// Body of `GET /api/status`
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    /// Fresh per request, naive local ISO-8601 with microseconds
    pub timestamp: String,
    pub server: &'static str,
    pub message: &'static str,
}

/// Body of `GET /api/info`
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub project: &'static str,
    pub technology: &'static str,
    pub instance_id: String,
    pub region: &'static str,
}
