// API module entry
// Read-only JSON endpoints describing the deployment

pub mod handlers;
mod response;
mod types;
