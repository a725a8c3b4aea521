// Deployment status handlers module
// Builds the /api/status and /api/info payloads

use chrono::Local;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use super::response::json_response;
use super::types::{InfoResponse, StatusResponse};

// Values fixed by the deployment, surfaced verbatim in the payloads
const SERVER_LABEL: &str = "AWS EC2 Instance";
const STATUS_MESSAGE: &str = "DevOps Project - AWS CLI Deployment";
const PROJECT_NAME: &str = "AWS DevOps Final Project";
const TECHNOLOGY: &str = "Flask + AWS CLI";
const REGION: &str = "us-east-1";

/// `GET /api/status`
pub fn status() -> Response<Full<Bytes>> {
    json_response(StatusCode::OK, &status_payload())
}

/// `GET /api/info`
pub fn info(instance_id: &str) -> Response<Full<Bytes>> {
    json_response(StatusCode::OK, &info_payload(instance_id))
}

fn status_payload() -> StatusResponse {
    StatusResponse {
        status: "running",
        timestamp: local_timestamp(),
        server: SERVER_LABEL,
        message: STATUS_MESSAGE,
    }
}

fn info_payload(instance_id: &str) -> InfoResponse {
    InfoResponse {
        project: PROJECT_NAME,
        technology: TECHNOLOGY,
        instance_id: instance_id.to_string(),
        region: REGION,
    }
}

/// Current instant as a naive local ISO-8601 string with microsecond
/// precision.
fn local_timestamp() -> String {
    Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}
