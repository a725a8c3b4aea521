//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Routes are an explicit table
//! of (method, pattern, target) entries built once at startup and matched
//! in order; anything the table does not resolve is a 404.

use crate::api;
use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger;
use crate::logger::AccessLogEntry;
use crate::views;
use http_body_util::Full;
use hyper::body::Body as _;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// What a matched route dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RouteTarget {
    /// Render the named template
    Template(&'static str),
    /// Deployment status JSON
    ApiStatus,
    /// Deployment info JSON
    ApiInfo,
    /// Serve the matched file from the asset directory
    Asset,
}

/// Path side of a route entry.
#[derive(Debug, Clone, Copy)]
enum PathPattern {
    /// Exact path match
    Exact(&'static str),
    /// A single `/{name}.js` segment where `{name}` contains no dot
    ScriptSegment,
}

struct Route {
    method: Method,
    pattern: PathPattern,
    target: RouteTarget,
}

/// Result of resolving a request against the table.
#[derive(Debug, PartialEq, Eq)]
pub enum Dispatch<'a> {
    Template(&'static str),
    ApiStatus,
    ApiInfo,
    /// File name relative to the asset directory
    Asset(&'a str),
}

/// Route table: ordered (method, pattern, target) entries.
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        let page = |path, name| Route {
            method: Method::GET,
            pattern: PathPattern::Exact(path),
            target: RouteTarget::Template(name),
        };
        let get = |pattern, target| Route {
            method: Method::GET,
            pattern,
            target,
        };

        Self {
            routes: vec![
                page("/", "index"),
                page("/jugadores", "jugadores"),
                page("/live", "live"),
                page("/partido", "partido"),
                page("/reportes", "reportes"),
                get(PathPattern::Exact("/api/status"), RouteTarget::ApiStatus),
                get(PathPattern::Exact("/api/info"), RouteTarget::ApiInfo),
                get(PathPattern::Exact("/styles.css"), RouteTarget::Asset),
                get(PathPattern::ScriptSegment, RouteTarget::Asset),
            ],
        }
    }

    /// Resolve a request to a dispatch target; `None` is a 404.
    pub fn resolve<'a>(&self, method: &Method, path: &'a str) -> Option<Dispatch<'a>> {
        for route in &self.routes {
            if route.method != *method {
                continue;
            }
            let matched = match route.pattern {
                PathPattern::Exact(p) => p == path,
                PathPattern::ScriptSegment => is_script_segment(path),
            };
            if !matched {
                continue;
            }
            return Some(match route.target {
                RouteTarget::Template(name) => Dispatch::Template(name),
                RouteTarget::ApiStatus => Dispatch::ApiStatus,
                RouteTarget::ApiInfo => Dispatch::ApiInfo,
                RouteTarget::Asset => Dispatch::Asset(path.trim_start_matches('/')),
            });
        }
        None
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Match a `/{name}.js` path: one segment, `.js` suffix, no dot in the stem.
fn is_script_segment(path: &str) -> bool {
    let Some(file) = path.strip_prefix('/') else {
        return false;
    };
    let Some(stem) = file.strip_suffix(".js") else {
        return false;
    };
    !stem.is_empty() && !stem.contains('.') && !stem.contains('/')
}

/// Request context: what the asset handler needs from the headers.
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub if_none_match: Option<String>,
    pub range_header: Option<String>,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = std::time::Instant::now();

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(ToString::to_string);
    let http_version = version_label(req.version());
    let referer = header_string(&req, "referer");
    let user_agent = header_string(&req, "user-agent");

    if state.config.server.debug {
        logger::log_headers_count(req.headers().len());
    }

    let ctx = RequestContext {
        path: &path,
        if_none_match: header_string(&req, "if-none-match"),
        range_header: header_string(&req, "range"),
    };

    let response = dispatch(&ctx, &method, &state).await;

    if state.config.logging.access_log {
        let body_bytes =
            usize::try_from(response.body().size_hint().exact().unwrap_or(0)).unwrap_or(usize::MAX);
        let entry = AccessLogEntry {
            remote_addr: peer_addr.ip().to_string(),
            time: chrono::Local::now(),
            method: method.to_string(),
            path,
            query,
            http_version,
            status: response.status().as_u16(),
            body_bytes,
            referer,
            user_agent,
            request_time_us: u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
        };
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route a request to its handler; unmatched requests get a 404.
async fn dispatch(
    ctx: &RequestContext<'_>,
    method: &Method,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    match state.routes.resolve(method, ctx.path) {
        Some(Dispatch::Template(name)) => serve_template(name),
        Some(Dispatch::ApiStatus) => api::handlers::status(),
        Some(Dispatch::ApiInfo) => api::handlers::info(&state.instance_id),
        Some(Dispatch::Asset(file)) => {
            static_files::serve_asset(ctx, &state.config.assets.dir, file).await
        }
        None => http::build_404_response(),
    }
}

/// Render a named template as the response body.
fn serve_template(name: &str) -> Response<Full<Bytes>> {
    match views::render(name) {
        Some(html) => http::build_html_response(html),
        None => http::build_404_response(),
    }
}

fn header_string(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn version_label(version: hyper::Version) -> String {
    match version {
        hyper::Version::HTTP_10 => "1.0".to_string(),
        hyper::Version::HTTP_2 => "2".to_string(),
        _ => "1.1".to_string(),
    }
}
