//! Static asset serving module
//!
//! Resolves asset files inside the configured asset directory and builds
//! cached or partial responses for them.

use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime, range::RangeParseResult};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Serve a file from the asset directory.
pub async fn serve_asset(
    ctx: &RequestContext<'_>,
    asset_dir: &str,
    file_name: &str,
) -> Response<Full<Bytes>> {
    match load_asset(asset_dir, file_name).await {
        Some((content, content_type)) => build_asset_response(
            &content,
            content_type,
            ctx.if_none_match.as_deref(),
            ctx.range_header.as_deref(),
        ),
        None => http::build_404_response(),
    }
}

/// Resolve and read an asset, constrained to the asset directory.
async fn load_asset(asset_dir: &str, file_name: &str) -> Option<(Vec<u8>, &'static str)> {
    let file_path = resolve_asset_path(asset_dir, file_name)?;

    let content = match fs::read(&file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read asset '{}': {e}",
                file_path.display()
            ));
            return None;
        }
    };

    let content_type = mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));
    Some((content, content_type))
}

/// Canonicalize the candidate path and reject anything that escapes the
/// asset directory.
fn resolve_asset_path(asset_dir: &str, file_name: &str) -> Option<PathBuf> {
    let dir = match Path::new(asset_dir).canonicalize() {
        Ok(d) => d,
        Err(e) => {
            logger::log_warning(&format!(
                "Asset directory not found or inaccessible '{asset_dir}': {e}"
            ));
            return None;
        }
    };

    // A missing file is an ordinary 404, not worth a warning
    let candidate = dir.join(file_name).canonicalize().ok()?;

    if !candidate.starts_with(&dir) {
        logger::log_warning(&format!(
            "Asset resolution escaping '{asset_dir}' blocked: {file_name} -> {}",
            candidate.display()
        ));
        return None;
    }

    Some(candidate)
}

/// Build the asset response with `ETag` and Range support.
fn build_asset_response(
    data: &[u8],
    content_type: &str,
    if_none_match: Option<&str>,
    range_header: Option<&str>,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(data);
    let total_size = data.len();

    // Client copy is current
    if cache::check_etag_match(if_none_match, &etag) {
        return http::build_304_response(&etag);
    }

    match http::parse_range_header(range_header, total_size) {
        RangeParseResult::Valid(range) => http::build_partial_response(
            Bytes::from(data[range.start..=range.end].to_vec()),
            content_type,
            &etag,
            range.start,
            range.end,
            total_size,
        ),
        RangeParseResult::NotSatisfiable => http::build_416_response(total_size),
        RangeParseResult::None => {
            http::build_cached_response(Bytes::from(data.to_owned()), content_type, &etag)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;

    /// Scratch asset directory with one file inside and one outside.
    struct Scratch {
        root: PathBuf,
        assets: PathBuf,
    }

    impl Scratch {
        fn new(tag: &str) -> Self {
            let root = std::env::temp_dir().join(format!("statsbasket-{}-{tag}", std::process::id()));
            let assets = root.join("assets");
            std_fs::create_dir_all(&assets).unwrap();
            std_fs::write(assets.join("styles.css"), b"body { margin: 0 }").unwrap();
            std_fs::write(root.join("outside.txt"), b"secret").unwrap();
            Self { root, assets }
        }

        fn assets_dir(&self) -> &str {
            self.assets.to_str().unwrap()
        }
    }

    impl Drop for Scratch {
        fn drop(&mut self) {
            let _ = std_fs::remove_dir_all(&self.root);
        }
    }

    #[test]
    fn test_resolve_inside_asset_dir() {
        let scratch = Scratch::new("resolve");
        let path = resolve_asset_path(scratch.assets_dir(), "styles.css").unwrap();
        assert!(path.ends_with("styles.css"));
    }

    #[test]
    fn test_resolve_missing_file_is_none() {
        let scratch = Scratch::new("missing");
        assert!(resolve_asset_path(scratch.assets_dir(), "nope.js").is_none());
    }

    #[test]
    fn test_resolve_blocks_directory_escape() {
        let scratch = Scratch::new("escape");
        assert!(resolve_asset_path(scratch.assets_dir(), "../outside.txt").is_none());
    }

    #[test]
    fn test_resolve_missing_directory_is_none() {
        assert!(resolve_asset_path("no-such-asset-dir", "styles.css").is_none());
    }

    #[tokio::test]
    async fn test_load_asset_returns_bytes_and_type() {
        let scratch = Scratch::new("load");
        let (content, content_type) = load_asset(scratch.assets_dir(), "styles.css")
            .await
            .unwrap();
        assert_eq!(content, b"body { margin: 0 }");
        assert_eq!(content_type, "text/css");
    }

    #[test]
    fn test_full_response_carries_etag() {
        let response = build_asset_response(b"console.log(1)", "application/javascript", None, None);
        assert_eq!(response.status(), 200);
        assert!(response.headers().contains_key("etag"));
    }

    #[test]
    fn test_matching_etag_turns_into_304() {
        let data = b"body { margin: 0 }";
        let etag = cache::generate_etag(data);
        let response = build_asset_response(data, "text/css", Some(&etag), None);
        assert_eq!(response.status(), 304);
    }

    #[test]
    fn test_range_request_turns_into_206() {
        let response = build_asset_response(b"0123456789", "text/css", None, Some("bytes=0-3"));
        assert_eq!(response.status(), 206);
        assert_eq!(response.headers()["content-range"], "bytes 0-3/10");
    }

    #[test]
    fn test_unsatisfiable_range_turns_into_416() {
        let response = build_asset_response(b"0123", "text/css", None, Some("bytes=100-"));
        assert_eq!(response.status(), 416);
    }
}
