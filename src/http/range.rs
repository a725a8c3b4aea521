//! HTTP Range request parsing module
//!
//! Single-range `bytes=` parsing for partial asset responses, compliant
//! with RFC 7233.

/// A byte range resolved against the file size; both bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

/// Range header parse result
#[derive(Debug)]
pub enum RangeParseResult {
    /// Valid range, already clamped to the file size
    Valid(ByteRange),
    /// Start lies beyond the file - should return 416
    NotSatisfiable,
    /// No Range header, non-bytes unit, or malformed - serve full content
    None,
}

/// Parse an HTTP Range header (single range only, bytes unit)
///
/// Supported forms:
/// - `bytes=start-end`
/// - `bytes=start-` (to end of file)
/// - `bytes=-suffix` (last suffix bytes)
///
/// Multi-range requests and unparseable values are ignored rather than
/// rejected, so the caller falls back to a full 200 response.
pub fn parse_range_header(range_header: Option<&str>, file_size: usize) -> RangeParseResult {
    let Some(header) = range_header else {
        return RangeParseResult::None;
    };

    let Some(spec) = header.strip_prefix("bytes=") else {
        return RangeParseResult::None;
    };

    if spec.contains(',') {
        return RangeParseResult::None;
    }

    let Some((start_str, end_str)) = spec.split_once('-') else {
        return RangeParseResult::None;
    };
    let (start_str, end_str) = (start_str.trim(), end_str.trim());

    if start_str.is_empty() {
        return parse_suffix(end_str, file_size);
    }

    parse_bounded(start_str, end_str, file_size)
}

/// Suffix form: "-500" means the last 500 bytes
fn parse_suffix(suffix_str: &str, file_size: usize) -> RangeParseResult {
    let Ok(suffix) = suffix_str.parse::<usize>() else {
        return RangeParseResult::None;
    };

    if suffix == 0 || file_size == 0 {
        return RangeParseResult::NotSatisfiable;
    }

    // A suffix longer than the file covers the whole file
    RangeParseResult::Valid(ByteRange {
        start: file_size.saturating_sub(suffix),
        end: file_size - 1,
    })
}

/// Standard form: "start-" or "start-end"
fn parse_bounded(start_str: &str, end_str: &str, file_size: usize) -> RangeParseResult {
    let Ok(start) = start_str.parse::<usize>() else {
        return RangeParseResult::None;
    };

    if start >= file_size {
        return RangeParseResult::NotSatisfiable;
    }

    let end = if end_str.is_empty() {
        file_size - 1
    } else {
        let Ok(e) = end_str.parse::<usize>() else {
            return RangeParseResult::None;
        };
        e.min(file_size - 1)
    };

    if start > end {
        return RangeParseResult::NotSatisfiable;
    }

    RangeParseResult::Valid(ByteRange { start, end })
}
