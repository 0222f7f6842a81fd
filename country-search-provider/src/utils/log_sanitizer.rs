//! Response bodies in debug logs
//!
//! A short search term can match dozens of countries, so only the head of
//! a body is logged. Array bodies are cut after the last whole country
//! object that fits.

/// Bytes of a body kept in a log line.
const LOG_BODY_LIMIT: usize = 512;

/// Shorten a response body for a debug log line.
///
/// Bodies up to the limit pass through. A longer JSON array keeps its
/// complete leading elements and reports how many were shown; anything
/// else is cut at the last char boundary under the limit.
pub fn truncate_for_log(body: &str) -> String {
    if body.len() <= LOG_BODY_LIMIT {
        return body.to_string();
    }

    match element_boundary(body, LOG_BODY_LIMIT) {
        Some((end, shown)) => format!(
            "{}, ... [{shown} entries shown, {} bytes total]",
            &body[..end],
            body.len()
        ),
        None => format!(
            "{}... [{} bytes total]",
            &body[..char_floor(body, LOG_BODY_LIMIT)],
            body.len()
        ),
    }
}

/// End offset of the last top-level array element closed before `limit`,
/// with the number of elements up to it.
fn element_boundary(body: &str, limit: usize) -> Option<(usize, usize)> {
    if !body.trim_start().starts_with('[') {
        return None;
    }

    let mut depth = 0_usize;
    let mut in_string = false;
    let mut escaped = false;
    let mut boundary = None;
    let mut shown = 0;

    for (i, byte) in body.bytes().enumerate().take(limit) {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => depth += 1,
            b']' | b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 1 {
                    shown += 1;
                    boundary = Some((i + 1, shown));
                }
            }
            _ => {}
        }
    }

    boundary
}

fn char_floor(s: &str, index: usize) -> usize {
    (0..=index.min(s.len()))
        .rev()
        .find(|&i| s.is_char_boundary(i))
        .unwrap_or(0)
}
