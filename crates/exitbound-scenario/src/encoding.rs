//! SHAREABLE SCENARIO ENCODING
//!
//! A scenario persists as an opaque, URL-safe text blob: its JSON form
//! percent-encoded into a single query parameter. This round trip is the
//! model's only durable-state mechanism; malformed payloads surface as "no
//! scenario present", never as a fault.

use log::warn;

use crate::scenario::Scenario;

/// Query parameter carrying the encoded scenario.
pub const SCENARIO_QUERY_KEY: &str = "scenario";

// Unreserved set of javascript's encodeURIComponent, so payloads stay
// byte-compatible with links minted by the web front end.
fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(
            byte,
            b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')'
        )
}

fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &byte in input.as_bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

fn percent_decode(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0usize;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                if i + 2 >= bytes.len() {
                    return None;
                }
                let hi = (bytes[i + 1] as char).to_digit(16)? as u8;
                let lo = (bytes[i + 2] as char).to_digit(16)? as u8;
                out.push((hi << 4) | lo);
                i += 3;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8(out).ok()
}

/// Serialize a scenario into the shareable payload.
///
/// Nothing is dropped: cohort order, numeric precision, and optional-field
/// presence all survive [`decode_scenario`].
pub fn encode_scenario(scenario: &Scenario) -> String {
    let json = serde_json::to_string(scenario).expect("scenario serializes to JSON");
    percent_encode(&json)
}

/// Inverse of [`encode_scenario`]. Malformed or truncated payloads yield
/// `None`; callers fall back to a preset.
pub fn decode_scenario(payload: &str) -> Option<Scenario> {
    let json = percent_decode(payload)?;
    match serde_json::from_str(&json) {
        Ok(scenario) => Some(scenario),
        Err(err) => {
            warn!("discarding malformed scenario payload: {err}");
            None
        }
    }
}

/// Render `scenario=<payload>` for embedding in a share link.
pub fn to_query_string(scenario: &Scenario) -> String {
    format!("{SCENARIO_QUERY_KEY}={}", encode_scenario(scenario))
}

/// Pull a scenario back out of a query string, tolerating a leading `?` and
/// ignoring unrelated parameters.
pub fn from_query_string(query: &str) -> Option<Scenario> {
    let query = query.strip_prefix('?').unwrap_or(query);
    for part in query.split('&') {
        let (key, value) = match part.split_once('=') {
            Some(pair) => pair,
            None => continue,
        };
        if key == SCENARIO_QUERY_KEY {
            return decode_scenario(value);
        }
    }
    None
}
