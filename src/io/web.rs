//! Framework-agnostic HTTP adapter: route parsing, response building and
//! conditional-request checks
//!
//! Two routes are served: `{width}x{height}.svg` renders with a random seed
//! and `{width}x{height}/{seed}.svg` pins it. Query pairs become decision
//! overrides.

use crate::algorithm::executor::{RenderRequest, Wallpaper};
use crate::io::configuration::{CONTENT_TYPE, PINNED_SEED_EPOCH_SECS};
use crate::io::error::{Result, invalid_parameter};
use crate::io::svg::render_svg;
use std::collections::HashMap;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Query key that supplies a seed when the route carries none
const SEED_KEY: &str = "seed";

/// A parsed wallpaper route
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    /// Requested width
    pub width: u32,
    /// Requested height
    pub height: u32,
    /// Seed from the path, if any
    pub seed: Option<String>,
}

impl Route {
    /// Parse `{w}x{h}.svg` or `{w}x{h}/{seed}.svg`, with or without a leading `/`
    ///
    /// # Errors
    ///
    /// Returns an error if the path matches neither route or a dimension is
    /// not a positive integer
    pub fn parse(path: &str) -> Result<Self> {
        let trimmed = path.trim_start_matches('/');
        let Some(stem) = trimmed.strip_suffix(".svg") else {
            return Err(invalid_parameter("path", &path, &"expected a .svg route"));
        };

        let (size, seed) = match stem.split_once('/') {
            Some((size, seed)) if !seed.is_empty() => (size, Some(percent_decode(seed, false))),
            Some(_) => return Err(invalid_parameter("path", &path, &"empty seed segment")),
            None => (stem, None),
        };

        let Some((width, height)) = size.split_once('x') else {
            return Err(invalid_parameter(
                "path",
                &path,
                &"expected {width}x{height}",
            ));
        };

        Ok(Self {
            width: parse_dimension("width", width)?,
            height: parse_dimension("height", height)?,
            seed,
        })
    }
}

fn parse_dimension(parameter: &'static str, text: &str) -> Result<u32> {
    if text.is_empty() || !text.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(invalid_parameter(parameter, &text, &"must be an integer"));
    }
    text.parse()
        .map_err(|error| invalid_parameter(parameter, &text, &error))
}

/// Split a query string into decoded `key -> value` pairs
///
/// A key without `=` maps to an empty value; later duplicates win.
pub fn parse_query(query: &str) -> HashMap<String, String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (percent_decode(key, true), percent_decode(value, true))
        })
        .collect()
}

/// Decode `%XX` escapes, and `+` as a space in query strings
///
/// Malformed escapes are kept literally.
fn percent_decode(text: &str, plus_is_space: bool) -> String {
    let bytes = text.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut index = 0;

    while let Some(&byte) = bytes.get(index) {
        match byte {
            b'+' if plus_is_space => decoded.push(b' '),
            b'%' => {
                let escape = bytes
                    .get(index + 1..index + 3)
                    .and_then(|hex| std::str::from_utf8(hex).ok())
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok());
                if let Some(value) = escape {
                    decoded.push(value);
                    index += 3;
                    continue;
                }
                decoded.push(byte);
            }
            _ => decoded.push(byte),
        }
        index += 1;
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

/// Build the render request for a route and its query overrides
///
/// The path seed takes precedence over a `seed` query pair. An empty seed
/// counts as absent.
pub fn render_request(route: &Route, mut overrides: HashMap<String, String>) -> RenderRequest {
    let query_seed = overrides.remove(SEED_KEY);
    let seed = route
        .seed
        .clone()
        .or(query_seed)
        .filter(|seed| !seed.is_empty());

    let mut request = RenderRequest::new(route.width, route.height);
    request.seed = seed.map(String::into_bytes);
    request.overrides = overrides;
    request
}

/// A rendered wallpaper ready to be sent
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebResponse {
    /// Always `image/svg+xml`
    pub content_type: &'static str,
    /// The SVG document
    pub body: String,
    /// Reported modification time
    pub last_modified: SystemTime,
}

impl WebResponse {
    /// Whether a client holding a copy from `if_modified_since` can be sent a 304
    pub fn is_not_modified(&self, if_modified_since: Option<SystemTime>) -> bool {
        if_modified_since.is_some_and(|since| self.last_modified <= since)
    }
}

/// Modification time reported for a wallpaper
///
/// Pinned seeds always render the same image, so they report a fixed date
/// in the past; random seeds are new on every request.
pub fn last_modified(pinned: bool) -> SystemTime {
    if pinned {
        UNIX_EPOCH + Duration::from_secs(PINNED_SEED_EPOCH_SECS)
    } else {
        SystemTime::now()
    }
}

/// Handle a request for `path` with query string `query`
///
/// # Errors
///
/// Returns an error if:
/// - The path matches no route
/// - A dimension is zero or not an integer
/// - A categorical override names no available option
pub fn respond(path: &str, query: &str) -> Result<WebResponse> {
    let route = Route::parse(path)?;
    let request = render_request(&route, parse_query(query));
    let pinned = request.seed.is_some();

    log::info!(
        "serving {}x{} ({} seed)",
        request.width,
        request.height,
        if pinned { "pinned" } else { "random" }
    );

    let wallpaper = Wallpaper::generate(&request)?;
    Ok(WebResponse {
        content_type: CONTENT_TYPE,
        body: render_svg(&wallpaper)?,
        last_modified: last_modified(pinned),
    })
}
