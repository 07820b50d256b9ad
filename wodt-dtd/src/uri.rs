//! URI helpers for descriptor links

use crate::error::{DtdError, Result};
use url::Url;

/// Resolve `path` below `base`, always appending rather than replacing
///
/// Unlike RFC 3986 resolution the last segment of `base` is kept and a leading
/// `/` on `path` does not jump to the root:
///
/// ```
/// use wodt_dtd::uri_relative_resolve;
///
/// let dtkg = uri_relative_resolve("http://example.com/a/b/c", "/dtkg").unwrap();
/// assert_eq!(dtkg, "http://example.com/a/b/c/dtkg");
///
/// let fragment = uri_relative_resolve("http://example.com", "#dtkg").unwrap();
/// assert_eq!(fragment, "http://example.com#dtkg");
/// ```
///
/// A fragment-only `path` attaches to `base` as written. An existing fragment
/// on `base` is dropped.
pub fn uri_relative_resolve(base: &str, path: &str) -> Result<String> {
    Url::parse(base).map_err(|e| DtdError::invalid_uri(base, e))?;

    let base = base.split('#').next().unwrap_or(base);
    let relative = path.strip_prefix('/').unwrap_or(path);

    if relative.starts_with('#') {
        return Ok(format!("{base}{relative}"));
    }

    let base = if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    };
    let resolved = Url::parse(&base)
        .and_then(|url| url.join(relative))
        .map_err(|e| DtdError::invalid_uri(format!("{base}{relative}"), e))?;
    Ok(resolved.into())
}

/// Same URI with its scheme replaced by `ws`
///
/// The rest of the input is kept as written, apart from the surrounding
/// spaces and control characters that URL parsing ignores.
pub fn websocket_uri(uri: &str) -> Result<String> {
    let uri = uri.trim_matches(|c: char| c <= ' ');
    let parsed = Url::parse(uri).map_err(|e| DtdError::invalid_uri(uri, e))?;
    let rest = &uri[parsed.scheme().len()..];
    Ok(format!("ws{rest}"))
}
