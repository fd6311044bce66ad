//! Graph endpoint URL construction.
//!
//! URLs are plain templates: `{base}/{version}/{path}`. Path segments and any
//! inline query strings are the caller's responsibility and are not escaped.

/// Public Graph API host.
pub const GRAPH_URL: &str = "https://graph.facebook.com";

/// API version used when the configuration does not name one.
pub const DEFAULT_API_VERSION: &str = "v2.5";

/// Join base, version and relative path into an absolute URL.
///
/// A trailing slash on `base` or a leading slash on `path` is not doubled.
pub fn build_url(base: &str, version: &str, path: &str) -> String {
    format!(
        "{}/{}/{}",
        base.trim_end_matches('/'),
        version,
        path.trim_start_matches('/')
    )
}

/// Relative path of a user's picture edge. Graph answers it with a redirect
/// to the image itself.
pub(crate) fn picture_path(user_id: &str) -> String {
    format!("{}/picture", user_id)
}
