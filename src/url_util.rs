//! Relative/absolute URL algebra for SharePoint sites
//!
//! Nearly every SPO command builds its request URL from a mix of absolute
//! site URLs and server-relative paths supplied by the operator. The
//! functions in this module convert between the three shapes in play:
//!
//! - absolute URLs (`https://contoso.sharepoint.com/sites/team1`)
//! - server-relative paths (`/sites/team1/Shared Documents`)
//! - web-relative paths (`/Shared Documents`)
//!
//! All functions are pure string manipulation: no I/O, no ambient state.

use regex::Regex;

/// Strips the origin from an absolute URL and returns the remainder,
/// including the leading `/`. Inputs without a scheme are returned
/// unchanged, so values that are already relative pass through.
///
/// # Examples
///
/// ```
/// use spoctl::url_util::get_url_relative_path;
///
/// assert_eq!(
///     get_url_relative_path("https://contoso.sharepoint.com/sites/team1"),
///     "/sites/team1"
/// );
/// assert_eq!(get_url_relative_path("/sites/team1"), "/sites/team1");
/// assert_eq!(get_url_relative_path("https://contoso.sharepoint.com"), "");
/// ```
pub fn get_url_relative_path(url: &str) -> String {
    match url.find("://") {
        Some(scheme_end) => {
            let after_origin = &url[scheme_end + 3..];
            match after_origin.find('/') {
                Some(slash) => after_origin[slash..].to_string(),
                None => String::new(),
            }
        }
        None => url.to_string(),
    }
}

/// Scheme and host of an absolute URL, without any path or trailing slash.
pub fn get_url_origin(url: &str) -> String {
    match url.find("://") {
        Some(scheme_end) => {
            let after_origin = &url[scheme_end + 3..];
            match after_origin.find('/') {
                Some(slash) => url[..scheme_end + 3 + slash].to_string(),
                None => url.to_string(),
            }
        }
        None => remove_trailing_slashes(url),
    }
}

/// Trims all leading `/` characters.
pub fn remove_leading_slashes(url: &str) -> String {
    url.trim_start_matches('/').to_string()
}

/// Trims all trailing `/` characters.
pub fn remove_trailing_slashes(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Server-relative path of the web identified by `web_url`.
///
/// The root site has no distinguishing relative path, so this returns `""`
/// rather than `"/"` for it; callers concatenating the result with another
/// path segment would otherwise produce `//`.
///
/// # Examples
///
/// ```
/// use spoctl::url_util::get_server_relative_site_url;
///
/// assert_eq!(
///     get_server_relative_site_url("https://contoso.sharepoint.com/sites/team1/"),
///     "/sites/team1"
/// );
/// assert_eq!(get_server_relative_site_url("https://contoso.sharepoint.com"), "");
/// ```
pub fn get_server_relative_site_url(web_url: &str) -> String {
    let relative = remove_trailing_slashes(&get_url_relative_path(web_url));
    let trimmed = remove_leading_slashes(&relative);
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

/// Server-relative path of `folder_relative_path` within the site
/// identified by `web_url`.
///
/// If the folder path already carries the web's own relative path as a
/// prefix (compared case-insensitively, on segment boundaries) that prefix
/// is stripped before joining, so paths are never duplicated. The result
/// has exactly one leading `/`, no trailing `/` and no `//` runs, and the
/// function is idempotent: feeding its own output back in returns the same
/// value.
///
/// # Examples
///
/// ```
/// use spoctl::url_util::get_server_relative_path;
///
/// assert_eq!(
///     get_server_relative_path("https://contoso.sharepoint.com/sites/team1", "/Shared Documents"),
///     "/sites/team1/Shared Documents"
/// );
/// assert_eq!(
///     get_server_relative_path(
///         "https://contoso.sharepoint.com/sites/team1",
///         "/sites/team1/Shared Documents"
///     ),
///     "/sites/team1/Shared Documents"
/// );
/// ```
pub fn get_server_relative_path(web_url: &str, folder_relative_path: &str) -> String {
    let web_path = remove_leading_slashes(&remove_trailing_slashes(&get_url_relative_path(
        web_url,
    )));
    let folder = remove_leading_slashes(&remove_trailing_slashes(&get_url_relative_path(
        folder_relative_path,
    )));
    let remainder = strip_prefix_segments(&folder, &web_path);
    normalize_server_relative(&format!("/{}/{}", web_path, remainder))
}

/// Path of `folder_url` relative to the web identified by `web_url`,
/// stripping the web's own server-relative prefix when present. `"/"`
/// denotes the root of the web.
///
/// # Examples
///
/// ```
/// use spoctl::url_util::get_web_relative_path;
///
/// assert_eq!(
///     get_web_relative_path(
///         "https://contoso.sharepoint.com/sites/team1/",
///         "/sites/team1/Lists/MyList"
///     ),
///     "/Lists/MyList"
/// );
/// ```
pub fn get_web_relative_path(web_url: &str, folder_url: &str) -> String {
    let web_path = remove_leading_slashes(&remove_trailing_slashes(&get_url_relative_path(
        web_url,
    )));
    let folder = remove_leading_slashes(&remove_trailing_slashes(&get_url_relative_path(
        folder_url,
    )));
    normalize_server_relative(strip_prefix_segments(&folder, &web_path))
}

/// Joins the origin of `web_url` with a server-relative URL, inserting the
/// leading `/` if missing.
///
/// # Examples
///
/// ```
/// use spoctl::url_util::get_absolute_url;
///
/// assert_eq!(
///     get_absolute_url("https://contoso.sharepoint.com/sites/team1", "/sites/team1/Docs"),
///     "https://contoso.sharepoint.com/sites/team1/Docs"
/// );
/// ```
pub fn get_absolute_url(web_url: &str, server_relative_url: &str) -> String {
    let origin = get_url_origin(web_url);
    if server_relative_url.is_empty() {
        origin
    } else if server_relative_url.starts_with('/') {
        format!("{}{}", origin, server_relative_url)
    } else {
        format!("{}/{}", origin, server_relative_url)
    }
}

/// Joins two path segments with exactly one `/` separator, trimming any
/// existing boundary slashes from the inputs.
///
/// # Examples
///
/// ```
/// use spoctl::url_util::url_combine;
///
/// assert_eq!(
///     url_combine("https://contoso.com/", "/sites/abc/"),
///     "https://contoso.com/sites/abc"
/// );
/// ```
pub fn url_combine(base: &str, relative: &str) -> String {
    let base = remove_trailing_slashes(base);
    let relative = remove_leading_slashes(&remove_trailing_slashes(relative));
    if relative.is_empty() {
        base
    } else {
        format!("{}/{}", base, relative)
    }
}

/// Resolves `url` (possibly server-relative to `web_url`) to an absolute
/// URL, then extracts the absolute URL of the containing site by matching
/// the first `{teams|sites|personal}/{name}` segment on a
/// `*.sharepoint.com` host. Falls back to the bare origin when no such
/// segment exists, e.g. for root-site content.
///
/// # Examples
///
/// ```
/// use spoctl::url_util::get_target_site_absolute_url;
///
/// assert_eq!(
///     get_target_site_absolute_url(
///         "https://contoso.sharepoint.com",
///         "/sites/marketing/Shared Documents/plan.docx"
///     ),
///     "https://contoso.sharepoint.com/sites/marketing"
/// );
/// ```
pub fn get_target_site_absolute_url(web_url: &str, url: &str) -> String {
    let absolute = if url.contains("://") {
        url.to_string()
    } else {
        get_absolute_url(web_url, url)
    };

    let site_pattern =
        Regex::new(r"(?i)^(https?://[^/]+\.sharepoint\.com)/(teams|sites|personal)/([^/]+)");
    if let Some(captures) = site_pattern.ok().and_then(|re| re.captures(&absolute)) {
        format!("{}/{}/{}", &captures[1], &captures[2], &captures[3])
    } else {
        get_url_origin(&absolute)
    }
}

// Strips `prefix` from the start of `path` when it matches whole segments,
// ignoring ASCII case. Both arguments must already be free of boundary
// slashes. Returns `path` unchanged when the prefix does not match.
fn strip_prefix_segments<'a>(path: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return path;
    }
    if path.len() >= prefix.len() && path[..prefix.len()].eq_ignore_ascii_case(prefix) {
        let rest = &path[prefix.len()..];
        if rest.is_empty() {
            return "";
        }
        if let Some(stripped) = rest.strip_prefix('/') {
            return stripped;
        }
    }
    path
}

// Collapses `//` runs and guarantees a single leading slash with no
// trailing slash. The empty path normalizes to `/`.
fn normalize_server_relative(path: &str) -> String {
    let mut normalized = String::with_capacity(path.len() + 1);
    normalized.push('/');
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        if normalized.len() > 1 {
            normalized.push('/');
        }
        normalized.push_str(segment);
    }
    normalized
}
