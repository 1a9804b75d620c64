//! Url shape validation
//!
//! Purely syntactic: no lookup, no network.

use std::sync::LazyLock;

use regex::Regex;

/// Optional scheme and `www.` prefix
static PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:ftp|http|https)://)?(?:www.)?").expect("valid regex")
});

/// Host, path segments, optional query and trailing slash, ASCII only
static BODY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9_-]+(?:\.[a-zA-Z]+)+(?:/[a-zA-Z0-9_#]+)*(?:/[a-zA-Z0-9_]+\?[a-zA-Z0-9_]+=[a-zA-Z0-9_]+(?:&[a-zA-Z0-9_]+=[a-zA-Z0-9_]+)*)?/?$",
    )
    .expect("valid regex")
});

/// A second scheme or `www` marker after the prefix
static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ftp|http|www.").expect("valid regex"));

/// Check whether `candidate` has the shape of a url
pub fn is_url(candidate: &str) -> bool {
    let rest = match PREFIX.find(candidate) {
        Some(m) => &candidate[m.end()..],
        None => candidate,
    };

    !MARKER.is_match(rest) && BODY.is_match(rest)
}
