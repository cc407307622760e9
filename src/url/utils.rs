//! Query-string helpers.

use std::fmt::Display;

use crate::url::codec::url_encode;

/// Append URL-encoded `key=value` pairs to a URL prefix.
///
/// The first pair is introduced with `?` unless the prefix already has a
/// query, in which case `&` is used. Pairs keep the order of `fields`.
/// With no fields the prefix is returned unchanged, and a missing prefix
/// behaves like an empty one.
///
/// # Examples
///
/// ```
/// use haruue_codec::complete_url;
///
/// let url = complete_url(Some("https://example.com/search"), [("q", "rust lang"), ("page", "2")]);
/// assert_eq!(url, "https://example.com/search?q=rust+lang&page=2");
///
/// let url = complete_url(Some("https://example.com/search?q=a"), [("page", 2)]);
/// assert_eq!(url, "https://example.com/search?q=a&page=2");
///
/// let url = complete_url(None, [("k", "v")]);
/// assert_eq!(url, "?k=v");
/// ```
pub fn complete_url<I, K, V>(base: Option<&str>, fields: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    let base = base.unwrap_or_default();
    let mut url = String::from(base);
    let mut separator = if has_query(base) { '&' } else { '?' };

    for (key, value) in fields {
        url.push(separator);
        url.push_str(&url_encode(&key.to_string()));
        url.push('=');
        url.push_str(&url_encode(&value.to_string()));
        separator = '&';
    }

    url
}

/// Check if a URL has a query string.
///
/// # Examples
///
/// ```
/// use haruue_codec::has_query;
///
/// assert!(has_query("https://example.com?foo=bar"));
/// assert!(!has_query("https://example.com"));
/// ```
pub fn has_query(url: &str) -> bool {
    url.contains('?')
}
