//! Integration tests for query building, escapes and shape checks.

use std::collections::BTreeMap;

use haruue_codec::{ascii_to_native, complete_url, from_bytes, is_email, native_to_ascii, to_bytes, url_decode};

#[test]
fn test_complete_url_from_map() {
    let mut fields = BTreeMap::new();
    fields.insert("page", "2");
    fields.insert("q", "rust & co");

    let url = complete_url(Some("https://search.example.com/results"), &fields);
    assert_eq!(url, "https://search.example.com/results?page=2&q=rust+%26+co");
}

#[test]
fn test_complete_url_extends_existing_query() {
    let url = complete_url(Some("https://example.com/?lang=en"), [("q", "春")]);
    assert_eq!(url, "https://example.com/?lang=en&q=%E6%98%A5");
}

#[test]
fn test_complete_url_values_decode_back() {
    let url = complete_url(None, [("k", "a+b=c")]);
    let value = url.split_once('=').map(|(_, v)| v).unwrap();
    assert_eq!(url_decode(value).unwrap(), "a+b=c");
}

#[test]
fn test_unicode_escape_round_trip() {
    let text = "春上冰月 says: \"hi\" \u{1F600}";
    let escaped = native_to_ascii(text);

    assert!(escaped.is_ascii());
    assert!(escaped.starts_with("\\u6625\\u4e0a\\u51b0\\u6708\\u0020says"));
    assert_eq!(ascii_to_native(&escaped), text);
}

#[test]
fn test_unescape_mixed_text() {
    assert_eq!(ascii_to_native("name=\\u6625\\u4E0A; ok"), "name=春上; ok");
}

#[test]
fn test_text_bytes_conversion() {
    let text = "春上冰月";
    let bytes = to_bytes(text);
    assert_eq!(bytes.len(), 12);
    assert_eq!(from_bytes(&bytes), text);
}

#[test]
fn test_email_check() {
    assert!(is_email("haruue@caoyue.com.cn"));
    assert!(!is_email("haruue at caoyue.com.cn"));
}
