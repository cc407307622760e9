//! Base64 encoding and the permissive decoding contract.

use haruue_codec::*;

#[test]
fn test_rfc4648_vectors() {
    let cases = vec![
        ("", ""),
        ("f", "Zg=="),
        ("fo", "Zm8="),
        ("foo", "Zm9v"),
        ("foob", "Zm9vYg=="),
        ("fooba", "Zm9vYmE="),
        ("foobar", "Zm9vYmFy"),
    ];

    for (plain, encoded) in cases {
        assert_eq!(base64_encode(plain.as_bytes()), encoded);
        assert_eq!(base64_decode(encoded), plain.as_bytes());
        assert_eq!(base64_decode_strict(encoded).unwrap(), plain.as_bytes());
    }
}

#[test]
fn test_single_byte() {
    assert_eq!(base64_decode("YQ=="), vec![0x61]);
    assert_eq!(base64_decode("YQ"), vec![0x61]);
}

#[test]
fn test_output_length_and_padding() {
    for n in 0..64usize {
        let data: Vec<u8> = (0..n).map(|i| (i * 37) as u8).collect();
        let encoded = base64_encode(&data);

        assert_eq!(encoded.len(), 4 * n.div_ceil(3));
        assert_eq!(encoded.len(), encoded_len(n));
        match n % 3 {
            0 => assert!(!encoded.ends_with('=')),
            1 => assert!(encoded.ends_with("==")),
            _ => assert!(encoded.ends_with('=') && !encoded.ends_with("==")),
        }
    }
}

#[test]
fn test_all_byte_values_round_trip() {
    let data: Vec<u8> = (0..=255).collect();
    let encoded = base64_encode(&data);
    assert!(encoded.bytes().all(|b| BASE64_ALPHABET_WITH_PAD.contains(&b)));
    assert_eq!(base64_decode(&encoded), data);
}

const BASE64_ALPHABET_WITH_PAD: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/=";

#[test]
fn test_decoder_tolerates_wrapped_lines() {
    let wrapped = "Zm9v\nYmFy\r\nYmF6\n";
    assert_eq!(base64_decode(wrapped), b"foobarbaz");
    assert!(base64_decode_strict(wrapped).is_err());
}

#[test]
fn test_decoder_stops_at_first_padding() {
    // Concatenated padded chunks: only the first survives
    let joined = format!("{}{}", base64_encode(b"ab"), base64_encode(b"cd"));
    assert_eq!(joined, "YWI=Y2Q=");
    assert_eq!(base64_decode(&joined), b"ab");
}

#[test]
fn test_decoder_truncates_dangling_characters() {
    assert_eq!(base64_decode("Zm9vY"), b"foo");
    assert_eq!(base64_decode("Zm9vYm"), b"foob");
    assert_eq!(base64_decode("Zm9vYmF"), b"fooba");
}

#[test]
fn test_decoder_never_panics_on_garbage() {
    let inputs = ["=", "==", "===", "====", "A=", "A===", "\u{0}\u{7f}", "ÿÿÿÿ", "%%%%", "A"];
    for input in inputs {
        let _ = base64_decode(input);
    }
    assert_eq!(base64_decode("===="), b"");
    assert_eq!(base64_decode("A==="), b"");
}

#[test]
fn test_url_safe_characters_are_skipped() {
    // '-' and '_' are not in the standard alphabet
    assert_eq!(base64_decode("-_Zm9v"), b"foo");
}
