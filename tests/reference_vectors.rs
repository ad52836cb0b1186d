#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]
//! Regression tests against stored wire-format reference vectors.
//! HMAC tokens are deterministic — the exact token text must match.
//! If any test here fails, the wire format has changed.

use base64::engine::general_purpose::{STANDARD, URL_SAFE, URL_SAFE_NO_PAD};

use datatoken::error::DatatokenError;
use datatoken::tokenizer::{HmacSha256Tokenizer, HmacSha512Tokenizer, Tokenizer};

fn load_reference_vectors() -> serde_json::Value {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/testdata/reference_vectors.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read reference vectors");
    serde_json::from_str(&data).expect("failed to parse reference vectors")
}

fn find_vector(vectors: &serde_json::Value, name: &str) -> serde_json::Value {
    vectors["vectors"]
        .as_array()
        .unwrap()
        .iter()
        .find(|v| v["name"].as_str().unwrap() == name)
        .unwrap_or_else(|| panic!("reference vector '{name}' not found"))
        .clone()
}

fn key_of(v: &serde_json::Value) -> Vec<u8> {
    hex::decode(v["key_hex"].as_str().unwrap()).expect("bad key hex")
}

fn payload_of(v: &serde_json::Value) -> Vec<u8> {
    hex::decode(v["payload_hex"].as_str().unwrap()).expect("bad payload hex")
}

/// Build the tokenizer a vector describes and mint a token with it.
fn tokenize_named(encoding: &str, mac: &str, key: &[u8], payload: &[u8]) -> String {
    match (encoding, mac) {
        ("url-safe", "hmac-sha256") => HmacSha256Tokenizer::keyed(URL_SAFE, key).tokenize(payload),
        ("url-safe-no-pad", "hmac-sha256") => {
            HmacSha256Tokenizer::keyed(URL_SAFE_NO_PAD, key).tokenize(payload)
        }
        ("standard", "hmac-sha256") => HmacSha256Tokenizer::keyed(STANDARD, key).tokenize(payload),
        ("url-safe", "hmac-sha512") => HmacSha512Tokenizer::keyed(URL_SAFE, key).tokenize(payload),
        other => panic!("unsupported vector configuration {other:?}"),
    }
    .expect("tokenize failed")
}

/// Build the tokenizer a vector describes and verify-then-read a token.
fn detokenize_named(
    encoding: &str,
    mac: &str,
    key: &[u8],
    token: &str,
) -> Result<Vec<u8>, DatatokenError> {
    match (encoding, mac) {
        ("url-safe", "hmac-sha256") => HmacSha256Tokenizer::keyed(URL_SAFE, key).detokenize(token),
        ("url-safe-no-pad", "hmac-sha256") => {
            HmacSha256Tokenizer::keyed(URL_SAFE_NO_PAD, key).detokenize(token)
        }
        ("standard", "hmac-sha256") => HmacSha256Tokenizer::keyed(STANDARD, key).detokenize(token),
        ("url-safe", "hmac-sha512") => HmacSha512Tokenizer::keyed(URL_SAFE, key).detokenize(token),
        other => panic!("unsupported vector configuration {other:?}"),
    }
}

#[test]
fn test_reference_json_payload_exact_match() {
    let vectors = load_reference_vectors();
    let v = find_vector(&vectors, "json_payload_url_safe");
    let stored = v["token"].as_str().unwrap();

    let tokenizer = HmacSha256Tokenizer::keyed(URL_SAFE, key_of(&v));
    assert_eq!(tokenizer.tokenize(payload_of(&v)).unwrap(), stored);
    assert_eq!(tokenizer.detokenize(stored).unwrap(), payload_of(&v));
}

#[test]
fn test_reference_empty_payload_has_empty_segment() {
    let vectors = load_reference_vectors();
    let v = find_vector(&vectors, "empty_payload_url_safe");
    let stored = v["token"].as_str().unwrap();

    // Nothing before the separator, a real signature after it.
    assert!(stored.starts_with('.'));
    assert!(stored.len() > 1);

    let tokenizer = HmacSha256Tokenizer::keyed(URL_SAFE, key_of(&v));
    assert_eq!(tokenizer.tokenize(b"").unwrap(), stored);
    assert_eq!(tokenizer.detokenize(stored).unwrap(), Vec::<u8>::new());
}

#[test]
fn test_reference_hmac_sha512_exact_match() {
    let vectors = load_reference_vectors();
    let v = find_vector(&vectors, "json_payload_hmac_sha512");
    let stored = v["token"].as_str().unwrap();

    let tokenizer = HmacSha512Tokenizer::keyed(URL_SAFE, key_of(&v));
    assert_eq!(tokenizer.tokenize(payload_of(&v)).unwrap(), stored);
    assert_eq!(tokenizer.detokenize(stored).unwrap(), payload_of(&v));
}

#[test]
fn test_reference_binary_key_exact_match() {
    let vectors = load_reference_vectors();
    let v = find_vector(&vectors, "binary_key_url_safe");
    let stored = v["token"].as_str().unwrap();

    let tokenizer = HmacSha256Tokenizer::keyed(URL_SAFE, key_of(&v));
    assert_eq!(tokenizer.tokenize(payload_of(&v)).unwrap(), stored);
}

#[test]
fn test_reference_all_vectors_match_and_round_trip() {
    let vectors = load_reference_vectors();
    for v in vectors["vectors"].as_array().unwrap() {
        let name = v["name"].as_str().unwrap();
        let encoding = v["encoding"].as_str().unwrap();
        let mac = v["mac"].as_str().unwrap();
        let key = key_of(v);
        let payload = payload_of(v);
        let stored = v["token"].as_str().unwrap();

        let minted = tokenize_named(encoding, mac, &key, &payload);
        assert_eq!(minted, stored, "{name}: token text changed");

        let read = detokenize_named(encoding, mac, &key, stored)
            .unwrap_or_else(|e| panic!("{name}: stored token did not verify: {e}"));
        assert_eq!(read, payload, "{name}: payload changed");

        // The payload is readable with no key at all under the same encoding.
        let unverified = match encoding {
            "url-safe" => Tokenizer::unkeyed(URL_SAFE).detokenize_unverified(stored),
            "url-safe-no-pad" => Tokenizer::unkeyed(URL_SAFE_NO_PAD).detokenize_unverified(stored),
            "standard" => Tokenizer::unkeyed(STANDARD).detokenize_unverified(stored),
            other => panic!("unsupported encoding {other}"),
        }
        .unwrap_or_else(|e| panic!("{name}: unverified read failed: {e}"));
        assert_eq!(unverified, payload, "{name}: unverified read changed");

        // A different key must never accept the stored token.
        assert!(
            matches!(
                detokenize_named(encoding, mac, b"not the right key", stored),
                Err(DatatokenError::InvalidSignature)
            ),
            "{name}: wrong key accepted"
        );
    }
}
