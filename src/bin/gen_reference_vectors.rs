#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Generates wire-format reference vectors for regression testing.
//! Run with: cargo run --bin gen_reference_vectors > testdata/reference_vectors.json

use base64::engine::general_purpose::{STANDARD, URL_SAFE, URL_SAFE_NO_PAD};

use datatoken::tokenizer::{HmacSha256Tokenizer, HmacSha512Tokenizer};

const JSON_PAYLOAD: &[u8] = br#"{"arbitrary":"message"}"#;

fn vector(
    name: &str,
    encoding: &str,
    mac: &str,
    key: &[u8],
    payload: &[u8],
    token: &str,
) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "encoding": encoding,
        "mac": mac,
        "key_hex": hex::encode(key),
        "payload_hex": hex::encode(payload),
        "token": token,
    })
}

fn main() {
    let mut vectors: Vec<serde_json::Value> = Vec::new();

    // === HMAC-SHA256, url-safe padded, across payload shapes ===
    let tokenizer = HmacSha256Tokenizer::keyed(URL_SAFE, "sekret");
    vectors.push(vector(
        "json_payload_url_safe",
        "url-safe",
        "hmac-sha256",
        b"sekret",
        JSON_PAYLOAD,
        &tokenizer.tokenize(JSON_PAYLOAD).unwrap(),
    ));

    let shared_key = "sekret key! shhh do not share";
    let shared = HmacSha256Tokenizer::keyed(URL_SAFE, shared_key);
    vectors.push(vector(
        "short_text_url_safe",
        "url-safe",
        "hmac-sha256",
        shared_key.as_bytes(),
        b"oh hai",
        &shared.tokenize(b"oh hai").unwrap(),
    ));

    vectors.push(vector(
        "empty_payload_url_safe",
        "url-safe",
        "hmac-sha256",
        b"sekret",
        b"",
        &tokenizer.tokenize(b"").unwrap(),
    ));

    let all_bytes: Vec<u8> = (0..=u8::MAX).collect();
    vectors.push(vector(
        "all_byte_values_url_safe",
        "url-safe",
        "hmac-sha256",
        b"sekret",
        &all_bytes,
        &tokenizer.tokenize(&all_bytes).unwrap(),
    ));

    // === Alternate encodings over the same payload ===
    let no_pad = HmacSha256Tokenizer::keyed(URL_SAFE_NO_PAD, "sekret");
    vectors.push(vector(
        "json_payload_url_safe_no_pad",
        "url-safe-no-pad",
        "hmac-sha256",
        b"sekret",
        JSON_PAYLOAD,
        &no_pad.tokenize(JSON_PAYLOAD).unwrap(),
    ));

    let standard = HmacSha256Tokenizer::keyed(STANDARD, "sekret");
    vectors.push(vector(
        "json_payload_standard",
        "standard",
        "hmac-sha256",
        b"sekret",
        JSON_PAYLOAD,
        &standard.tokenize(JSON_PAYLOAD).unwrap(),
    ));

    // === Alternate MAC ===
    let sha512 = HmacSha512Tokenizer::keyed(URL_SAFE, "sekret");
    vectors.push(vector(
        "json_payload_hmac_sha512",
        "url-safe",
        "hmac-sha512",
        b"sekret",
        JSON_PAYLOAD,
        &sha512.tokenize(JSON_PAYLOAD).unwrap(),
    ));

    // === Binary (non-text) key ===
    let binary_key: Vec<u8> = (0x00..=0x1f).collect();
    let binary = HmacSha256Tokenizer::keyed(URL_SAFE, binary_key.clone());
    vectors.push(vector(
        "binary_key_url_safe",
        "url-safe",
        "hmac-sha256",
        &binary_key,
        b"attested bytes",
        &binary.tokenize(b"attested bytes").unwrap(),
    ));

    let output = serde_json::json!({
        "comment": "Datatoken wire format reference vectors. Regenerate with: cargo run --bin gen_reference_vectors",
        "vectors": vectors,
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
