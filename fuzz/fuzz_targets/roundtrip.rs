#![no_main]
use base64::engine::general_purpose::{STANDARD, URL_SAFE, URL_SAFE_NO_PAD};
use datatoken::tokenizer::HmacSha256Tokenizer;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Vec<u8>, Vec<u8>)| {
    let (key, payload) = input;

    // Any key and payload must round-trip under every stock encoding:
    // tokenize then detokenize returns the original bytes, and the token
    // always has exactly one separator.
    let tokenizers = [
        HmacSha256Tokenizer::keyed(URL_SAFE, key.clone()),
        HmacSha256Tokenizer::keyed(URL_SAFE_NO_PAD, key.clone()),
        HmacSha256Tokenizer::keyed(STANDARD, key.clone()),
    ];
    for tokenizer in tokenizers {
        let token = tokenizer.tokenize(&payload).expect("tokenize");
        assert_eq!(token.matches('.').count(), 1);
        assert_eq!(tokenizer.detokenize(&token).expect("detokenize"), payload);
    }
});
