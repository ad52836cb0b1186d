#![no_main]
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use datatoken::tokenizer::{HmacSha256Tokenizer, Tokenizer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = core::str::from_utf8(data) else {
        return;
    };

    // Must never panic on arbitrary input, under either padding mode.
    let keyed = HmacSha256Tokenizer::keyed(URL_SAFE, "fuzz key");
    let verified = keyed.detokenize(raw);
    let _ = HmacSha256Tokenizer::keyed(URL_SAFE_NO_PAD, "fuzz key").detokenize(raw);

    // Anything that verifies must also be readable without the key, and
    // both readers must agree on the payload bytes.
    if let Ok(payload) = verified {
        let unverified = Tokenizer::unkeyed(URL_SAFE)
            .detokenize_unverified(raw)
            .expect("verified token must still read unverified");
        assert_eq!(payload, unverified);
    }
});
