#![no_main]
use datatoken::token::Token;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = core::str::from_utf8(data) else {
        return;
    };

    // Must never panic, and accepted input must contain exactly one
    // separator with the segments covering the whole string.
    if let Ok(token) = Token::parse(raw) {
        assert_eq!(raw.matches('.').count(), 1);
        assert_eq!(
            raw.len(),
            token.payload().len() + 1 + token.signature().len()
        );
    }
});
