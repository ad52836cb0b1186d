//! Failure taxonomy for producing and recovering tokens.

use thiserror::Error;

/// Everything that can go wrong while tokenizing or detokenizing.
///
/// Callers branch on the variant, never on message text. Any error from a
/// verifying read means the payload must not be trusted;
/// [`InvalidSignature`](DatatokenError::InvalidSignature) specifically
/// separates forgery from garbage input.
#[derive(Debug, Error)]
pub enum DatatokenError {
    #[error("malformed token: expected exactly one '.' separator")]
    MalformedToken,

    #[error("segment is not valid encoded text: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("invalid signature")]
    InvalidSignature,

    #[error("key cannot seed the configured MAC: {0}")]
    InvalidKey(#[from] hmac::digest::InvalidLength),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_are_matchable_by_kind() {
        let err = DatatokenError::MalformedToken;
        assert!(matches!(err, DatatokenError::MalformedToken));

        let err = DatatokenError::InvalidSignature;
        assert!(!matches!(err, DatatokenError::MalformedToken));
    }

    #[test]
    fn test_decode_error_preserves_source() {
        use std::error::Error as _;

        let inner = base64::DecodeError::InvalidPadding;
        let err = DatatokenError::from(inner);
        assert!(matches!(err, DatatokenError::Decode(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_display_distinguishes_forgery_from_garbage() {
        let forged = DatatokenError::InvalidSignature.to_string();
        let garbage = DatatokenError::Decode(base64::DecodeError::InvalidPadding).to_string();
        assert_ne!(forged, garbage);
    }
}
