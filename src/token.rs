//! Wire shape of a token: two encoded segments joined by one separator.

use crate::error::DatatokenError;

/// Separator between the payload and signature segments.
pub const SEPARATOR: char = '.';

/// A borrowed view of a token split into its two segments.
///
/// Parsing checks shape only. The segments are not decoded and the
/// signature is not verified; both stay borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    payload: &'a str,
    signature: &'a str,
}

impl<'a> Token<'a> {
    /// Split `raw` at the single separator.
    ///
    /// Rejects input with zero or more than one separator. Either segment
    /// may be empty: `"."` parses to two empty segments, and a token with
    /// an empty payload still carries a signature over that empty text.
    pub fn parse(raw: &'a str) -> Result<Self, DatatokenError> {
        let mut parts = raw.split(SEPARATOR);
        let (Some(payload), Some(signature), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(DatatokenError::MalformedToken);
        };
        Ok(Token { payload, signature })
    }

    /// The encoded payload segment, exactly as it appeared on the wire.
    #[must_use]
    pub fn payload(&self) -> &'a str {
        self.payload
    }

    /// The encoded signature segment, exactly as it appeared on the wire.
    #[must_use]
    pub fn signature(&self) -> &'a str {
        self.signature
    }
}
