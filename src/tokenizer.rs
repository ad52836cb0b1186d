//! The tokenizer: encode-and-sign on the way out, verify-then-decode on
//! the way back.
//!
//! A [`Tokenizer`] is assembled from two capabilities. The encoding is any
//! [`base64::Engine`]; the signer slot is either [`KeyedMac`] or
//! [`Unkeyed`]. Signing and verification exist only on keyed
//! configurations, so a tokenizer built without a key cannot mint or
//! accept tokens at the type level. Reading a payload without checking its
//! signature is the one operation every configuration shares.

use base64::Engine;
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha512};

use crate::error::DatatokenError;
use crate::keys::{Key, KeyedMac, Unkeyed};
use crate::token::{Token, SEPARATOR};

/// Produces and consumes signed tokens of the form
/// `<encoded-payload>.<encoded-signature>`.
///
/// The signature covers the encoded payload text exactly as it appears on
/// the wire, so verification never has to decode attacker-controlled bytes
/// first.
///
/// # Examples
///
/// ```
/// use base64::engine::general_purpose::URL_SAFE;
/// use datatoken::tokenizer::HmacSha256Tokenizer;
///
/// # fn main() -> Result<(), datatoken::error::DatatokenError> {
/// let tokenizer = HmacSha256Tokenizer::keyed(URL_SAFE, "sekret");
/// let token = tokenizer.tokenize(br#"{"arbitrary":"message"}"#)?;
/// assert_eq!(tokenizer.detokenize(&token)?, br#"{"arbitrary":"message"}"#);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<E, S = Unkeyed> {
    engine: E,
    signer: S,
}

/// HMAC-SHA-256 tokenizer over any encoding engine.
pub type HmacSha256Tokenizer<E> = Tokenizer<E, KeyedMac<Hmac<Sha256>>>;

/// HMAC-SHA-512 tokenizer over any encoding engine.
pub type HmacSha512Tokenizer<E> = Tokenizer<E, KeyedMac<Hmac<Sha512>>>;

impl<E> Tokenizer<E> {
    /// A tokenizer with no key. It can read token payloads with
    /// [`detokenize_unverified`](Self::detokenize_unverified) but has no
    /// `tokenize` or `detokenize` at all.
    #[must_use]
    pub fn unkeyed(engine: E) -> Self {
        Tokenizer {
            engine,
            signer: Unkeyed,
        }
    }
}

impl<E, M> Tokenizer<E, KeyedMac<M>> {
    /// A tokenizer holding a secret key for the MAC type `M`.
    #[must_use]
    pub fn keyed(engine: E, key: impl Into<Key>) -> Self {
        Tokenizer {
            engine,
            signer: KeyedMac::new(key),
        }
    }
}

impl<E: Engine, S> Tokenizer<E, S> {
    /// Decode a token's payload without checking its signature.
    ///
    /// The signature segment must still be present so the input has token
    /// shape, but its content is ignored entirely. Anything this returns
    /// is unauthenticated.
    pub fn detokenize_unverified(&self, raw: impl AsRef<str>) -> Result<Vec<u8>, DatatokenError> {
        let token = Token::parse(raw.as_ref())?;
        Ok(self.engine.decode(token.payload())?)
    }
}

impl<E: Engine, M: Mac + KeyInit> Tokenizer<E, KeyedMac<M>> {
    /// Encode `payload` and append the encoded MAC over the encoded text.
    ///
    /// Fails only if the key cannot seed the MAC. An empty payload is
    /// legal and yields a token whose first byte is the separator.
    pub fn tokenize(&self, payload: impl AsRef<[u8]>) -> Result<String, DatatokenError> {
        let encoded = self.engine.encode(payload.as_ref());
        let tag = self.signer.sign(encoded.as_bytes())?;
        let signature = self.engine.encode(tag.as_slice());

        let mut token = String::with_capacity(encoded.len() + 1 + signature.len());
        token.push_str(&encoded);
        token.push(SEPARATOR);
        token.push_str(&signature);
        Ok(token)
    }

    /// Verify a token's signature, then decode and return its payload.
    ///
    /// The checks run in a fixed order: token shape, signature segment
    /// decode, MAC comparison over the encoded payload text, and only then
    /// payload decode. A payload that is not valid encoded text is
    /// reported as such only when its signature checks out; under the
    /// wrong key the same token fails with
    /// [`InvalidSignature`](DatatokenError::InvalidSignature).
    pub fn detokenize(&self, raw: impl AsRef<str>) -> Result<Vec<u8>, DatatokenError> {
        let token = Token::parse(raw.as_ref())?;
        let tag = self.engine.decode(token.signature())?;
        self.signer.verify(token.payload().as_bytes(), &tag)?;
        Ok(self.engine.decode(token.payload())?)
    }
}
