//! Secret keys and the two signer configurations of a tokenizer.
//!
//! A tokenizer's signer slot holds either [`KeyedMac`] — a secret key bound
//! to a MAC type, able to sign and verify — or [`Unkeyed`], able to do
//! neither. Key material lives in a [`Key`], which zeroes its bytes on drop
//! and never prints them.

use core::fmt;
use core::marker::PhantomData;

use hmac::digest::{KeyInit, Output};
use hmac::Mac;
use zeroize::Zeroizing;

use crate::error::DatatokenError;

/// An opaque secret key for the keyed-MAC capability.
#[derive(Clone)]
pub struct Key(Zeroizing<Vec<u8>>);

impl Key {
    /// Wrap raw key bytes. Any length is accepted here; whether the length
    /// suits the MAC is checked when an accumulator is seeded.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Key(Zeroizing::new(bytes.into()))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key").finish_non_exhaustive()
    }
}

impl From<Vec<u8>> for Key {
    fn from(bytes: Vec<u8>) -> Self {
        Key::new(bytes)
    }
}

impl From<&[u8]> for Key {
    fn from(bytes: &[u8]) -> Self {
        Key::new(bytes)
    }
}

impl<const N: usize> From<&[u8; N]> for Key {
    fn from(bytes: &[u8; N]) -> Self {
        Key::new(bytes.as_slice())
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::new(s.as_bytes())
    }
}

/// Marker for a key-less tokenizer: it can read payloads but neither
/// produce nor verify signatures.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unkeyed;

/// The keyed signer configuration: a secret key plus the MAC type `M`.
///
/// Every operation seeds a fresh accumulator from the key, so a single
/// configuration is safe for concurrent use.
pub struct KeyedMac<M> {
    key: Key,
    _mac: PhantomData<fn() -> M>,
}

impl<M> KeyedMac<M> {
    pub(crate) fn new(key: impl Into<Key>) -> Self {
        KeyedMac {
            key: key.into(),
            _mac: PhantomData,
        }
    }
}

impl<M: Mac + KeyInit> KeyedMac<M> {
    /// MAC over `data` with a fresh accumulator.
    pub(crate) fn sign(&self, data: &[u8]) -> Result<Output<M>, DatatokenError> {
        let mut mac = <M as Mac>::new_from_slice(self.key.as_bytes())?;
        mac.update(data);
        Ok(mac.finalize().into_bytes())
    }

    /// Constant-time check of `tag` against the MAC of `data`.
    pub(crate) fn verify(&self, data: &[u8], tag: &[u8]) -> Result<(), DatatokenError> {
        let mut mac = <M as Mac>::new_from_slice(self.key.as_bytes())?;
        mac.update(data);
        mac.verify_slice(tag)
            .map_err(|_| DatatokenError::InvalidSignature)
    }
}

// Manual impls so `M` (a type-level algorithm choice, never a stored value)
// is not required to be Clone or Debug.
impl<M> Clone for KeyedMac<M> {
    fn clone(&self) -> Self {
        KeyedMac {
            key: self.key.clone(),
            _mac: PhantomData,
        }
    }
}

impl<M> fmt::Debug for KeyedMac<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedMac").field("key", &self.key).finish()
    }
}
