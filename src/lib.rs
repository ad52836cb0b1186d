//! Datatoken: self-contained signed tokens carrying opaque byte payloads.
//!
//! A token is `<encoded-payload>.<encoded-signature>`, with the signature
//! computed over the encoded payload text. Encoding and MAC algorithms are
//! picked per [`tokenizer::Tokenizer`]; key-less tokenizers can read
//! payloads but never sign or verify.

pub mod error;
pub mod keys;
pub mod token;
pub mod tokenizer;
