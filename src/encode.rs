//! Payload encoding.
//!
//! The encoding a caller asks for by name is resolved once, at the options
//! boundary, into a closed [`Encoding`] variant. Unknown names fail closed
//! there, before any directory or file is touched. Encoding is one-way:
//! this crate never decodes what it wrote.

use crate::error::EncodingError;
use crate::flow::Node;
use aes_gcm::aead::{Aead, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, KeyInit};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::Value;
use sha2::{Digest, Sha256};

/// The payload transforms this crate knows how to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoding {
    /// Leave the payload as plain structured data.
    None,
    /// AES-256-GCM over the JSON-serialized payload, keyed from a passphrase.
    Aes { key: String },
}

impl Encoding {
    /// Resolves a requested encoding name and optional key.
    ///
    /// An absent name or the literal `"none"` bypasses encoding entirely.
    /// `"AES"` requires a key. Anything else is unsupported and fatal.
    pub fn resolve(name: Option<&str>, key: Option<&str>) -> Result<Self, EncodingError> {
        match name {
            None | Some("none") => Ok(Encoding::None),
            Some("AES") => match key {
                Some(key) if !key.is_empty() => Ok(Encoding::Aes {
                    key: key.to_string(),
                }),
                _ => Err(EncodingError::MissingKey("AES".to_string())),
            },
            Some(other) => Err(EncodingError::Unsupported(other.to_string())),
        }
    }

    /// The wire name written into the output's `encoding` field.
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::None => "none",
            Encoding::Aes { .. } => "AES",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Encoding::None)
    }

    /// Applies the transform to a node payload.
    ///
    /// `None` yields the payload as a JSON array; `Aes` yields the
    /// ciphertext as a JSON string.
    pub fn transform(&self, payload: &[Node]) -> Result<Value, EncodingError> {
        match self {
            Encoding::None => Ok(serde_json::to_value(payload)?),
            Encoding::Aes { key } => {
                let plaintext = serde_json::to_string(payload)?;
                Ok(Value::String(aes_encrypt(&plaintext, key)?))
            }
        }
    }
}

/// Encrypts with AES-256-GCM under a SHA-256-derived key and a fresh random
/// nonce. The output is base64(nonce || ciphertext), decryptable later by
/// anyone holding the same passphrase.
fn aes_encrypt(plaintext: &str, key: &str) -> Result<String, EncodingError> {
    // SHA-256 output and the AES-256 key share the same 32-byte array type.
    let digest = Sha256::digest(key.as_bytes());
    let cipher = Aes256Gcm::new(&digest);

    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
    let ciphertext = cipher
        .encrypt(&nonce, plaintext.as_bytes())
        .map_err(|_| EncodingError::Cipher)?;

    let mut message = nonce.to_vec();
    message.extend_from_slice(&ciphertext);
    Ok(BASE64.encode(message))
}
