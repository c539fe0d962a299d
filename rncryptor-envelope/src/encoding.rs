//! Text renderings of envelope fields for inspection.

use crate::envelope::Envelope;
use crate::error::CryptoResult;
use crate::key::DerivedKey;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// Text form used when presenting raw bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextEncoding {
    /// Lowercase hexadecimal.
    Hex,
    /// Standard base64 with padding.
    Base64,
}

impl TextEncoding {
    pub fn encode(self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Hex => hex::encode(bytes),
            TextEncoding::Base64 => STANDARD.encode(bytes),
        }
    }

    pub fn decode(self, text: &str) -> CryptoResult<Vec<u8>> {
        match self {
            TextEncoding::Hex => Ok(hex::decode(text)?),
            TextEncoding::Base64 => Ok(STANDARD.decode(text)?),
        }
    }
}

/// Every envelope field plus the derived encryption key, as text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentedFields {
    pub version: String,
    pub options: String,
    pub salt: String,
    pub hmac_salt: String,
    pub iv: String,
    pub hmac: String,
    pub cipher_text: String,
    pub key: String,
}

/// Renders `envelope` and `key` in the requested text encoding.
pub fn present(envelope: &Envelope, key: &DerivedKey, encoding: TextEncoding) -> PresentedFields {
    PresentedFields {
        version: encoding.encode(&[envelope.version]),
        options: encoding.encode(&[envelope.options]),
        salt: encoding.encode(envelope.encryption_salt.as_bytes()),
        hmac_salt: encoding.encode(envelope.hmac_salt.as_bytes()),
        iv: encoding.encode(envelope.iv.as_bytes()),
        hmac: encoding.encode(&envelope.hmac),
        cipher_text: encoding.encode(&envelope.ciphertext),
        key: encoding.encode(key.as_bytes()),
    }
}
