//! Binary framing of the RNCryptor v3 password container.
//!
//! ```text
//! offset  size  field
//! 0       1     version
//! 1       1     options
//! 2       8     encryption salt
//! 10      8     HMAC salt
//! 18      16    IV
//! 34      N     ciphertext   (N = total_len - 66)
//! 34+N    32    HMAC
//! ```
//!
//! Nothing in this module touches a key. Parsing reads the fixed head first,
//! then anchors the tag to the end of the buffer and takes the ciphertext
//! as whatever lies between.

use crate::cipher::Iv;
use crate::error::{CryptoError, CryptoResult};
use crate::key::Salt;
use crate::settings::{
    ENCRYPTION_SALT_OFFSET, HEADER_LEN, HMAC_SALT_OFFSET, HMAC_SIZE, IV_OFFSET, MIN_ENVELOPE_LEN,
    OPTIONS_OFFSET, OPTION_PASSWORD, SALT_SIZE, VERSION_OFFSET,
};
use serde::{Deserialize, Serialize};

/// A parsed (or about to be serialized) password envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub version: u8,
    pub options: u8,
    pub encryption_salt: Salt,
    pub hmac_salt: Salt,
    pub iv: Iv,
    pub ciphertext: Vec<u8>,
    pub hmac: [u8; HMAC_SIZE],
}

impl Envelope {
    /// Parses the serialized envelope.
    ///
    /// Only the length is validated; any version or options byte is accepted
    /// here and left to the caller's policy.
    pub fn decode(data: &[u8]) -> CryptoResult<Self> {
        if data.len() < MIN_ENVELOPE_LEN {
            return Err(CryptoError::MalformedEnvelope(format!(
                "need at least {MIN_ENVELOPE_LEN} bytes, got {}",
                data.len()
            )));
        }

        let (head, rest) = data.split_at(HEADER_LEN);
        let (ciphertext, tag) = rest.split_at(rest.len() - HMAC_SIZE);

        let version = head[VERSION_OFFSET];
        let options = head[OPTIONS_OFFSET];
        let encryption_salt =
            Salt::from_slice(&head[ENCRYPTION_SALT_OFFSET..ENCRYPTION_SALT_OFFSET + SALT_SIZE])?;
        let hmac_salt = Salt::from_slice(&head[HMAC_SALT_OFFSET..HMAC_SALT_OFFSET + SALT_SIZE])?;
        let iv = Iv::from_slice(&head[IV_OFFSET..HEADER_LEN])?;

        let mut hmac = [0u8; HMAC_SIZE];
        hmac.copy_from_slice(tag);

        Ok(Self {
            version,
            options,
            encryption_salt,
            hmac_salt,
            iv,
            ciphertext: ciphertext.to_vec(),
            hmac,
        })
    }

    /// Assembles an envelope from untyped field buffers.
    ///
    /// Every fixed-size field must have its exact length; a mismatch is a
    /// `MalformedEnvelope` rather than a silently shifted layout.
    pub fn from_fields(
        version: &[u8],
        options: &[u8],
        encryption_salt: &[u8],
        hmac_salt: &[u8],
        iv: &[u8],
        ciphertext: &[u8],
        hmac: &[u8],
    ) -> CryptoResult<Self> {
        let version = single_byte("version", version)?;
        let options = single_byte("options", options)?;
        let tag: [u8; HMAC_SIZE] = hmac.try_into().map_err(|_| {
            CryptoError::MalformedEnvelope(format!(
                "hmac must be {HMAC_SIZE} bytes, got {}",
                hmac.len()
            ))
        })?;

        Ok(Self {
            version,
            options,
            encryption_salt: Salt::from_slice(encryption_salt)?,
            hmac_salt: Salt::from_slice(hmac_salt)?,
            iv: Iv::from_slice(iv)?,
            ciphertext: ciphertext.to_vec(),
            hmac: tag,
        })
    }

    /// Serializes the envelope in wire order.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = self.signed_bytes();
        out.extend_from_slice(&self.hmac);
        out
    }

    /// The bytes covered by the HMAC: everything before the tag.
    pub fn signed_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        out.push(self.version);
        out.push(self.options);
        out.extend_from_slice(self.encryption_salt.as_bytes());
        out.extend_from_slice(self.hmac_salt.as_bytes());
        out.extend_from_slice(self.iv.as_bytes());
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Length of [`Envelope::encode`]'s output.
    pub fn encoded_len(&self) -> usize {
        MIN_ENVELOPE_LEN + self.ciphertext.len()
    }

    /// Whether the options byte marks a password-derived envelope.
    pub fn uses_password(&self) -> bool {
        self.options & OPTION_PASSWORD != 0
    }
}

fn single_byte(field: &str, bytes: &[u8]) -> CryptoResult<u8> {
    match bytes {
        [b] => Ok(*b),
        _ => Err(CryptoError::MalformedEnvelope(format!(
            "{field} must be 1 byte, got {}",
            bytes.len()
        ))),
    }
}
