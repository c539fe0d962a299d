//! Password-based key derivation.
//!
//! Keys are stretched with PBKDF2-HMAC-SHA1 at a fixed 10 000 iterations.
//! SHA-1 is only here because the container format demands it; this is not
//! a KDF choice to copy for new formats.

use crate::envelope::Envelope;
use crate::error::{CryptoError, CryptoResult};
use crate::settings::{KEY_SIZE, PBKDF2_ITERATIONS, SALT_SIZE};
use hmac::Hmac;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Parameters for the PBKDF2 stretch.
///
/// Anything other than the default breaks interoperability with other
/// RNCryptor v3 implementations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KdfParams {
    pub iterations: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            iterations: PBKDF2_ITERATIONS,
        }
    }
}

/// An 8-byte PBKDF2 salt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Salt([u8; SALT_SIZE]);

impl Salt {
    pub fn from_bytes(bytes: [u8; SALT_SIZE]) -> Self {
        Self(bytes)
    }

    /// Builds a salt from an untyped slice, rejecting any other length.
    pub fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        let arr: [u8; SALT_SIZE] = bytes.try_into().map_err(|_| {
            CryptoError::MalformedEnvelope(format!(
                "salt must be {SALT_SIZE} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self(arr))
    }

    /// Fresh salt from the thread-local CSPRNG.
    pub fn random() -> Self {
        let mut bytes = [0u8; SALT_SIZE];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SALT_SIZE] {
        &self.0
    }
}

/// A 32-byte key derived from a password, wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey([u8; KEY_SIZE]);

impl DerivedKey {
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Wraps caller-supplied key material of exactly [`KEY_SIZE`] bytes.
    pub fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        let arr: [u8; KEY_SIZE] = bytes.try_into().map_err(|_| CryptoError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}

/// Derives a 32-byte key from `password` and `salt`.
///
/// Deterministic: identical inputs always produce identical keys.
pub fn derive_key(password: &[u8], salt: &Salt, params: &KdfParams) -> CryptoResult<DerivedKey> {
    if params.iterations == 0 {
        return Err(CryptoError::KeyDerivation(
            "iteration count must be non-zero".to_string(),
        ));
    }

    let mut key = [0u8; KEY_SIZE];
    pbkdf2::pbkdf2::<Hmac<Sha1>>(password, salt.as_bytes(), params.iterations, &mut key)
        .map_err(|e| CryptoError::KeyDerivation(format!("PBKDF2 rejected parameters: {e}")))?;

    let derived = DerivedKey(key);
    key.zeroize();
    Ok(derived)
}

/// Both keys of a password envelope.
#[derive(Clone, Debug)]
pub struct EnvelopeKeys {
    /// AES-256 key, derived from the encryption salt.
    pub encryption: DerivedKey,
    /// HMAC-SHA256 key, derived from the HMAC salt.
    pub hmac: DerivedKey,
}

/// Derives the encryption and HMAC keys for `envelope` from one password.
pub fn derive_envelope_keys(
    password: &[u8],
    envelope: &Envelope,
    params: &KdfParams,
) -> CryptoResult<EnvelopeKeys> {
    Ok(EnvelopeKeys {
        encryption: derive_key(password, &envelope.encryption_salt, params)?,
        hmac: derive_key(password, &envelope.hmac_salt, params)?,
    })
}
