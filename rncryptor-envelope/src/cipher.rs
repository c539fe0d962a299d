//! AES-256-CBC and HMAC-SHA256 primitives over derived keys.

use crate::error::{CryptoError, CryptoResult};
use crate::key::DerivedKey;
use crate::settings::{HMAC_SIZE, IV_SIZE};
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use hmac::{Hmac, Mac};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::Sha256;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;
type HmacSha256 = Hmac<Sha256>;

/// A 16-byte CBC initialization vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Iv([u8; IV_SIZE]);

impl Iv {
    pub fn from_bytes(bytes: [u8; IV_SIZE]) -> Self {
        Self(bytes)
    }

    /// Builds an IV from an untyped slice, rejecting any other length.
    pub fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        let arr: [u8; IV_SIZE] = bytes.try_into().map_err(|_| {
            CryptoError::MalformedEnvelope(format!(
                "iv must be {IV_SIZE} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self(arr))
    }

    /// Fresh IV from the thread-local CSPRNG.
    pub fn random() -> Self {
        let mut bytes = [0u8; IV_SIZE];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; IV_SIZE] {
        &self.0
    }
}

/// Encrypts `plaintext` with AES-256-CBC and PKCS#7 padding.
///
/// Output length is always a non-zero multiple of the 16-byte block size.
pub fn encrypt_cbc(key: &DerivedKey, iv: &Iv, plaintext: &[u8]) -> CryptoResult<Vec<u8>> {
    let cipher = Aes256CbcEnc::new_from_slices(key.as_bytes(), iv.as_bytes())
        .map_err(|e| CryptoError::Encryption(format!("cipher setup failed: {e}")))?;
    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

/// Decrypts AES-256-CBC `ciphertext` and strips PKCS#7 padding.
pub fn decrypt_cbc(key: &DerivedKey, iv: &Iv, ciphertext: &[u8]) -> CryptoResult<Vec<u8>> {
    let cipher = Aes256CbcDec::new_from_slices(key.as_bytes(), iv.as_bytes())
        .map_err(|e| CryptoError::Decryption(format!("cipher setup failed: {e}")))?;
    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CryptoError::Decryption("invalid padding (wrong key or corrupt data)".to_string()))
}

/// Computes HMAC-SHA256 of `data` under `key`.
pub fn compute_hmac(key: &DerivedKey, data: &[u8]) -> CryptoResult<[u8; HMAC_SIZE]> {
    let mut mac = HmacSha256::new_from_slice(key.as_bytes())
        .map_err(|e| CryptoError::KeyDerivation(format!("HMAC key rejected: {e}")))?;
    mac.update(data);

    let mut tag = [0u8; HMAC_SIZE];
    tag.copy_from_slice(&mac.finalize().into_bytes());
    Ok(tag)
}

/// Checks `tag` against HMAC-SHA256 of `data` in constant time.
pub fn verify_hmac(key: &DerivedKey, data: &[u8], tag: &[u8; HMAC_SIZE]) -> CryptoResult<()> {
    let mut mac = HmacSha256::new_from_slice(key.as_bytes())
        .map_err(|e| CryptoError::KeyDerivation(format!("HMAC key rejected: {e}")))?;
    mac.update(data);
    mac.verify_slice(tag).map_err(|_| CryptoError::HmacMismatch)
}
