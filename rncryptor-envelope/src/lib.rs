//! Password-based RNCryptor v3 envelope codec.
//!
//! Encrypts and decrypts base64 container text of the form
//! `version ‖ options ‖ encryption salt ‖ HMAC salt ‖ IV ‖ ciphertext ‖ HMAC`
//! using:
//! - PBKDF2-HMAC-SHA1 (10 000 iterations) to derive two 32-byte keys from one
//!   password, one per salt
//! - AES-256-CBC with PKCS#7 padding for the payload
//! - HMAC-SHA256 over everything before the tag
//!
//! # Layers
//!
//! 1. **Key derivation** ([`derive_key`]): `(password, salt) -> key`.
//! 2. **Envelope codec** ([`Envelope`]): fixed-offset framing, no crypto.
//! 3. **Orchestration** ([`ContainerCodec`]): `extract`, `decrypt`,
//!    `encrypt` over container text.
//!
//! By default HMAC tags are carried but not checked, which keeps the codec
//! byte-compatible with containers whose tags were never computed. Set
//! [`HmacPolicy::Verify`] (or use [`CodecConfig::strict`]) to authenticate.

pub mod cipher;
pub mod config;
pub mod container;
pub mod encoding;
pub mod envelope;
mod error;
pub mod key;
pub mod settings;

pub use cipher::{compute_hmac, decrypt_cbc, encrypt_cbc, verify_hmac, Iv};
pub use config::{CodecConfig, HmacPolicy};
pub use container::{
    decrypt, encrypt, extract, ContainerCodec, EncryptConfig, ExplicitParams, ExtractOptions,
    Extracted, ExtractedFields, OutputMode,
};
pub use encoding::{present, PresentedFields, TextEncoding};
pub use envelope::Envelope;
pub use error::{CryptoError, CryptoResult};
pub use key::{derive_envelope_keys, derive_key, DerivedKey, EnvelopeKeys, KdfParams, Salt};
pub use settings::{
    HMAC_SIZE, IV_SIZE, KEY_SIZE, MIN_ENVELOPE_LEN, OPTION_PASSWORD, PBKDF2_ITERATIONS,
    SALT_SIZE, VERSION_3,
};
