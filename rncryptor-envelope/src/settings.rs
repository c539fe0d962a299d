//! Fixed format parameters of the RNCryptor v3 password container.
//!
//! Every length and offset used by the codec is named here; nothing else in
//! the crate spells out a field size as a literal.

/// Format version written by this crate.
pub const VERSION_3: u8 = 0x03;

/// Option bit marking a password-based envelope (both salts present).
pub const OPTION_PASSWORD: u8 = 0x01;

/// Size of each PBKDF2 salt in bytes.
pub const SALT_SIZE: usize = 8;

/// Size of the AES-CBC initialization vector in bytes.
pub const IV_SIZE: usize = 16;

/// Size of the HMAC-SHA256 tag in bytes.
pub const HMAC_SIZE: usize = 32;

/// Size of each derived key in bytes (AES-256 and HMAC keys alike).
pub const KEY_SIZE: usize = 32;

/// PBKDF2 iteration count fixed by the format.
pub const PBKDF2_ITERATIONS: u32 = 10_000;

pub const VERSION_OFFSET: usize = 0;
pub const OPTIONS_OFFSET: usize = VERSION_OFFSET + 1;
pub const ENCRYPTION_SALT_OFFSET: usize = OPTIONS_OFFSET + 1;
pub const HMAC_SALT_OFFSET: usize = ENCRYPTION_SALT_OFFSET + SALT_SIZE;
pub const IV_OFFSET: usize = HMAC_SALT_OFFSET + SALT_SIZE;

/// Length of the fixed head (version through IV); ciphertext starts here.
pub const HEADER_LEN: usize = IV_OFFSET + IV_SIZE;

/// Smallest valid envelope: head plus tag with an empty ciphertext.
pub const MIN_ENVELOPE_LEN: usize = HEADER_LEN + HMAC_SIZE;
