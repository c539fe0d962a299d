//! Shared container vectors.
#![allow(dead_code)]

/// 82-byte container from the legacy reference data. Its password is not
/// recorded, only the derived encryption key.
pub const LEGACY_CONTAINER: &str = "AwFkbyZ0mWGKC+gfhDW9kYmriBjSmW+jaQQFX/nE7AUlfEn98n3FwekTtZt1+/ILPVEdMiDI9YKnMacxnRAYaIDFeR5vn2GvYeZsZddDmw5SgQ==";
pub const LEGACY_SALT_HEX: &str = "646f267499618a0b";
pub const LEGACY_HMAC_SALT_HEX: &str = "e81f8435bd9189ab";
pub const LEGACY_IV_HEX: &str = "8818d2996fa36904055ff9c4ec05257c";
pub const LEGACY_HMAC_HEX: &str =
    "1d3220c8f582a731a7319d10186880c5791e6f9f61af61e66c65d7439b0e5281";
pub const LEGACY_CIPHERTEXT_HEX: &str = "49fdf27dc5c1e913b59b75fbf20b3d51";
pub const LEGACY_KEY_HEX: &str =
    "5809f14845fecabed004a0f180640b62d290c1f14773f62f9bc1489c13ec1c97";
pub const LEGACY_PLAINTEXT: &str = "teste";

/// Fully authenticated container with a known password.
pub const KNOWN_PASSWORD: &str = "thepassword";
pub const KNOWN_PLAINTEXT: &str = "Hello, world!";
pub const KNOWN_CONTAINER: &str = "AwEAAQIDBAUGBwECAwQFBgcIAgMEBQYHCAkKCwwNDg8AAUcwYrphpVlxR7ffG6z3xJhz4IieCtti+yt+rK9z2D8wfHD6xJ3r8RBW2/XYDNQSeg==";
pub const KNOWN_SALT_HEX: &str = "0001020304050607";
pub const KNOWN_HMAC_SALT_HEX: &str = "0102030405060708";
pub const KNOWN_IV_HEX: &str = "02030405060708090a0b0c0d0e0f0001";
pub const KNOWN_CIPHERTEXT_HEX: &str = "473062ba61a5597147b7df1bacf7c498";
pub const KNOWN_HMAC_HEX: &str =
    "73e0889e0adb62fb2b7eacaf73d83f307c70fac49debf11056dbf5d80cd4127a";
pub const KNOWN_ENCRYPTION_KEY_HEX: &str =
    "c3a6bc6b9d9b7ed4298d0480e43096e3848a740ce1cf9b219ae552f12a09297b";
pub const KNOWN_HMAC_KEY_HEX: &str =
    "211e81611f669639f7e12d99d00927894efe591de13cde460af2ed0d441be5d0";

/// All-zero salts and IV, one-byte password, empty plaintext.
pub const ZERO_PASSWORD: &str = "a";
pub const ZERO_CONTAINER: &str = "AwEAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAALMDm+Mc1+zl51T1yNoXADZmMTroqJ3c+OPLQf3BMLIynb4H1vTTLDTgUMi9fpM7Eg==";
pub const ZERO_KEY_HEX: &str =
    "d2cc92e9115a8d1665640514505d9e3ef37fd8af5c026428cece22f0cd3406f7";

pub fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap()
}

pub fn unbase64(s: &str) -> Vec<u8> {
    use base64::Engine;
    base64::engine::general_purpose::STANDARD.decode(s).unwrap()
}

/// Routes codec logs to the test harness; filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
