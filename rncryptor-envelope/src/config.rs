//! Codec configuration.

use crate::error::CryptoResult;
use crate::key::KdfParams;
use serde::{Deserialize, Serialize};

/// How the HMAC tag is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HmacPolicy {
    /// Tags are carried along unchanged: never checked on decrypt, copied
    /// from the source envelope on encrypt. Matches the legacy behavior of
    /// containers produced without authentication.
    #[default]
    PassThrough,
    /// Tags are verified before decrypting and recomputed on encrypt.
    Verify,
}

/// Configuration for a [`ContainerCodec`](crate::ContainerCodec).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// HMAC handling on encrypt and decrypt.
    pub hmac_policy: HmacPolicy,

    /// Reject envelopes whose version is not 3 or whose options byte lacks
    /// the password flag.
    pub strict_header: bool,

    /// PBKDF2 parameters for both derived keys.
    pub kdf: KdfParams,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            hmac_policy: HmacPolicy::PassThrough,
            strict_header: false,
            kdf: KdfParams::default(),
        }
    }
}

impl CodecConfig {
    /// Authenticating configuration: tags verified and recomputed, unknown
    /// headers rejected.
    pub fn strict() -> Self {
        Self {
            hmac_policy: HmacPolicy::Verify,
            strict_header: true,
            kdf: KdfParams::default(),
        }
    }

    /// Loads a configuration from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> CryptoResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> CryptoResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn verifies_hmac(&self) -> bool {
        self.hmac_policy == HmacPolicy::Verify
    }
}
