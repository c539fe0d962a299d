//! Password-based encrypt / decrypt / extract over base64 container text.
//!
//! Every call derives its keys from scratch; nothing is cached between
//! operations and [`ContainerCodec`] holds only its configuration, so one
//! instance can be shared freely across threads.

use crate::cipher::{compute_hmac, decrypt_cbc, encrypt_cbc, verify_hmac, Iv};
use crate::config::CodecConfig;
use crate::encoding::{present, PresentedFields, TextEncoding};
use crate::envelope::Envelope;
use crate::error::{CryptoError, CryptoResult};
use crate::key::{derive_key, DerivedKey, Salt};
use crate::settings::{HMAC_SIZE, OPTION_PASSWORD, VERSION_3};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Shape of the fields returned by [`ContainerCodec::extract_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Raw,
    Text(TextEncoding),
}

/// Flag-style output selection; `hex` and `base64` are mutually exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    pub hex: bool,
    pub base64: bool,
}

impl ExtractOptions {
    pub fn output_mode(&self) -> CryptoResult<OutputMode> {
        match (self.hex, self.base64) {
            (true, true) => Err(CryptoError::Config(
                "hex and base64 output are mutually exclusive".to_string(),
            )),
            (true, false) => Ok(OutputMode::Text(TextEncoding::Hex)),
            (false, true) => Ok(OutputMode::Text(TextEncoding::Base64)),
            (false, false) => Ok(OutputMode::Raw),
        }
    }
}

/// Decoded envelope plus the encryption key derived from its salt.
///
/// The HMAC key is deliberately absent: extraction never derives it.
#[derive(Clone, Debug)]
pub struct ExtractedFields {
    pub envelope: Envelope,
    pub key: DerivedKey,
}

impl ExtractedFields {
    pub fn present(&self, encoding: TextEncoding) -> PresentedFields {
        present(&self.envelope, &self.key, encoding)
    }
}

/// Result of [`ContainerCodec::extract_with`].
#[derive(Clone, Debug)]
pub enum Extracted {
    Raw(ExtractedFields),
    Text(PresentedFields),
}

/// Caller-controlled envelope parameters for [`EncryptConfig::Explicit`].
///
/// Nothing here is generated implicitly. Use [`ExplicitParams::random`] to
/// ask for fresh salts and IV.
#[derive(Clone, Debug)]
pub struct ExplicitParams {
    pub version: u8,
    pub options: u8,
    pub salt: Salt,
    pub hmac_salt: Salt,
    pub iv: Iv,
    /// Tag to copy into the envelope under the pass-through policy. When
    /// `None` the tag is computed.
    pub hmac: Option<[u8; HMAC_SIZE]>,
    /// Encryption key to use instead of deriving one from the password.
    pub key: Option<DerivedKey>,
}

impl ExplicitParams {
    /// Version 3, password option, the given salts and IV.
    pub fn new(salt: Salt, hmac_salt: Salt, iv: Iv) -> Self {
        Self {
            version: VERSION_3,
            options: OPTION_PASSWORD,
            salt,
            hmac_salt,
            iv,
            hmac: None,
            key: None,
        }
    }

    /// Fresh random salts and IV.
    pub fn random() -> Self {
        Self::new(Salt::random(), Salt::random(), Iv::random())
    }

    pub fn with_hmac(mut self, hmac: [u8; HMAC_SIZE]) -> Self {
        self.hmac = Some(hmac);
        self
    }

    pub fn with_key(mut self, key: DerivedKey) -> Self {
        self.key = Some(key);
        self
    }

    /// Rebuilds parameters from text fields produced by extraction.
    ///
    /// `cipher_text` is ignored. Every other field must decode to its exact
    /// size.
    pub fn from_presented(fields: &PresentedFields, encoding: TextEncoding) -> CryptoResult<Self> {
        let header = Envelope::from_fields(
            &encoding.decode(&fields.version)?,
            &encoding.decode(&fields.options)?,
            &encoding.decode(&fields.salt)?,
            &encoding.decode(&fields.hmac_salt)?,
            &encoding.decode(&fields.iv)?,
            &[],
            &encoding.decode(&fields.hmac)?,
        )?;
        let key = DerivedKey::from_slice(&encoding.decode(&fields.key)?)?;

        Ok(Self {
            version: header.version,
            options: header.options,
            salt: header.encryption_salt,
            hmac_salt: header.hmac_salt,
            iv: header.iv,
            hmac: Some(header.hmac),
            key: Some(key),
        })
    }
}

/// Where [`ContainerCodec::encrypt`] takes its envelope framing from.
#[derive(Clone, Debug)]
pub enum EncryptConfig {
    /// Reuse version, options, salts, IV, tag and key of an existing
    /// container (decoded with the same password).
    FromSource(String),
    /// Use caller-supplied parameters.
    Explicit(ExplicitParams),
}

/// Stateless encrypt / decrypt / extract over container text.
#[derive(Clone, Debug, Default)]
pub struct ContainerCodec {
    config: CodecConfig,
}

impl ContainerCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Base64-decodes and parses a container, applying the header policy.
    pub fn open(&self, container: &str) -> CryptoResult<Envelope> {
        let data = STANDARD.decode(container.trim())?;
        let envelope = Envelope::decode(&data)?;
        debug!(
            "decoded {}-byte envelope (version {:#04x}, options {:#04x}, {} ciphertext bytes)",
            data.len(),
            envelope.version,
            envelope.options,
            envelope.ciphertext.len()
        );
        self.check_header(&envelope)?;
        Ok(envelope)
    }

    /// Decodes a container and derives its encryption key.
    pub fn extract(
        &self,
        container: &str,
        password: impl AsRef<[u8]>,
    ) -> CryptoResult<ExtractedFields> {
        let envelope = self.open(container)?;
        let key = derive_key(password.as_ref(), &envelope.encryption_salt, &self.config.kdf)?;
        Ok(ExtractedFields { envelope, key })
    }

    /// [`ContainerCodec::extract`] rendered in the requested output mode.
    pub fn extract_with(
        &self,
        container: &str,
        password: impl AsRef<[u8]>,
        mode: OutputMode,
    ) -> CryptoResult<Extracted> {
        let fields = self.extract(container, password)?;
        Ok(match mode {
            OutputMode::Raw => Extracted::Raw(fields),
            OutputMode::Text(encoding) => Extracted::Text(fields.present(encoding)),
        })
    }

    /// Decrypts a container to raw plaintext bytes.
    pub fn decrypt_bytes(
        &self,
        container: &str,
        password: impl AsRef<[u8]>,
    ) -> CryptoResult<Vec<u8>> {
        let password = password.as_ref();
        let ExtractedFields { envelope, key } = self.extract(container, password)?;

        if self.config.verifies_hmac() {
            let hmac_key = derive_key(password, &envelope.hmac_salt, &self.config.kdf)?;
            if let Err(e) = verify_hmac(&hmac_key, &envelope.signed_bytes(), &envelope.hmac) {
                warn!("rejecting envelope: HMAC does not match contents");
                return Err(e);
            }
        } else {
            debug!("HMAC pass-through policy, tag not verified");
        }

        decrypt_cbc(&key, &envelope.iv, &envelope.ciphertext)
    }

    /// Decrypts a container to UTF-8 text.
    pub fn decrypt(&self, container: &str, password: impl AsRef<[u8]>) -> CryptoResult<String> {
        let plaintext = self.decrypt_bytes(container, password)?;
        Ok(String::from_utf8(plaintext)?)
    }

    /// Encrypts `plaintext` into a new envelope without serializing it.
    pub fn seal(
        &self,
        plaintext: impl AsRef<[u8]>,
        password: impl AsRef<[u8]>,
        config: &EncryptConfig,
    ) -> CryptoResult<Envelope> {
        let password = password.as_ref();

        let (mut envelope, key, tag_supplied) = match config {
            EncryptConfig::FromSource(source) => {
                let ExtractedFields { envelope, key } = self.extract(source, password)?;
                (envelope, key, true)
            }
            EncryptConfig::Explicit(params) => {
                let key = match &params.key {
                    Some(key) => key.clone(),
                    None => derive_key(password, &params.salt, &self.config.kdf)?,
                };
                let envelope = Envelope {
                    version: params.version,
                    options: params.options,
                    encryption_salt: params.salt,
                    hmac_salt: params.hmac_salt,
                    iv: params.iv,
                    ciphertext: Vec::new(),
                    hmac: params.hmac.unwrap_or([0u8; HMAC_SIZE]),
                };
                (envelope, key, params.hmac.is_some())
            }
        };
        self.check_header(&envelope)?;

        envelope.ciphertext = encrypt_cbc(&key, &envelope.iv, plaintext.as_ref())?;

        if self.config.verifies_hmac() || !tag_supplied {
            let hmac_key = derive_key(password, &envelope.hmac_salt, &self.config.kdf)?;
            envelope.hmac = compute_hmac(&hmac_key, &envelope.signed_bytes())?;
        } else {
            debug!("HMAC pass-through policy, copying supplied tag");
        }

        Ok(envelope)
    }

    /// Encrypts `plaintext` and returns the base64 container text.
    pub fn encrypt(
        &self,
        plaintext: impl AsRef<[u8]>,
        password: impl AsRef<[u8]>,
        config: &EncryptConfig,
    ) -> CryptoResult<String> {
        let envelope = self.seal(plaintext, password, config)?;
        Ok(STANDARD.encode(envelope.encode()))
    }

    fn check_header(&self, envelope: &Envelope) -> CryptoResult<()> {
        if !self.config.strict_header {
            return Ok(());
        }
        if envelope.version != VERSION_3 {
            warn!("rejecting envelope with version {:#04x}", envelope.version);
            return Err(CryptoError::UnsupportedVersion(envelope.version));
        }
        if !envelope.uses_password() {
            warn!("rejecting envelope with options {:#04x}", envelope.options);
            return Err(CryptoError::UnsupportedOptions(envelope.options));
        }
        Ok(())
    }
}

/// Extracts fields with the default configuration.
pub fn extract(
    container: &str,
    password: impl AsRef<[u8]>,
    options: ExtractOptions,
) -> CryptoResult<Extracted> {
    ContainerCodec::default().extract_with(container, password, options.output_mode()?)
}

/// Decrypts with the default configuration.
pub fn decrypt(container: &str, password: impl AsRef<[u8]>) -> CryptoResult<String> {
    ContainerCodec::default().decrypt(container, password)
}

/// Encrypts with the default configuration.
pub fn encrypt(
    plaintext: impl AsRef<[u8]>,
    password: impl AsRef<[u8]>,
    config: &EncryptConfig,
) -> CryptoResult<String> {
    ContainerCodec::default().encrypt(plaintext, password, config)
}
