//! Error types for cryptographic operations.

use thiserror::Error;

/// Cryptographic operation errors.
///
/// Unwrap and bulk-decryption failures are deliberately opaque: the variants
/// carry no cause so callers cannot distinguish a padding mismatch from a
/// wrong key. The underlying cause is logged at debug level only.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// RSA key pair generation failed.
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    /// Key encoding to PEM failed.
    #[error("Key encoding failed: {0}")]
    KeyEncode(String),

    /// Malformed key encoding - wrong header, truncated data, or wrong key type.
    #[error("Key parsing failed: {0}")]
    KeyParse(String),

    /// Requested symmetric key length is not one of the supported strengths.
    #[error("Invalid key length: {0} bits (expected 64, 128, or 192)")]
    InvalidKeyLength(u32),

    /// Wrapping a symmetric key under a public key failed.
    #[error("Key wrap failed: {0}")]
    Wrap(String),

    /// Unwrapping failed - wrong key or corrupted blob.
    #[error("Key unwrap failed - wrong key or corrupted blob")]
    Unwrap,

    /// Bulk encryption failed.
    #[error("Encryption failed: {0}")]
    Encryption(String),

    /// Bulk decryption failed - wrong key or corrupted data.
    #[error("Decryption failed - wrong key or corrupted data")]
    DecryptionFailed,

    /// Passphrase key derivation failed.
    #[error("Key derivation failed: {0}")]
    KeyDerivation(String),

    /// Passphrase too short.
    #[error("Passphrase too short (minimum {0} characters required)")]
    PassphraseTooShort(usize),

    /// Invalid magic bytes - not a locked key file.
    #[error("Invalid magic bytes - not a locked key file")]
    InvalidMagic,

    /// Locked key header parsing failed.
    #[error("Header parsing failed: {0}")]
    HeaderParse(String),
}

/// Result type for cryptographic operations.
pub type CryptoResult<T> = Result<T, CryptoError>;
