//! Passphrase key derivation using Argon2id.
//!
//! Only used by the locked private-key store; the hybrid pipeline itself
//! never derives keys from passphrases.

use argon2::{Algorithm, Argon2, Params, Version};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{CryptoError, CryptoResult};

/// Minimum passphrase length.
pub const MIN_PASSPHRASE_LENGTH: usize = 12;

/// Argon2id parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KdfParams {
    /// Memory in KiB (default: 65536 = 64 MiB).
    pub memory_kib: u32,
    /// Time iterations (default: 3).
    pub iterations: u32,
    /// Parallelism degree (default: 4).
    pub parallelism: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            memory_kib: 65536, // 64 MiB
            iterations: 3,
            parallelism: 4,
        }
    }
}

/// Derived key with automatic zeroization on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; 32],
}

impl DerivedKey {
    /// Get the key bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive a 256-bit key from a passphrase using Argon2id.
pub fn derive_key(
    passphrase: &[u8],
    salt: &[u8; 32],
    params: &KdfParams,
) -> CryptoResult<DerivedKey> {
    if passphrase.len() < MIN_PASSPHRASE_LENGTH {
        return Err(CryptoError::PassphraseTooShort(MIN_PASSPHRASE_LENGTH));
    }

    let argon2_params = Params::new(
        params.memory_kib,
        params.iterations,
        params.parallelism,
        Some(32),
    )
    .map_err(|e| CryptoError::KeyDerivation(e.to_string()))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon2_params);

    let mut key = [0u8; 32];
    argon2
        .hash_password_into(passphrase, salt, &mut key)
        .map_err(|e| CryptoError::KeyDerivation(e.to_string()))?;

    Ok(DerivedKey { key })
}

/// Validate passphrase strength.
pub fn validate_passphrase(passphrase: &str) -> CryptoResult<()> {
    if passphrase.len() < MIN_PASSPHRASE_LENGTH {
        return Err(CryptoError::PassphraseTooShort(MIN_PASSPHRASE_LENGTH));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kdf_params_default() {
        let params = KdfParams::default();
        assert_eq!(params.memory_kib, 65536);
        assert_eq!(params.iterations, 3);
        assert_eq!(params.parallelism, 4);
    }

    #[test]
    fn test_derive_key_deterministic() {
        let passphrase = b"my-secure-passphrase-123";
        let salt = [42u8; 32];
        let params = KdfParams::default();

        let key1 = derive_key(passphrase, &salt, &params).unwrap();
        let key2 = derive_key(passphrase, &salt, &params).unwrap();

        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_derive_key_different_salts() {
        let passphrase = b"my-secure-passphrase-123";
        let params = KdfParams::default();

        let key1 = derive_key(passphrase, &[1u8; 32], &params).unwrap();
        let key2 = derive_key(passphrase, &[2u8; 32], &params).unwrap();

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_derive_key_passphrase_too_short() {
        let result = derive_key(b"short", &[0u8; 32], &KdfParams::default());
        assert!(matches!(result, Err(CryptoError::PassphraseTooShort(_))));
    }

    #[test]
    fn test_validate_passphrase() {
        assert!(validate_passphrase("my-long-passphrase").is_ok());
        assert!(matches!(
            validate_passphrase("short"),
            Err(CryptoError::PassphraseTooShort(_))
        ));
    }

    #[test]
    fn test_derived_key_debug_redacted() {
        let key = derive_key(b"my-secure-passphrase-123", &[0u8; 32], &KdfParams::default())
            .unwrap();
        assert!(format!("{:?}", key).contains("REDACTED"));
    }

    #[test]
    fn test_kdf_params_serialization() {
        let params = KdfParams::default();
        let json = serde_json::to_string(&params).unwrap();
        let parsed: KdfParams = serde_json::from_str(&json).unwrap();
        assert_eq!(params, parsed);
    }
}
