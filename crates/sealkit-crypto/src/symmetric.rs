//! Symmetric session key generation.
//!
//! Session keys come in three nominal strengths: 64, 128, and 192 bits.
//! A 64-bit request draws 8 random bytes and doubles them to a 16-byte
//! key - a legacy rule kept so existing key blobs stay valid. The byte
//! encoding of a key is the raw key material itself.

use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{CryptoError, CryptoResult};

/// Block cipher selected for a session key.
///
/// The tag is resolved exactly once from the key material; all bulk
/// operations dispatch on it instead of re-deriving block sizes per call
/// site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// AES-128-CBC (16-byte key).
    Aes128,
    /// AES-192-CBC (24-byte key).
    Aes192,
}

impl Algorithm {
    /// Key length in bytes.
    pub const fn key_len(self) -> usize {
        match self {
            Algorithm::Aes128 => 16,
            Algorithm::Aes192 => 24,
        }
    }

    /// Cipher block size in bytes (also the IV length).
    pub const fn block_size(self) -> usize {
        16
    }

    /// Resolve the algorithm for a key of `len` bytes.
    pub fn from_key_len(len: usize) -> Option<Self> {
        match len {
            16 => Some(Algorithm::Aes128),
            24 => Some(Algorithm::Aes192),
            _ => None,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Aes128 => write!(f, "AES-128-CBC"),
            Algorithm::Aes192 => write!(f, "AES-192-CBC"),
        }
    }
}

/// Symmetric session key with automatic zeroization.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey {
    bytes: Vec<u8>,
}

impl SymmetricKey {
    /// Generate a fresh session key of the given nominal strength.
    ///
    /// Accepts 64, 128, or 192 bits; anything else is rejected with
    /// [`CryptoError::InvalidKeyLength`]. The 64-bit case produces a
    /// 16-byte key by duplicating an 8-byte random block (legacy rule).
    pub fn generate(bits: u32) -> CryptoResult<Self> {
        let mut rng = OsRng;
        match bits {
            64 => {
                let mut half = [0u8; 8];
                rng.fill_bytes(&mut half);
                let mut bytes = Vec::with_capacity(16);
                bytes.extend_from_slice(&half);
                bytes.extend_from_slice(&half);
                half.zeroize();
                Ok(Self { bytes })
            }
            128 => Ok(Self::random(&mut rng, 16)),
            192 => Ok(Self::random(&mut rng, 24)),
            other => Err(CryptoError::InvalidKeyLength(other)),
        }
    }

    fn random(rng: &mut OsRng, len: usize) -> Self {
        let mut bytes = vec![0u8; len];
        rng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Reconstruct a key from its raw byte encoding.
    ///
    /// Performs no length validation; [`SymmetricKey::algorithm`] is the
    /// validation point before any bulk use.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Raw key material.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Raw byte encoding (identity transform).
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Key length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the key is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Resolve the block cipher for this key.
    ///
    /// Fails with [`CryptoError::InvalidKeyLength`] for any length
    /// outside {16, 24} bytes.
    pub fn algorithm(&self) -> CryptoResult<Algorithm> {
        Algorithm::from_key_len(self.bytes.len())
            .ok_or(CryptoError::InvalidKeyLength(self.bytes.len() as u32 * 8))
    }
}

impl Clone for SymmetricKey {
    fn clone(&self) -> Self {
        Self {
            bytes: self.bytes.clone(),
        }
    }
}

impl std::fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymmetricKey")
            .field("len", &self.bytes.len())
            .field("key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_lengths() {
        // Legacy doubling rule: 64-bit requests yield 16 bytes.
        assert_eq!(SymmetricKey::generate(64).unwrap().len(), 16);
        assert_eq!(SymmetricKey::generate(128).unwrap().len(), 16);
        assert_eq!(SymmetricKey::generate(192).unwrap().len(), 24);
    }

    #[test]
    fn test_generate_64_doubles_random_block() {
        let key = SymmetricKey::generate(64).unwrap();
        let (front, back) = key.as_bytes().split_at(8);
        assert_eq!(front, back);
    }

    #[test]
    fn test_generate_rejects_other_lengths() {
        for bits in [0, 56, 100, 256] {
            let result = SymmetricKey::generate(bits);
            assert!(matches!(result, Err(CryptoError::InvalidKeyLength(b)) if b == bits));
        }
    }

    #[test]
    fn test_generate_is_random() {
        let k1 = SymmetricKey::generate(128).unwrap();
        let k2 = SymmetricKey::generate(128).unwrap();
        assert_ne!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn test_byte_roundtrip_is_identity() {
        let key = SymmetricKey::generate(192).unwrap();
        let restored = SymmetricKey::from_bytes(key.to_bytes());
        assert_eq!(key.as_bytes(), restored.as_bytes());
    }

    #[test]
    fn test_from_bytes_does_not_validate() {
        // Deserialization is an identity transform; bad lengths only
        // surface when an algorithm is resolved.
        let key = SymmetricKey::from_bytes(vec![0u8; 10]);
        assert_eq!(key.len(), 10);
        assert!(matches!(
            key.algorithm(),
            Err(CryptoError::InvalidKeyLength(80))
        ));
    }

    #[test]
    fn test_algorithm_resolution() {
        let key = SymmetricKey::generate(128).unwrap();
        assert_eq!(key.algorithm().unwrap(), Algorithm::Aes128);

        let key = SymmetricKey::generate(192).unwrap();
        assert_eq!(key.algorithm().unwrap(), Algorithm::Aes192);
    }

    #[test]
    fn test_algorithm_properties() {
        assert_eq!(Algorithm::Aes128.key_len(), 16);
        assert_eq!(Algorithm::Aes192.key_len(), 24);
        assert_eq!(Algorithm::Aes128.block_size(), 16);
        assert_eq!(Algorithm::Aes192.block_size(), 16);
        assert_eq!(Algorithm::Aes128.to_string(), "AES-128-CBC");
    }

    #[test]
    fn test_debug_redacted() {
        let key = SymmetricKey::generate(128).unwrap();
        let debug = format!("{:?}", key);
        assert!(debug.contains("REDACTED"));
    }
}
