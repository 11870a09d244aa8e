//! # sealkit-crypto
//!
//! Hybrid encryption primitives for sealkit.
//!
//! This crate implements a hybrid (asymmetric + symmetric) pipeline: an
//! RSA key pair protects a randomly generated symmetric session key,
//! which in turn encrypts bulk text. All operations are synchronous,
//! stateless calls over in-memory byte buffers; reading and writing the
//! resulting blobs is the caller's concern.
//!
//! ## Cryptographic Primitives
//!
//! - **Key transport**: RSA-2048 with OAEP (SHA-256 digest and MGF1)
//! - **Bulk cipher**: AES-CBC with PKCS#7 padding, fresh IV per message
//! - **Key storage (optional)**: Argon2id + AES-256-GCM locked container
//! - **Key encodings**: PEM for RSA keys, raw bytes for session keys
//!
//! ## Payload Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ IV (16 bytes)                                │
//! ├──────────────────────────────────────────────┤
//! │ AES-CBC ciphertext (PKCS#7-padded UTF-8)     │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use sealkit_crypto::{
//!     decrypt_text, encrypt_text, unwrap_key, wrap_key, Keypair, SymmetricKey,
//! };
//!
//! // Recipient side: a long-lived RSA key pair
//! let keypair = Keypair::generate().unwrap();
//!
//! // Sender side: a fresh session key, wrapped for the recipient
//! let session = SymmetricKey::generate(128).unwrap();
//! let wrapped = wrap_key(&session, &keypair.public).unwrap();
//!
//! // Recipient recovers the session key and reads the message
//! let recovered = unwrap_key(&wrapped, &keypair.private).unwrap();
//! let payload = encrypt_text("hello, hybrid system", &session).unwrap();
//! assert_eq!(decrypt_text(&payload, &recovered).unwrap(), "hello, hybrid system");
//! ```

pub mod asymmetric;
pub mod bulk;
pub mod error;
pub mod kdf;
pub mod keystore;
pub mod symmetric;
pub mod wrap;

// Re-export commonly used types
pub use asymmetric::{Keypair, PrivateKey, PublicKey, KEY_BITS};
pub use bulk::{decrypt_text, encrypt_text, BLOCK_SIZE};
pub use error::{CryptoError, CryptoResult};
pub use kdf::{derive_key, validate_passphrase, DerivedKey, KdfParams, MIN_PASSPHRASE_LENGTH};
pub use keystore::{is_locked_key, lock_private_key, unlock_private_key, MAGIC_LOCKED_KEY};
pub use symmetric::{Algorithm, SymmetricKey};
pub use wrap::{unwrap_key, wrap_key};

#[cfg(test)]
mod integration_tests {
    use super::*;

    /// Full hybrid workflow: generate keys, wrap, unwrap, encrypt, decrypt.
    #[test]
    fn test_full_hybrid_workflow() {
        let keypair = Keypair::generate().unwrap();
        let session = SymmetricKey::generate(128).unwrap();

        // Wrap the session key for distribution
        let wrapped = wrap_key(&session, &keypair.public).unwrap();
        let recovered = unwrap_key(&wrapped, &keypair.private).unwrap();
        assert_eq!(session.as_bytes(), recovered.as_bytes());

        // Bulk encryption under the recovered key
        let message = "hello, hybrid system";
        let payload = encrypt_text(message, &session).unwrap();
        assert_eq!(decrypt_text(&payload, &recovered).unwrap(), message);

        // An unrelated key pair cannot unwrap
        let eve = Keypair::generate().unwrap();
        assert!(matches!(
            unwrap_key(&wrapped, &eve.private),
            Err(CryptoError::Unwrap)
        ));
    }

    /// Keys survive the PEM round-trip and still work.
    #[test]
    fn test_pem_persistence_workflow() {
        let original = Keypair::generate().unwrap();

        let public = PublicKey::from_pem(&original.public.to_pem().unwrap()).unwrap();
        let private = PrivateKey::from_pem(&original.private.to_pem().unwrap()).unwrap();

        let session = SymmetricKey::generate(192).unwrap();
        let wrapped = wrap_key(&session, &public).unwrap();
        let recovered = unwrap_key(&wrapped, &private).unwrap();
        assert_eq!(session.as_bytes(), recovered.as_bytes());
    }

    /// Locked private keys participate in the same workflow.
    #[test]
    fn test_locked_key_workflow() {
        let keypair = Keypair::generate().unwrap();
        let session = SymmetricKey::generate(128).unwrap();
        let wrapped = wrap_key(&session, &keypair.public).unwrap();

        let locked = lock_private_key(&keypair.private, "operator-passphrase").unwrap();
        assert!(is_locked_key(&locked));

        let private = unlock_private_key(&locked, "operator-passphrase").unwrap();
        let recovered = unwrap_key(&wrapped, &private).unwrap();
        assert_eq!(session.as_bytes(), recovered.as_bytes());
    }
}
