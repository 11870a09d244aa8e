//! Bulk text encryption with AES-CBC and PKCS#7 padding.
//!
//! # Payload Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ IV (16 bytes, fresh random per encryption)   │
//! ├──────────────────────────────────────────────┤
//! │ CBC ciphertext of PKCS#7-padded UTF-8 text   │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The cipher (AES-128 or AES-192) is selected by the key's
//! [`Algorithm`] tag. A fresh IV is drawn for every call; an IV is never
//! reused under the same key.
//!
//! Decryption failures are normalized: bad padding and invalid UTF-8
//! both surface as [`CryptoError::DecryptionFailed`] so the error
//! surface cannot be used as a padding oracle.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::{Aes128, Aes192};
use rand::RngCore;

use crate::error::{CryptoError, CryptoResult};
use crate::symmetric::{Algorithm, SymmetricKey};

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;
type Aes192CbcEnc = cbc::Encryptor<Aes192>;
type Aes192CbcDec = cbc::Decryptor<Aes192>;

/// AES block size in bytes; also the IV length.
pub const BLOCK_SIZE: usize = 16;

/// Encrypt text under a symmetric key.
///
/// Returns IV ‖ ciphertext. The key length must match one of the
/// supported ciphers or the call fails with
/// [`CryptoError::InvalidKeyLength`].
pub fn encrypt_text(plaintext: &str, key: &SymmetricKey) -> CryptoResult<Vec<u8>> {
    let algorithm = key.algorithm()?;

    let mut iv = [0u8; BLOCK_SIZE];
    rand::thread_rng().fill_bytes(&mut iv);

    let body = match algorithm {
        Algorithm::Aes128 => Aes128CbcEnc::new_from_slices(key.as_bytes(), &iv)
            .map_err(|e| CryptoError::Encryption(e.to_string()))?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes()),
        Algorithm::Aes192 => Aes192CbcEnc::new_from_slices(key.as_bytes(), &iv)
            .map_err(|e| CryptoError::Encryption(e.to_string()))?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes()),
    };

    let mut payload = Vec::with_capacity(BLOCK_SIZE + body.len());
    payload.extend_from_slice(&iv);
    payload.extend_from_slice(&body);
    Ok(payload)
}

/// Decrypt an IV ‖ ciphertext payload back to text.
///
/// Fails uniformly with [`CryptoError::DecryptionFailed`] on truncated
/// payloads, padding mismatches, and invalid UTF-8; the detailed cause
/// is only emitted at debug level.
pub fn decrypt_text(payload: &[u8], key: &SymmetricKey) -> CryptoResult<String> {
    let algorithm = key.algorithm()?;

    if payload.len() < 2 * BLOCK_SIZE || (payload.len() - BLOCK_SIZE) % BLOCK_SIZE != 0 {
        tracing::debug!(len = payload.len(), "payload is not IV plus whole blocks");
        return Err(CryptoError::DecryptionFailed);
    }

    let (iv, body) = payload.split_at(BLOCK_SIZE);

    let unpadded = match algorithm {
        Algorithm::Aes128 => Aes128CbcDec::new_from_slices(key.as_bytes(), iv)
            .map_err(|_| CryptoError::DecryptionFailed)?
            .decrypt_padded_vec_mut::<Pkcs7>(body),
        Algorithm::Aes192 => Aes192CbcDec::new_from_slices(key.as_bytes(), iv)
            .map_err(|_| CryptoError::DecryptionFailed)?
            .decrypt_padded_vec_mut::<Pkcs7>(body),
    }
    .map_err(|e| {
        tracing::debug!(error = %e, "PKCS#7 unpadding failed");
        CryptoError::DecryptionFailed
    })?;

    String::from_utf8(unpadded).map_err(|e| {
        tracing::debug!(error = %e, "decrypted bytes are not valid UTF-8");
        CryptoError::DecryptionFailed
    })
}
