//! Session key wrapping under an RSA public key.
//!
//! Uses RSA-OAEP with SHA-256 as both the digest and the MGF1 mask
//! function, empty label. OAEP randomizes internally, so wrapping the
//! same key twice yields different blobs.
//!
//! Unwrap failures are normalized: a padding mismatch and a wrong key
//! produce the same [`CryptoError::Unwrap`], so the error surface cannot
//! be used as a padding oracle.

use rand::rngs::OsRng;
use rsa::Oaep;
use sha2::Sha256;

use crate::asymmetric::{PrivateKey, PublicKey};
use crate::error::{CryptoError, CryptoResult};
use crate::symmetric::SymmetricKey;

/// OAEP overhead for a SHA-256 digest: two hash blocks plus two bytes.
const OAEP_OVERHEAD: usize = 2 * 32 + 2;

/// Wrap a symmetric key under a public key.
///
/// Fails with [`CryptoError::Wrap`] if the key is too long for the
/// modulus (a 2048-bit modulus fits payloads up to 190 bytes, far above
/// any supported session key).
pub fn wrap_key(key: &SymmetricKey, public: &PublicKey) -> CryptoResult<Vec<u8>> {
    let max_payload = public.modulus_len().saturating_sub(OAEP_OVERHEAD);
    if key.len() > max_payload {
        return Err(CryptoError::Wrap(format!(
            "key of {} bytes exceeds OAEP payload limit of {} bytes",
            key.len(),
            max_payload
        )));
    }

    let mut rng = OsRng;
    public
        .inner()
        .encrypt(&mut rng, Oaep::new::<Sha256>(), key.as_bytes())
        .map_err(|e| CryptoError::Wrap(e.to_string()))
}

/// Unwrap a symmetric key under the matching private key.
///
/// All OAEP failures are reported uniformly as [`CryptoError::Unwrap`];
/// the detailed cause is only emitted at debug level.
pub fn unwrap_key(wrapped: &[u8], private: &PrivateKey) -> CryptoResult<SymmetricKey> {
    match private.inner().decrypt(Oaep::new::<Sha256>(), wrapped) {
        Ok(bytes) => Ok(SymmetricKey::from_bytes(bytes)),
        Err(e) => {
            tracing::debug!(error = %e, "OAEP unwrap failed");
            Err(CryptoError::Unwrap)
        }
    }
}
