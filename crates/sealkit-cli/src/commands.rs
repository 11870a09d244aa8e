//! Subcommand implementations.
//!
//! Each command resolves its input and output paths through the work
//! plan, performs one pipeline step via `sealkit-crypto`, and returns a
//! JSON summary for the caller to print. Commands never print
//! themselves.

use anyhow::{bail, Context};
use serde_json::{json, Value};

use sealkit_crypto::{
    decrypt_text, encrypt_text, is_locked_key, lock_private_key, unlock_private_key, unwrap_key,
    wrap_key, Keypair, PrivateKey, PublicKey, SymmetricKey,
};

use crate::config::WorkPlan;
use crate::store::BlobStore;

/// Generate a symmetric session key and store it at `symmetric_key`.
pub fn gen_sym(plan: &WorkPlan, store: &impl BlobStore, bits: u32) -> anyhow::Result<Value> {
    let key = SymmetricKey::generate(bits)?;
    store.write_bytes(&plan.symmetric_key, key.as_bytes())?;

    tracing::info!(bits, path = %plan.symmetric_key.display(), "symmetric key written");

    Ok(json!({
        "operation": "gen-sym",
        "bits": bits,
        "key_bytes": key.len(),
        "symmetric_key": plan.symmetric_key.display().to_string(),
    }))
}

/// Generate an RSA key pair and store both halves.
///
/// With a passphrase the private key is written as a locked container;
/// without one it is written as plaintext PEM.
pub fn gen_asym(
    plan: &WorkPlan,
    store: &impl BlobStore,
    passphrase: Option<&str>,
) -> anyhow::Result<Value> {
    let keypair = Keypair::generate()?;

    store.write_text(&plan.public_key, &keypair.public.to_pem()?)?;

    let locked = match passphrase {
        Some(passphrase) => {
            let blob = lock_private_key(&keypair.private, passphrase)?;
            store.write_bytes(&plan.secret_key, &blob)?;
            true
        }
        None => {
            store.write_text(&plan.secret_key, &keypair.private.to_pem()?)?;
            false
        }
    };

    tracing::info!(locked, path = %plan.secret_key.display(), "key pair written");

    Ok(json!({
        "operation": "gen-asym",
        "modulus_bits": keypair.public.modulus_len() * 8,
        "public_key": plan.public_key.display().to_string(),
        "secret_key": plan.secret_key.display().to_string(),
        "secret_key_locked": locked,
    }))
}

/// Wrap the session key under the public key.
pub fn wrap(plan: &WorkPlan, store: &impl BlobStore) -> anyhow::Result<Value> {
    let key = SymmetricKey::from_bytes(store.read_bytes(&plan.symmetric_key)?);
    let public = PublicKey::from_pem(&store.read_text(&plan.public_key)?)?;

    let wrapped = wrap_key(&key, &public)?;
    store.write_bytes(&plan.encrypted_symmetric_key, &wrapped)?;

    Ok(json!({
        "operation": "wrap",
        "wrapped_bytes": wrapped.len(),
        "encrypted_symmetric_key": plan.encrypted_symmetric_key.display().to_string(),
    }))
}

/// Recover the session key with the private key.
///
/// Detects the locked container by its magic bytes and requires a
/// passphrase for it; a plaintext PEM key must not be given one.
pub fn unwrap(
    plan: &WorkPlan,
    store: &impl BlobStore,
    passphrase: Option<&str>,
) -> anyhow::Result<Value> {
    let secret_blob = store.read_bytes(&plan.secret_key)?;

    let private = if is_locked_key(&secret_blob) {
        let Some(passphrase) = passphrase else {
            bail!(
                "Private key at {} is passphrase-locked; pass --passphrase",
                plan.secret_key.display()
            );
        };
        unlock_private_key(&secret_blob, passphrase)?
    } else {
        let pem = String::from_utf8(secret_blob)
            .with_context(|| format!("Private key at {} is not PEM", plan.secret_key.display()))?;
        PrivateKey::from_pem(&pem)?
    };

    let wrapped = store.read_bytes(&plan.encrypted_symmetric_key)?;
    let recovered = unwrap_key(&wrapped, &private)?;
    store.write_bytes(&plan.decrypted_symmetric_key, recovered.as_bytes())?;

    Ok(json!({
        "operation": "unwrap",
        "key_bytes": recovered.len(),
        "decrypted_symmetric_key": plan.decrypted_symmetric_key.display().to_string(),
    }))
}

/// Encrypt the initial file under the session key.
pub fn encrypt(plan: &WorkPlan, store: &impl BlobStore) -> anyhow::Result<Value> {
    let key = SymmetricKey::from_bytes(store.read_bytes(&plan.symmetric_key)?);
    let plaintext = store.read_text(&plan.initial_file)?;

    let payload = encrypt_text(&plaintext, &key)?;
    store.write_bytes(&plan.encrypted_file, &payload)?;

    Ok(json!({
        "operation": "encrypt",
        "algorithm": key.algorithm()?.to_string(),
        "plaintext_bytes": plaintext.len(),
        "payload_bytes": payload.len(),
        "encrypted_file": plan.encrypted_file.display().to_string(),
    }))
}

/// Decrypt the encrypted file back to text.
pub fn decrypt(plan: &WorkPlan, store: &impl BlobStore) -> anyhow::Result<Value> {
    let key = SymmetricKey::from_bytes(store.read_bytes(&plan.symmetric_key)?);
    let payload = store.read_bytes(&plan.encrypted_file)?;

    let plaintext = decrypt_text(&payload, &key)?;
    store.write_text(&plan.decrypted_file, &plaintext)?;

    Ok(json!({
        "operation": "decrypt",
        "payload_bytes": payload.len(),
        "plaintext_bytes": plaintext.len(),
        "decrypted_file": plan.decrypted_file.display().to_string(),
    }))
}
