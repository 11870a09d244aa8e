//! Work-plan configuration.
//!
//! A work plan is a JSON file mapping logical artifact names to
//! filesystem paths. Subcommands look up the paths they need; the plan
//! never carries key material itself.
//!
//! ```json
//! {
//!   "symmetric_key": "keys/session.key",
//!   "public_key": "keys/public.pem",
//!   "secret_key": "keys/secret.pem",
//!   "encrypted_symmetric_key": "keys/session.key.wrapped",
//!   "decrypted_symmetric_key": "keys/session.key.recovered",
//!   "initial_file": "data/message.txt",
//!   "encrypted_file": "data/message.bin",
//!   "decrypted_file": "data/message.out.txt"
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Work-plan loading errors.
#[derive(Error, Debug)]
pub enum PlanError {
    /// The plan file could not be read.
    #[error("Failed to read work plan {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The plan file is not valid JSON or is missing required fields.
    #[error("Failed to parse work plan {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Logical-name-to-path mapping for one encryption workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkPlan {
    /// Raw symmetric session key.
    pub symmetric_key: PathBuf,
    /// RSA public key, PEM.
    pub public_key: PathBuf,
    /// RSA private key, PEM or locked container.
    pub secret_key: PathBuf,
    /// Session key wrapped under the public key.
    pub encrypted_symmetric_key: PathBuf,
    /// Session key recovered with the private key.
    pub decrypted_symmetric_key: PathBuf,
    /// Plaintext input.
    pub initial_file: PathBuf,
    /// IV-prefixed ciphertext.
    pub encrypted_file: PathBuf,
    /// Decrypted plaintext output.
    pub decrypted_file: PathBuf,
}

impl WorkPlan {
    /// Load a work plan from a JSON file.
    pub fn load(path: &Path) -> Result<Self, PlanError> {
        let json = std::fs::read_to_string(path).map_err(|source| PlanError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| PlanError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}
