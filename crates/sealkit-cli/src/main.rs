//! sealkit: hybrid encryption pipeline driven by a JSON work plan.
//!
//! Every subcommand takes `--plan <json>` naming the artifact paths and
//! performs one step of the pipeline: session-key generation, RSA key
//! pair generation, key wrapping and unwrapping, and bulk text
//! encryption and decryption.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sealkit_cli::commands;
use sealkit_cli::config::WorkPlan;
use sealkit_cli::store::FileStore;

#[derive(Parser)]
#[command(name = "sealkit")]
#[command(author, version, about = "Hybrid RSA + AES encryption toolkit")]
#[command(propagate_version = true)]
struct Cli {
    /// Path to the JSON work plan
    #[arg(short, long, global = true, default_value = "plan.json")]
    plan: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a symmetric session key
    GenSym {
        /// Key strength in bits (64, 128, or 192)
        #[arg(short, long, default_value_t = 128)]
        bits: u32,
    },

    /// Generate an RSA key pair
    GenAsym {
        /// Passphrase to lock the private key at rest (min 12 characters)
        #[arg(long)]
        passphrase: Option<String>,
    },

    /// Wrap the session key under the public key
    Wrap,

    /// Recover the session key with the private key
    Unwrap {
        /// Passphrase, required when the private key is locked
        #[arg(long)]
        passphrase: Option<String>,
    },

    /// Encrypt the initial file under the session key
    Encrypt,

    /// Decrypt the encrypted file back to text
    Decrypt,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let plan = WorkPlan::load(&cli.plan)?;
    let store = FileStore;

    let summary = match cli.command {
        Commands::GenSym { bits } => commands::gen_sym(&plan, &store, bits)?,
        Commands::GenAsym { passphrase } => {
            commands::gen_asym(&plan, &store, passphrase.as_deref())?
        }
        Commands::Wrap => commands::wrap(&plan, &store)?,
        Commands::Unwrap { passphrase } => {
            commands::unwrap(&plan, &store, passphrase.as_deref())?
        }
        Commands::Encrypt => commands::encrypt(&plan, &store)?,
        Commands::Decrypt => commands::decrypt(&plan, &store)?,
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
