//! # sealkit-cli
//!
//! Operator surface for the sealkit hybrid encryption toolkit.
//!
//! The binary is driven by a JSON work plan mapping logical names to
//! filesystem paths; every subcommand resolves its inputs and outputs
//! through the plan and a [`store::BlobStore`]. The crypto core never
//! touches the filesystem.

pub mod commands;
pub mod config;
pub mod store;
