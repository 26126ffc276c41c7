//! Common types for the transfer tool.
//!
//! This crate defines the data types shared across the transfer workspace:
//! network configuration, the transfer request/outcome pair, transaction
//! hashes and receipts, and the secret wrapper for signing keys.

/// Transaction hash and receipt types returned by delivery providers.
pub mod delivery;
/// Network registry configuration types.
pub mod networks;
/// Secret wrapper for private signing keys.
pub mod signing_key;
/// Transfer request, prepared transaction, and outcome types.
pub mod transfer;
/// Utility functions for amount and hex-string handling.
pub mod utils;

// Re-export all types for convenient access
pub use delivery::{TransactionHash, TransactionReceipt};
pub use networks::{NetworkConfig, NetworksConfig};
pub use signing_key::SigningKey;
pub use transfer::{PreparedTransaction, TransferOutcome, TransferRequest};
pub use utils::{
	format_native_amount, parse_native_amount, truncate_id, with_0x_prefix, without_0x_prefix,
	AmountError,
};
