//! Transaction hash and receipt types.
//!
//! These mirror what delivery providers report back after a transaction is
//! submitted and included in a block.

use crate::utils::with_0x_prefix;

/// Blockchain transaction hash representation.
///
/// Stored as raw bytes; rendered as a 0x-prefixed hex string for display.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransactionHash(pub Vec<u8>);

impl TransactionHash {
	/// Renders the hash as a lowercase 0x-prefixed hex string.
	pub fn to_hex(&self) -> String {
		with_0x_prefix(&hex::encode(&self.0))
	}
}

/// Transaction receipt produced once the transaction is included in a block.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransactionReceipt {
	/// The hash of the transaction.
	pub hash: TransactionHash,
	/// The block number where the transaction was included.
	pub block_number: u64,
	/// Gas consumed executing the transaction.
	pub gas_used: u64,
	/// Whether the transaction executed successfully.
	pub success: bool,
}
