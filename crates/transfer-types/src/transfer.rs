//! Transfer request, prepared transaction, and outcome types.
//!
//! These types model the lifecycle of a single native-currency transfer:
//! the raw user input, the fully-assembled transaction, and the terminal
//! result reported back to the submitter.

use alloy_primitives::{Address, TxKind, U256};
use alloy_rpc_types::TransactionRequest;
use serde::{Deserialize, Serialize};

use crate::{SigningKey, TransactionHash};

/// A single user-submitted transfer.
///
/// Constructed fresh per submission from the four input fields and never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferRequest {
	/// Private key used to derive the sender account and sign.
	pub signing_key: SigningKey,
	/// Amount to send, as a decimal string in whole native units.
	pub amount: String,
	/// Recipient address, as entered by the user.
	pub recipient: String,
	/// Name of the network to send on.
	pub network: String,
}

/// A fully-assembled native transfer ready for signing and submission.
///
/// Built once per request; only the gas limit may be adjusted afterwards,
/// by gas estimation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparedTransaction {
	/// Address derived from the signing key.
	pub sender: Address,
	/// Validated recipient address.
	pub recipient: Address,
	/// Transfer value in base units.
	pub value: U256,
	/// Gas price in wei.
	pub gas_price: u128,
	/// Gas limit for execution.
	pub gas_limit: u64,
	/// Sender nonce the transaction is bound to.
	pub nonce: u64,
	/// Chain id the transaction is bound to.
	pub chain_id: u64,
}

impl From<PreparedTransaction> for TransactionRequest {
	fn from(tx: PreparedTransaction) -> Self {
		TransactionRequest {
			from: Some(tx.sender),
			to: Some(TxKind::Call(tx.recipient)),
			value: Some(tx.value),
			gas_price: Some(tx.gas_price.into()),
			gas: Some(tx.gas_limit.into()),
			nonce: Some(tx.nonce),
			chain_id: Some(tx.chain_id),
			..Default::default()
		}
	}
}

/// Terminal result of one transfer submission.
///
/// Exactly one outcome is produced per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferOutcome {
	/// The transaction was submitted and included in a block.
	Success {
		/// Hash of the submitted transaction.
		tx_hash: TransactionHash,
		/// Block the transaction was included in.
		block_number: u64,
		/// Gas consumed executing the transaction.
		gas_used: u64,
		/// Execution status flag from the receipt.
		success: bool,
	},
	/// The submission failed at some step of the flow.
	Failure {
		/// User-facing classified message.
		message: String,
		/// Raw technical message for diagnosis.
		detail: String,
	},
}

impl TransferOutcome {
	/// Returns true for the `Success` variant.
	pub fn is_success(&self) -> bool {
		matches!(self, TransferOutcome::Success { .. })
	}
}
