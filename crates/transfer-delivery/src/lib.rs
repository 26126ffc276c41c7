//! Transaction delivery module for the transfer tool.
//!
//! This module handles the chain-facing half of a transfer: account state
//! queries, gas estimation, transaction submission, and receipt polling.
//! It provides the interface delivery providers implement and the connector
//! abstraction that binds a provider to one network per submission.

use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use transfer_types::{
	NetworkConfig, PreparedTransaction, SigningKey, TransactionHash, TransactionReceipt,
};

/// Re-export implementations
pub mod implementations {
	pub mod evm {
		pub mod alloy;
	}
}

/// Errors that can occur during transaction delivery operations.
#[derive(Debug, Error)]
pub enum DeliveryError {
	/// Error that occurs during network communication.
	#[error("Network error: {0}")]
	Network(String),
	/// Error that occurs when a transaction fails to complete.
	#[error("Transaction failed: {0}")]
	TransactionFailed(String),
}

/// Trait defining the interface for transaction delivery providers.
///
/// A delivery provider is bound to a single network for the lifetime of one
/// submission. Methods are invoked strictly sequentially by the
/// orchestration layer; no two calls are ever in flight concurrently.
#[async_trait]
pub trait DeliveryInterface: Send + Sync {
	/// Gets the native balance for an address, in base units.
	async fn get_balance(&self, address: Address) -> Result<U256, DeliveryError>;

	/// Gets the current gas price for the network, in wei.
	async fn get_gas_price(&self) -> Result<u128, DeliveryError>;

	/// Gets the next nonce for an address, counting pending transactions.
	async fn get_pending_nonce(&self, address: Address) -> Result<u64, DeliveryError>;

	/// Estimates the gas needed to execute the prepared transaction.
	async fn estimate_gas(&self, tx: &PreparedTransaction) -> Result<u64, DeliveryError>;

	/// Signs and submits the prepared transaction.
	///
	/// Returns the transaction hash once the node has accepted the
	/// submission.
	async fn submit(&self, tx: PreparedTransaction) -> Result<TransactionHash, DeliveryError>;

	/// Waits for the submitted transaction to be included in a block.
	///
	/// Polls for the receipt until it is available or the configured
	/// timeout elapses.
	async fn wait_for_receipt(
		&self,
		hash: &TransactionHash,
	) -> Result<TransactionReceipt, DeliveryError>;
}

/// Connects delivery providers to networks.
///
/// Each transfer touches exactly one network, so the connector produces a
/// fresh provider bound to that network and signing key per submission.
pub trait DeliveryConnector: Send + Sync {
	/// Builds a delivery provider for the given network and signing key.
	fn connect(
		&self,
		network: &NetworkConfig,
		signing_key: &SigningKey,
	) -> Result<Box<dyn DeliveryInterface>, DeliveryError>;
}

/// Receipt polling tuning for delivery providers.
#[derive(Debug, Clone, Copy)]
pub struct ReceiptPolicy {
	/// Maximum time to wait for a receipt.
	pub timeout: Duration,
	/// Interval between receipt polls.
	pub poll_interval: Duration,
}

impl Default for ReceiptPolicy {
	fn default() -> Self {
		Self {
			timeout: Duration::from_secs(180),
			poll_interval: Duration::from_secs(3),
		}
	}
}
