//! Alloy-based EVM delivery implementation.
//!
//! This module provides the concrete implementation of the DeliveryInterface
//! trait, supporting transaction submission and receipt monitoring on
//! EVM-compatible blockchains using the Alloy library.

use crate::{DeliveryConnector, DeliveryError, DeliveryInterface, ReceiptPolicy};
use alloy_network::EthereumWallet;
use alloy_primitives::{Address, FixedBytes, U256};
use alloy_provider::{Provider, ProviderBuilder};
use alloy_rpc_types::TransactionRequest;
use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use alloy_transport_http::Http;
use async_trait::async_trait;
use std::sync::Arc;
use transfer_types::{
	with_0x_prefix, NetworkConfig, PreparedTransaction, SigningKey, TransactionHash,
	TransactionReceipt,
};

/// Alloy-based delivery provider bound to a single network.
///
/// The provider's wallet is filled from the submission's signing key, so
/// transactions sent through it are signed locally before broadcast.
pub struct AlloyDelivery {
	/// Wallet-filled provider for the bound network.
	provider: Arc<dyn Provider<Http<reqwest::Client>> + Send + Sync>,
	/// Receipt polling tuning.
	policy: ReceiptPolicy,
}

impl AlloyDelivery {
	/// Creates a new AlloyDelivery instance for one network.
	///
	/// Parses the RPC URL and signing key, binds the signer to the
	/// network's chain id, and builds an HTTP provider whose wallet signs
	/// submitted transactions.
	pub fn new(
		network: &NetworkConfig,
		signing_key: &SigningKey,
		policy: ReceiptPolicy,
	) -> Result<Self, DeliveryError> {
		let url = network.rpc_url.parse().map_err(|e| {
			DeliveryError::Network(format!("Invalid RPC URL '{}': {}", network.rpc_url, e))
		})?;

		let signer: PrivateKeySigner = signing_key.with_exposed(|key| {
			key.parse()
				.map_err(|_| DeliveryError::Network("wrong private key format".to_string()))
		})?;

		let chain_signer = signer.with_chain_id(Some(network.chain_id));
		let wallet = EthereumWallet::from(chain_signer);

		let provider = ProviderBuilder::new()
			.with_recommended_fillers()
			.wallet(wallet)
			.on_http(url);

		provider.client().set_poll_interval(policy.poll_interval);

		Ok(Self {
			provider: Arc::new(provider),
			policy,
		})
	}
}

#[async_trait]
impl DeliveryInterface for AlloyDelivery {
	async fn get_balance(&self, address: Address) -> Result<U256, DeliveryError> {
		self.provider
			.get_balance(address)
			.await
			.map_err(|e| DeliveryError::Network(format!("Failed to get balance: {}", e)))
	}

	async fn get_gas_price(&self) -> Result<u128, DeliveryError> {
		self.provider
			.get_gas_price()
			.await
			.map_err(|e| DeliveryError::Network(format!("Failed to get gas price: {}", e)))
	}

	async fn get_pending_nonce(&self, address: Address) -> Result<u64, DeliveryError> {
		self.provider
			.get_transaction_count(address)
			.pending()
			.await
			.map_err(|e| DeliveryError::Network(format!("Failed to get nonce: {}", e)))
	}

	async fn estimate_gas(&self, tx: &PreparedTransaction) -> Result<u64, DeliveryError> {
		let request: TransactionRequest = tx.clone().into();

		let estimate = self
			.provider
			.estimate_gas(&request)
			.await
			.map_err(|e| DeliveryError::Network(format!("Failed to estimate gas: {}", e)))?;

		Ok(estimate as u64)
	}

	async fn submit(&self, tx: PreparedTransaction) -> Result<TransactionHash, DeliveryError> {
		let chain_id = tx.chain_id;
		let request: TransactionRequest = tx.into();

		// The provider's wallet handles signing before broadcast
		let pending_tx = self
			.provider
			.send_transaction(request)
			.await
			.map_err(|e| DeliveryError::Network(format!("Failed to send transaction: {}", e)))?;

		let tx_hash = *pending_tx.tx_hash();
		let hash_str = with_0x_prefix(&hex::encode(tx_hash.0));
		tracing::info!(tx_hash = %hash_str, chain_id = chain_id, "Submitted transaction");

		Ok(TransactionHash(tx_hash.0.to_vec()))
	}

	async fn wait_for_receipt(
		&self,
		hash: &TransactionHash,
	) -> Result<TransactionReceipt, DeliveryError> {
		let tx_hash = FixedBytes::<32>::from_slice(&hash.0);
		let start_time = tokio::time::Instant::now();

		tracing::info!(
			"Waiting for transaction inclusion (timeout: {}s)",
			self.policy.timeout.as_secs()
		);

		loop {
			if start_time.elapsed() > self.policy.timeout {
				return Err(DeliveryError::TransactionFailed(format!(
					"Timeout waiting for receipt after {} seconds",
					self.policy.timeout.as_secs()
				)));
			}

			match self.provider.get_transaction_receipt(tx_hash).await {
				Ok(Some(receipt)) => {
					return Ok(TransactionReceipt {
						hash: TransactionHash(receipt.transaction_hash.0.to_vec()),
						block_number: receipt.block_number.unwrap_or(0),
						gas_used: receipt.gas_used as u64,
						success: receipt.status(),
					});
				}
				Ok(None) => {
					// Transaction not yet mined, wait and retry
					tracing::debug!("Transaction not yet mined, retrying");
					tokio::time::sleep(self.policy.poll_interval).await;
				}
				Err(e) => {
					return Err(DeliveryError::Network(format!(
						"Failed to get receipt: {}",
						e
					)));
				}
			}
		}
	}
}

/// Connector producing HTTP delivery providers.
///
/// Holds the receipt polling tuning loaded from configuration and builds
/// one AlloyDelivery per submission.
pub struct HttpConnector {
	policy: ReceiptPolicy,
}

impl HttpConnector {
	/// Creates a connector with the given receipt policy.
	pub fn new(policy: ReceiptPolicy) -> Self {
		Self { policy }
	}
}

impl DeliveryConnector for HttpConnector {
	fn connect(
		&self,
		network: &NetworkConfig,
		signing_key: &SigningKey,
	) -> Result<Box<dyn DeliveryInterface>, DeliveryError> {
		let delivery = AlloyDelivery::new(network, signing_key, self.policy)?;
		Ok(Box::new(delivery))
	}
}
