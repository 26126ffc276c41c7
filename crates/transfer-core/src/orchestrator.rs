//! The sequential transfer flow.
//!
//! `TransferOrchestrator` owns the whole lifecycle of one submission. Its
//! dependencies are injected: the network registry, the account factory,
//! the delivery connector, and the presenter sink, so the flow is testable
//! without a node.

use alloy_primitives::{Address, U256};
use transfer_account::{AccountFactory, AccountService};
use transfer_delivery::DeliveryConnector;
use transfer_types::{
	format_native_amount, parse_native_amount, truncate_id, NetworkConfig, NetworksConfig,
	PreparedTransaction, TransactionReceipt, TransferOutcome, TransferRequest,
};

use crate::classify::classify;
use crate::presenter::Presenter;
use crate::TransferError;

/// Standard gas limit for a native transfer, used until estimation
/// replaces it.
pub const DEFAULT_TRANSFER_GAS_LIMIT: u64 = 21_000;

/// Drives a single transfer from raw input to a terminal outcome.
pub struct TransferOrchestrator {
	/// Network registry keyed by network name.
	networks: NetworksConfig,
	/// Derives the sending account from the request's signing key.
	account_factory: AccountFactory,
	/// Builds a delivery provider bound to the resolved network.
	connector: Box<dyn DeliveryConnector>,
	/// Receives the terminal outcome, exactly once per submission.
	presenter: Box<dyn Presenter>,
}

impl TransferOrchestrator {
	/// Creates an orchestrator with the given dependencies.
	pub fn new(
		networks: NetworksConfig,
		account_factory: AccountFactory,
		connector: Box<dyn DeliveryConnector>,
		presenter: Box<dyn Presenter>,
	) -> Self {
		Self {
			networks,
			account_factory,
			connector,
			presenter,
		}
	}

	/// Submits one transfer and returns its terminal outcome.
	///
	/// Runs the flow to completion, classifies any error into a
	/// user-facing message, and hands the outcome to the presenter. Every
	/// invocation produces exactly one outcome.
	pub async fn submit_transfer(&self, request: &TransferRequest) -> TransferOutcome {
		let outcome = match self.run(request).await {
			Ok(receipt) => TransferOutcome::Success {
				tx_hash: receipt.hash,
				block_number: receipt.block_number,
				gas_used: receipt.gas_used,
				success: receipt.success,
			},
			Err(error) => {
				tracing::error!("Transfer failed: {}", error);
				let (message, detail) = classify(&error);
				TransferOutcome::Failure { message, detail }
			}
		};

		self.presenter
			.present(&outcome, self.networks.get(&request.network));
		outcome
	}

	/// The linear flow: every step either proceeds or fails the whole
	/// submission.
	async fn run(&self, request: &TransferRequest) -> Result<TransactionReceipt, TransferError> {
		let (network, recipient, value) = self.validate(request)?;

		let account = AccountService::new((self.account_factory)(&request.signing_key)?);
		let sender = account.get_address().await?;
		tracing::info!(
			sender = %sender,
			recipient = %recipient,
			amount = %request.amount,
			symbol = %network.symbol,
			"Submitting transfer"
		);

		let delivery = self.connector.connect(network, &account.signing_key())?;

		let balance = delivery.get_balance(sender).await?;
		tracing::info!(
			balance = %format_native_amount(balance),
			symbol = %network.symbol,
			"Fetched sender balance"
		);
		if balance.is_zero() {
			return Err(TransferError::ZeroBalance {
				address: sender.to_string(),
				symbol: network.symbol.clone(),
			});
		}

		let gas_price = delivery.get_gas_price().await?;
		let nonce = delivery.get_pending_nonce(sender).await?;
		let mut tx = PreparedTransaction {
			sender,
			recipient,
			value,
			gas_price,
			gas_limit: DEFAULT_TRANSFER_GAS_LIMIT,
			nonce,
			chain_id: network.chain_id,
		};
		tracing::debug!(?tx, "Prepared transaction");

		// Best-effort: estimation failure keeps the default limit
		match delivery.estimate_gas(&tx).await {
			Ok(estimate) => tx.gas_limit = estimate,
			Err(error) => {
				tracing::warn!(
					gas_limit = tx.gas_limit,
					"Gas estimation failed, keeping default limit: {}",
					error
				);
			}
		}

		let hash = delivery.submit(tx).await?;
		tracing::info!(tx_hash = %truncate_id(&hash.to_hex()), "Waiting for inclusion");
		let receipt = delivery.wait_for_receipt(&hash).await?;
		tracing::info!(
			block_number = receipt.block_number,
			gas_used = receipt.gas_used,
			success = receipt.success,
			"Transaction included"
		);

		Ok(receipt)
	}

	/// Validates the request fields before any connection is opened.
	fn validate(
		&self,
		request: &TransferRequest,
	) -> Result<(&NetworkConfig, Address, U256), TransferError> {
		if request.signing_key.is_empty() {
			return Err(TransferError::Validation(
				"Private key is required".to_string(),
			));
		}

		let value = parse_native_amount(&request.amount).map_err(|_| {
			TransferError::Validation("Amount must be a positive number".to_string())
		})?;

		if request.recipient.trim().is_empty() {
			return Err(TransferError::Validation(
				"Recipient address is required".to_string(),
			));
		}
		let recipient: Address = request
			.recipient
			.trim()
			.parse()
			.map_err(|_| TransferError::Validation("Invalid recipient address".to_string()))?;

		let network = self.networks.get(&request.network).ok_or_else(|| {
			let mut known: Vec<&str> = self.networks.keys().map(String::as_str).collect();
			known.sort_unstable();
			TransferError::Validation(format!(
				"Unknown network '{}' (known networks: {})",
				request.network,
				known.join(", ")
			))
		})?;

		Ok((network, recipient, value))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use async_trait::async_trait;
	use std::sync::{Arc, Mutex};
	use transfer_account::implementations::local::create_account;
	use transfer_delivery::{DeliveryError, DeliveryInterface};
	use transfer_types::{SigningKey, TransactionHash};

	// Well-known development key (hardhat/anvil account 0) and its address.
	const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
	const DEV_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
	const RECIPIENT: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";

	#[derive(Default)]
	struct DeliveryState {
		calls: Vec<String>,
		connects: usize,
		balance: U256,
		estimate_fails: bool,
		submit_error: Option<String>,
		submitted: Option<PreparedTransaction>,
	}

	/// Mock delivery provider recording the order of chain-facing calls.
	#[derive(Clone, Default)]
	struct RecordingDelivery {
		state: Arc<Mutex<DeliveryState>>,
	}

	impl RecordingDelivery {
		fn with_balance(balance: U256) -> Self {
			let delivery = Self::default();
			delivery.state.lock().unwrap().balance = balance;
			delivery
		}

		fn funded() -> Self {
			Self::with_balance(U256::from(10_000_000_000_000_000_000u128))
		}

		fn calls(&self) -> Vec<String> {
			self.state.lock().unwrap().calls.clone()
		}

		fn connects(&self) -> usize {
			self.state.lock().unwrap().connects
		}

		fn submitted(&self) -> Option<PreparedTransaction> {
			self.state.lock().unwrap().submitted.clone()
		}

		fn record(&self, call: &str) {
			self.state.lock().unwrap().calls.push(call.to_string());
		}
	}

	#[async_trait]
	impl DeliveryInterface for RecordingDelivery {
		async fn get_balance(&self, _address: Address) -> Result<U256, DeliveryError> {
			self.record("get_balance");
			Ok(self.state.lock().unwrap().balance)
		}

		async fn get_gas_price(&self) -> Result<u128, DeliveryError> {
			self.record("get_gas_price");
			Ok(2_000_000_000)
		}

		async fn get_pending_nonce(&self, _address: Address) -> Result<u64, DeliveryError> {
			self.record("get_pending_nonce");
			Ok(7)
		}

		async fn estimate_gas(&self, _tx: &PreparedTransaction) -> Result<u64, DeliveryError> {
			self.record("estimate_gas");
			if self.state.lock().unwrap().estimate_fails {
				Err(DeliveryError::Network(
					"Failed to estimate gas: execution reverted".to_string(),
				))
			} else {
				Ok(21_500)
			}
		}

		async fn submit(&self, tx: PreparedTransaction) -> Result<TransactionHash, DeliveryError> {
			self.record("submit");
			let mut state = self.state.lock().unwrap();
			if let Some(message) = state.submit_error.clone() {
				return Err(DeliveryError::Network(message));
			}
			state.submitted = Some(tx);
			Ok(TransactionHash(vec![0x11; 32]))
		}

		async fn wait_for_receipt(
			&self,
			hash: &TransactionHash,
		) -> Result<TransactionReceipt, DeliveryError> {
			self.record("wait_for_receipt");
			Ok(TransactionReceipt {
				hash: hash.clone(),
				block_number: 1234,
				gas_used: 21_000,
				success: true,
			})
		}
	}

	impl DeliveryConnector for RecordingDelivery {
		fn connect(
			&self,
			_network: &NetworkConfig,
			_signing_key: &SigningKey,
		) -> Result<Box<dyn DeliveryInterface>, DeliveryError> {
			self.state.lock().unwrap().connects += 1;
			Ok(Box::new(self.clone()))
		}
	}

	/// Presenter counting how many times it fires.
	#[derive(Clone, Default)]
	struct RecordingPresenter {
		presented: Arc<Mutex<usize>>,
	}

	impl RecordingPresenter {
		fn count(&self) -> usize {
			*self.presented.lock().unwrap()
		}
	}

	impl Presenter for RecordingPresenter {
		fn present(&self, _outcome: &TransferOutcome, _network: Option<&NetworkConfig>) {
			*self.presented.lock().unwrap() += 1;
		}
	}

	fn test_networks() -> NetworksConfig {
		let mut networks = NetworksConfig::new();
		networks.insert(
			"sepolia".to_string(),
			NetworkConfig {
				rpc_url: "http://localhost:8545".to_string(),
				symbol: "ETH".to_string(),
				chain_id: 11155111,
				explorer_url: "https://sepolia.etherscan.io".to_string(),
			},
		);
		networks.insert(
			"ethereum".to_string(),
			NetworkConfig {
				rpc_url: "http://localhost:8546".to_string(),
				symbol: "ETH".to_string(),
				chain_id: 1,
				explorer_url: "https://etherscan.io".to_string(),
			},
		);
		networks
	}

	fn orchestrator(
		delivery: &RecordingDelivery,
		presenter: &RecordingPresenter,
	) -> TransferOrchestrator {
		TransferOrchestrator::new(
			test_networks(),
			create_account,
			Box::new(delivery.clone()),
			Box::new(presenter.clone()),
		)
	}

	fn request(key: &str, amount: &str, recipient: &str, network: &str) -> TransferRequest {
		TransferRequest {
			signing_key: SigningKey::from(key),
			amount: amount.to_string(),
			recipient: recipient.to_string(),
			network: network.to_string(),
		}
	}

	fn failure_message(outcome: &TransferOutcome) -> &str {
		match outcome {
			TransferOutcome::Failure { message, .. } => message,
			TransferOutcome::Success { .. } => panic!("expected failure, got success"),
		}
	}

	#[tokio::test]
	async fn empty_key_fails_without_touching_the_network() {
		let delivery = RecordingDelivery::funded();
		let presenter = RecordingPresenter::default();
		let orchestrator = orchestrator(&delivery, &presenter);

		let outcome = orchestrator
			.submit_transfer(&request("", "1.5", RECIPIENT, "sepolia"))
			.await;

		assert_eq!(failure_message(&outcome), "Private key is required");
		assert_eq!(delivery.connects(), 0);
		assert!(delivery.calls().is_empty());
	}

	#[tokio::test]
	async fn bad_amounts_fail_without_touching_the_network() {
		for amount in ["0", "-1", "abc", ""] {
			let delivery = RecordingDelivery::funded();
			let presenter = RecordingPresenter::default();
			let orchestrator = orchestrator(&delivery, &presenter);

			let outcome = orchestrator
				.submit_transfer(&request(DEV_KEY, amount, RECIPIENT, "sepolia"))
				.await;

			assert_eq!(
				failure_message(&outcome),
				"Amount must be a positive number",
				"amount {:?} should be rejected",
				amount
			);
			assert_eq!(delivery.connects(), 0);
		}
	}

	#[tokio::test]
	async fn bad_recipients_fail_without_touching_the_network() {
		let delivery = RecordingDelivery::funded();
		let presenter = RecordingPresenter::default();
		let orchestrator = orchestrator(&delivery, &presenter);

		let outcome = orchestrator
			.submit_transfer(&request(DEV_KEY, "1.5", "", "sepolia"))
			.await;
		assert_eq!(failure_message(&outcome), "Recipient address is required");

		let outcome = orchestrator
			.submit_transfer(&request(DEV_KEY, "1.5", "0x1234", "sepolia"))
			.await;
		assert_eq!(failure_message(&outcome), "Invalid recipient address");

		assert_eq!(delivery.connects(), 0);
		assert!(delivery.calls().is_empty());
	}

	#[tokio::test]
	async fn unknown_network_is_a_validation_failure() {
		let delivery = RecordingDelivery::funded();
		let presenter = RecordingPresenter::default();
		let orchestrator = orchestrator(&delivery, &presenter);

		let outcome = orchestrator
			.submit_transfer(&request(DEV_KEY, "1.5", RECIPIENT, "goerli"))
			.await;

		let message = failure_message(&outcome);
		assert!(message.contains("Unknown network 'goerli'"));
		assert!(message.contains("ethereum, sepolia"));
		assert_eq!(delivery.connects(), 0);
	}

	#[tokio::test]
	async fn malformed_key_is_classified_as_invalid_key() {
		let delivery = RecordingDelivery::funded();
		let presenter = RecordingPresenter::default();
		let orchestrator = orchestrator(&delivery, &presenter);

		let outcome = orchestrator
			.submit_transfer(&request("not-a-key", "1.5", RECIPIENT, "sepolia"))
			.await;

		assert_eq!(failure_message(&outcome), "Invalid private key format");
		assert_eq!(delivery.connects(), 0);
	}

	#[tokio::test]
	async fn zero_balance_short_circuits_before_preparation() {
		let delivery = RecordingDelivery::with_balance(U256::ZERO);
		let presenter = RecordingPresenter::default();
		let orchestrator = orchestrator(&delivery, &presenter);

		let outcome = orchestrator
			.submit_transfer(&request(DEV_KEY, "1.5", RECIPIENT, "sepolia"))
			.await;

		let message = failure_message(&outcome);
		assert!(message.contains("Zero balance!"));
		assert!(message.contains(DEV_ADDRESS));
		assert_eq!(delivery.calls(), vec!["get_balance"]);
		assert_eq!(presenter.count(), 1);
	}

	#[tokio::test]
	async fn happy_path_prepares_and_submits_one_transaction() {
		let delivery = RecordingDelivery::funded();
		let presenter = RecordingPresenter::default();
		let orchestrator = orchestrator(&delivery, &presenter);

		let outcome = orchestrator
			.submit_transfer(&request(DEV_KEY, "1.5", RECIPIENT, "sepolia"))
			.await;

		let tx = delivery.submitted().expect("one transaction submitted");
		assert_eq!(tx.sender, DEV_ADDRESS.parse::<Address>().unwrap());
		assert_eq!(tx.recipient, RECIPIENT.parse::<Address>().unwrap());
		assert_eq!(tx.value, U256::from(1_500_000_000_000_000_000u64));
		assert_eq!(tx.gas_price, 2_000_000_000);
		assert_eq!(tx.gas_limit, 21_500);
		assert_eq!(tx.nonce, 7);
		assert_eq!(tx.chain_id, 11155111);

		assert_eq!(
			delivery.calls(),
			vec![
				"get_balance",
				"get_gas_price",
				"get_pending_nonce",
				"estimate_gas",
				"submit",
				"wait_for_receipt"
			]
		);

		match outcome {
			TransferOutcome::Success {
				block_number,
				gas_used,
				success,
				..
			} => {
				assert_eq!(block_number, 1234);
				assert_eq!(gas_used, 21_000);
				assert!(success);
			}
			TransferOutcome::Failure { message, .. } => panic!("unexpected failure: {}", message),
		}
		assert_eq!(presenter.count(), 1);
	}

	#[tokio::test]
	async fn estimation_failure_keeps_the_default_gas_limit() {
		let delivery = RecordingDelivery::funded();
		delivery.state.lock().unwrap().estimate_fails = true;
		let presenter = RecordingPresenter::default();
		let orchestrator = orchestrator(&delivery, &presenter);

		let outcome = orchestrator
			.submit_transfer(&request(DEV_KEY, "1.5", RECIPIENT, "sepolia"))
			.await;

		assert!(outcome.is_success());
		let tx = delivery.submitted().expect("submission still proceeds");
		assert_eq!(tx.gas_limit, DEFAULT_TRANSFER_GAS_LIMIT);
	}

	#[tokio::test]
	async fn submit_error_is_classified_for_the_user() {
		let delivery = RecordingDelivery::funded();
		delivery.state.lock().unwrap().submit_error = Some(
			"Failed to send transaction: insufficient funds for gas * price + value".to_string(),
		);
		let presenter = RecordingPresenter::default();
		let orchestrator = orchestrator(&delivery, &presenter);

		let outcome = orchestrator
			.submit_transfer(&request(DEV_KEY, "1.5", RECIPIENT, "sepolia"))
			.await;

		match &outcome {
			TransferOutcome::Failure { message, detail } => {
				assert_eq!(message, "Insufficient balance for transaction");
				assert!(detail.contains("insufficient funds for gas"));
			}
			TransferOutcome::Success { .. } => panic!("expected failure"),
		}
		assert_eq!(presenter.count(), 1);
	}

	#[tokio::test]
	async fn presenter_fires_once_per_submission() {
		let delivery = RecordingDelivery::funded();
		let presenter = RecordingPresenter::default();
		let orchestrator = orchestrator(&delivery, &presenter);

		orchestrator
			.submit_transfer(&request(DEV_KEY, "1.5", RECIPIENT, "sepolia"))
			.await;
		assert_eq!(presenter.count(), 1);

		orchestrator
			.submit_transfer(&request("", "1.5", RECIPIENT, "sepolia"))
			.await;
		assert_eq!(presenter.count(), 2);
	}
}
