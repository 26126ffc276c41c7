//! Output sink for rendered outcome reports.
//!
//! The presenter is the single place a submission's terminal state is
//! written to. Rendering is split out as plain functions so the report
//! content can be asserted without capturing output.

use transfer_types::{NetworkConfig, TransferOutcome};

/// Sink that receives the terminal outcome of one submission.
///
/// Invoked exactly once per submission, with the network the request
/// resolved to (absent when resolution itself failed).
pub trait Presenter: Send + Sync {
	/// Renders the outcome to the user.
	fn present(&self, outcome: &TransferOutcome, network: Option<&NetworkConfig>);
}

/// Builds the block-explorer link for a transaction on the given network.
pub fn explorer_tx_url(network: &NetworkConfig, tx_hash_hex: &str) -> String {
	format!(
		"{}/tx/{}",
		network.explorer_url.trim_end_matches('/'),
		tx_hash_hex
	)
}

/// Renders an outcome into the report shown to the user.
pub fn render_outcome(outcome: &TransferOutcome, network: Option<&NetworkConfig>) -> String {
	match outcome {
		TransferOutcome::Success {
			tx_hash,
			block_number,
			gas_used,
			success,
		} => {
			let status = if *success { "Success" } else { "Failed" };
			let mut report = format!(
				"Transaction confirmed!\n\
				Transaction Hash: {}\n\
				Block Number: {}\n\
				Gas Used: {}\n\
				Status: {}",
				tx_hash.to_hex(),
				block_number,
				gas_used,
				status
			);
			if let Some(network) = network {
				report.push_str(&format!(
					"\nView on Explorer: {}",
					explorer_tx_url(network, &tx_hash.to_hex())
				));
			}
			report
		}
		TransferOutcome::Failure { message, detail } => format!(
			"Transaction failed\n\
			Error: {}\n\
			Please check your inputs and try again.\n\
			Technical details: {}",
			message, detail
		),
	}
}

/// Presenter that writes the report to standard output.
pub struct ConsolePresenter;

impl Presenter for ConsolePresenter {
	fn present(&self, outcome: &TransferOutcome, network: Option<&NetworkConfig>) {
		println!("{}", render_outcome(outcome, network));
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use transfer_types::TransactionHash;

	fn network(explorer_url: &str, chain_id: u64) -> NetworkConfig {
		NetworkConfig {
			rpc_url: "http://localhost:8545".to_string(),
			symbol: "ETH".to_string(),
			chain_id,
			explorer_url: explorer_url.to_string(),
		}
	}

	fn success() -> TransferOutcome {
		TransferOutcome::Success {
			tx_hash: TransactionHash(vec![0xab; 32]),
			block_number: 1234,
			gas_used: 21_000,
			success: true,
		}
	}

	#[test]
	fn sepolia_explorer_link_prefix() {
		let network = network("https://sepolia.etherscan.io", 11155111);
		let report = render_outcome(&success(), Some(&network));
		assert!(report.contains("https://sepolia.etherscan.io/tx/0xab"));
	}

	#[test]
	fn mainnet_explorer_link_prefix() {
		let network = network("https://etherscan.io", 1);
		let report = render_outcome(&success(), Some(&network));
		assert!(report.contains("https://etherscan.io/tx/0xab"));
	}

	#[test]
	fn reverted_transaction_renders_failed_status() {
		let outcome = TransferOutcome::Success {
			tx_hash: TransactionHash(vec![0xab; 32]),
			block_number: 1234,
			gas_used: 21_000,
			success: false,
		};
		let report = render_outcome(&outcome, None);
		assert!(report.contains("Status: Failed"));
	}

	#[test]
	fn failure_report_carries_both_messages() {
		let outcome = TransferOutcome::Failure {
			message: "Insufficient balance for transaction".to_string(),
			detail: "Network error: insufficient funds for gas".to_string(),
		};
		let report = render_outcome(&outcome, None);
		assert!(report.contains("Error: Insufficient balance for transaction"));
		assert!(report.contains("Technical details: Network error: insufficient funds for gas"));
	}
}
