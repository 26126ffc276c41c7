//! Core orchestration module for the transfer tool.
//!
//! This module drives a single native-currency transfer from raw user input
//! to a terminal outcome: validation, network resolution, account
//! derivation, balance check, transaction preparation, best-effort gas
//! estimation, submission, and result classification.

use thiserror::Error;
use transfer_account::AccountError;
use transfer_delivery::DeliveryError;

/// Error-to-message classification for terminal outcomes.
pub mod classify;
/// The sequential transfer flow.
pub mod orchestrator;
/// Output sink for rendered outcome reports.
pub mod presenter;

pub use classify::{classify, classify_raw_message};
pub use orchestrator::{TransferOrchestrator, DEFAULT_TRANSFER_GAS_LIMIT};
pub use presenter::{explorer_tx_url, render_outcome, ConsolePresenter, Presenter};

/// Errors that can occur during a transfer submission.
///
/// Every error is terminal for the submission that produced it; nothing is
/// retried.
#[derive(Debug, Error)]
pub enum TransferError {
	/// A request field failed validation before any work was performed.
	#[error("{0}")]
	Validation(String),
	/// The sender account holds no funds at all.
	#[error("Zero balance! Address {address} has 0 {symbol}. Get test ETH from: https://sepoliafaucet.com/")]
	ZeroBalance {
		/// The derived sender address.
		address: String,
		/// Native currency symbol of the selected network.
		symbol: String,
	},
	/// Account derivation or signing failed.
	#[error(transparent)]
	Account(#[from] AccountError),
	/// A chain-facing call failed.
	#[error(transparent)]
	Delivery(#[from] DeliveryError),
}
