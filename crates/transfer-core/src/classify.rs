//! Error-to-message classification.
//!
//! Maps terminal transfer errors to the user-facing message shown in the
//! outcome report. Structured error kinds are classified directly;
//! substring matching is kept only as a fallback adapter for untyped
//! upstream RPC errors, isolated here.

use crate::TransferError;
use transfer_account::AccountError;

/// Classifies a terminal error into a (message, detail) pair.
///
/// The message is user-facing; the detail is the raw technical text kept
/// for diagnosis.
pub fn classify(error: &TransferError) -> (String, String) {
	let detail = error.to_string();
	let message = match error {
		TransferError::Validation(message) => message.clone(),
		TransferError::ZeroBalance { .. } => detail.clone(),
		TransferError::Account(AccountError::InvalidKey(_)) => {
			"Invalid private key format".to_string()
		}
		TransferError::Account(_) => detail.clone(),
		TransferError::Delivery(_) => classify_raw_message(&detail),
	};
	(message, detail)
}

/// Pattern-matches an untyped upstream error message.
///
/// Node errors arrive as plain text; the known patterns are rewritten into
/// guidance, anything else passes through unchanged.
pub fn classify_raw_message(raw: &str) -> String {
	if raw.contains("insufficient funds") {
		"Insufficient balance for transaction".to_string()
	} else if raw.contains("wrong private key") {
		"Invalid private key format".to_string()
	} else if raw.contains("nonce too low") {
		"Transaction nonce error - try again".to_string()
	} else {
		raw.to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use transfer_delivery::DeliveryError;

	#[test]
	fn classifies_insufficient_funds() {
		assert_eq!(
			classify_raw_message("insufficient funds for gas * price + value"),
			"Insufficient balance for transaction"
		);
	}

	#[test]
	fn classifies_nonce_too_low() {
		assert_eq!(
			classify_raw_message("nonce too low: next nonce 8, tx nonce 7"),
			"Transaction nonce error - try again"
		);
	}

	#[test]
	fn classifies_wrong_private_key() {
		assert_eq!(
			classify_raw_message("wrong private key format"),
			"Invalid private key format"
		);
	}

	#[test]
	fn unrecognized_messages_pass_through() {
		assert_eq!(
			classify_raw_message("execution reverted"),
			"execution reverted"
		);
	}

	#[test]
	fn validation_errors_keep_their_message() {
		let error = TransferError::Validation("Amount must be a positive number".to_string());
		let (message, detail) = classify(&error);
		assert_eq!(message, "Amount must be a positive number");
		assert_eq!(detail, "Amount must be a positive number");
	}

	#[test]
	fn invalid_key_is_classified_without_string_matching() {
		let error = TransferError::Account(AccountError::InvalidKey("bad length".to_string()));
		let (message, detail) = classify(&error);
		assert_eq!(message, "Invalid private key format");
		assert!(detail.contains("bad length"));
	}

	#[test]
	fn delivery_errors_go_through_the_raw_adapter() {
		let error = TransferError::Delivery(DeliveryError::Network(
			"Failed to send transaction: insufficient funds for transfer".to_string(),
		));
		let (message, detail) = classify(&error);
		assert_eq!(message, "Insufficient balance for transaction");
		assert!(detail.contains("insufficient funds for transfer"));
	}
}
