//! Account management module for the transfer tool.
//!
//! This module provides abstractions for deriving a sending account from a
//! user-supplied private key. It defines the interface account
//! implementations must satisfy and a service wrapper used by the
//! orchestration layer.

use alloy_primitives::Address;
use async_trait::async_trait;
use thiserror::Error;
use transfer_types::SigningKey;

/// Re-export implementations
pub mod implementations {
	pub mod local;
}

/// Errors that can occur during account operations.
#[derive(Debug, Error)]
pub enum AccountError {
	/// Error that occurs when signing operations fail.
	#[error("Signing failed: {0}")]
	SigningFailed(String),
	/// Error that occurs when a cryptographic key is invalid or malformed.
	#[error("Invalid key: {0}")]
	InvalidKey(String),
}

/// Trait defining the interface for account implementations.
///
/// An account is derived from the signing key of one transfer request and
/// lives only for that submission. It provides the sender address and
/// hands its key to the delivery layer for transaction signing.
#[async_trait]
pub trait AccountInterface: Send + Sync {
	/// Retrieves the address associated with this account.
	async fn address(&self) -> Result<Address, AccountError>;

	/// Returns the signing key backing this account.
	///
	/// Used by delivery implementations to sign the submitted transaction.
	fn signing_key(&self) -> SigningKey;
}

/// Type alias for account factory functions.
///
/// This is the function signature account implementations provide to
/// derive an account from a signing key.
pub type AccountFactory = fn(&SigningKey) -> Result<Box<dyn AccountInterface>, AccountError>;

/// Service that manages account operations.
///
/// This struct provides a high-level interface for account management,
/// wrapping an underlying account implementation.
pub struct AccountService {
	/// The underlying account implementation.
	implementation: Box<dyn AccountInterface>,
}

impl AccountService {
	/// Creates a new AccountService with the specified implementation.
	pub fn new(implementation: Box<dyn AccountInterface>) -> Self {
		Self { implementation }
	}

	/// Retrieves the address associated with the managed account.
	pub async fn get_address(&self) -> Result<Address, AccountError> {
		self.implementation.address().await
	}

	/// Returns the signing key backing the managed account.
	pub fn signing_key(&self) -> SigningKey {
		self.implementation.signing_key()
	}
}
