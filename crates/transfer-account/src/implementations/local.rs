//! Local private-key account implementation.
//!
//! Derives the sending account directly from the private key supplied with
//! the transfer request. The key never leaves the process.

use crate::{AccountError, AccountInterface};
use alloy_primitives::Address;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use transfer_types::SigningKey;

/// Account backed by an in-memory private key.
pub struct LocalAccount {
	/// Parsed signer, used for address derivation.
	signer: PrivateKeySigner,
	/// The key as supplied, handed to the delivery layer for signing.
	key: SigningKey,
}

impl LocalAccount {
	/// Parses the signing key and derives the account.
	///
	/// Accepts hex keys with or without a "0x" prefix. A key that does not
	/// parse as a valid secp256k1 private key is rejected.
	pub fn new(key: &SigningKey) -> Result<Self, AccountError> {
		let signer: PrivateKeySigner = key
			.with_exposed(|raw| raw.parse())
			.map_err(|_| AccountError::InvalidKey("wrong private key format".to_string()))?;

		Ok(Self {
			signer,
			key: key.clone(),
		})
	}
}

#[async_trait]
impl AccountInterface for LocalAccount {
	async fn address(&self) -> Result<Address, AccountError> {
		Ok(self.signer.address())
	}

	fn signing_key(&self) -> SigningKey {
		self.key.clone()
	}
}

/// Factory function to create a local account from a signing key.
pub fn create_account(key: &SigningKey) -> Result<Box<dyn AccountInterface>, AccountError> {
	Ok(Box::new(LocalAccount::new(key)?))
}
