//! Network registry configuration types.
//!
//! This module defines the configuration structures for the networks a
//! transfer can be sent on, including RPC endpoints, native currency
//! symbols, chain ids, and block explorer bases.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration for a single blockchain network.
///
/// Contains all the network-specific settings required to submit a
/// native-currency transfer on a particular chain.
///
/// # Fields
///
/// * `rpc_url` - The HTTP(S) RPC endpoint for blockchain interaction
/// * `symbol` - The native currency symbol (e.g., "ETH")
/// * `chain_id` - The chain id transactions are bound to
/// * `explorer_url` - Base URL of the block explorer for this network
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NetworkConfig {
	pub rpc_url: String,
	pub symbol: String,
	pub chain_id: u64,
	pub explorer_url: String,
}

/// Networks configuration mapping network names to their configurations.
///
/// Keyed by the user-facing network name (e.g., "sepolia", "ethereum"),
/// which is what the submitter selects a network by.
pub type NetworksConfig = HashMap<String, NetworkConfig>;
