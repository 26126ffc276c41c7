//! Configuration module for the transfer tool.
//!
//! This module provides structures and utilities for managing the network
//! registry and delivery tuning. It supports loading configuration from
//! TOML files, resolves `${VAR}` environment references, and validates
//! that all required configuration values are properly set. Without a
//! configuration file, a built-in two-network registry is used.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use transfer_types::{NetworkConfig, NetworksConfig};

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error that occurs during file I/O operations.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	/// Error that occurs when parsing TOML configuration.
	#[error("Configuration error: {0}")]
	Parse(String),
	/// Error that occurs when configuration validation fails.
	#[error("Validation error: {0}")]
	Validation(String),
}

impl From<toml::de::Error> for ConfigError {
	fn from(err: toml::de::Error) -> Self {
		// Extract just the message without the huge input dump
		let message = err.message().to_string();
		ConfigError::Parse(message)
	}
}

/// Main configuration structure for the transfer tool.
///
/// Contains the network registry keyed by network name and the delivery
/// tuning section. Both sections fall back to built-in defaults when
/// absent, so an empty configuration is valid.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
	/// Network configurations keyed by network name.
	#[serde(default = "default_networks")]
	pub networks: NetworksConfig,
	/// Tuning for transaction delivery and receipt polling.
	#[serde(default)]
	pub delivery: DeliveryConfig,
}

/// Tuning for transaction delivery and receipt polling.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeliveryConfig {
	/// Maximum time in seconds to wait for a submitted transaction's receipt.
	#[serde(default = "default_receipt_timeout_seconds")]
	pub receipt_timeout_seconds: u64,
	/// Interval in seconds between receipt polls.
	#[serde(default = "default_receipt_poll_interval_seconds")]
	pub receipt_poll_interval_seconds: u64,
}

impl DeliveryConfig {
	/// Receipt wait timeout as a `Duration`.
	pub fn receipt_timeout(&self) -> Duration {
		Duration::from_secs(self.receipt_timeout_seconds)
	}

	/// Receipt poll interval as a `Duration`.
	pub fn receipt_poll_interval(&self) -> Duration {
		Duration::from_secs(self.receipt_poll_interval_seconds)
	}
}

impl Default for DeliveryConfig {
	fn default() -> Self {
		Self {
			receipt_timeout_seconds: default_receipt_timeout_seconds(),
			receipt_poll_interval_seconds: default_receipt_poll_interval_seconds(),
		}
	}
}

/// Returns the default receipt wait timeout in seconds.
fn default_receipt_timeout_seconds() -> u64 {
	180
}

/// Returns the default receipt poll interval in seconds.
fn default_receipt_poll_interval_seconds() -> u64 {
	3
}

/// Returns the built-in network registry.
///
/// Covers the two networks the tool knows out of the box: the Sepolia
/// testnet and Ethereum mainnet, both using public RPC endpoints.
fn default_networks() -> NetworksConfig {
	let mut networks = NetworksConfig::new();
	networks.insert(
		"sepolia".to_string(),
		NetworkConfig {
			rpc_url: "https://ethereum-sepolia.publicnode.com".to_string(),
			symbol: "ETH".to_string(),
			chain_id: 11155111,
			explorer_url: "https://sepolia.etherscan.io".to_string(),
		},
	);
	networks.insert(
		"ethereum".to_string(),
		NetworkConfig {
			rpc_url: "https://eth.llamarpc.com".to_string(),
			symbol: "ETH".to_string(),
			chain_id: 1,
			explorer_url: "https://etherscan.io".to_string(),
		},
	);
	networks
}

impl Default for Config {
	fn default() -> Self {
		Self {
			networks: default_networks(),
			delivery: DeliveryConfig::default(),
		}
	}
}

/// Resolves environment variables in a string.
///
/// Replaces ${VAR_NAME} with the value of the environment variable VAR_NAME.
/// Supports default values with ${VAR_NAME:-default_value}.
///
/// Input strings are limited to 1MB to prevent ReDoS attacks.
pub(crate) fn resolve_env_vars(input: &str) -> Result<String, ConfigError> {
	const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB
	if input.len() > MAX_INPUT_SIZE {
		return Err(ConfigError::Validation(format!(
			"Configuration file too large: {} bytes (max: {} bytes)",
			input.len(),
			MAX_INPUT_SIZE
		)));
	}

	let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]{0,127})(?::-([^}]{0,256}))?\}")
		.map_err(|e| ConfigError::Parse(format!("Regex error: {}", e)))?;

	let mut result = input.to_string();
	let mut replacements = Vec::new();

	for cap in re.captures_iter(input) {
		let full_match = cap.get(0).unwrap();
		let var_name = cap.get(1).unwrap().as_str();
		let default_value = cap.get(2).map(|m| m.as_str());

		let value = match std::env::var(var_name) {
			Ok(v) => v,
			Err(_) => {
				if let Some(default) = default_value {
					default.to_string()
				} else {
					return Err(ConfigError::Validation(format!(
						"Environment variable '{}' not found",
						var_name
					)));
				}
			},
		};

		replacements.push((full_match.start(), full_match.end(), value));
	}

	// Apply replacements in reverse order to maintain positions
	for (start, end, value) in replacements.iter().rev() {
		result.replace_range(start..end, value);
	}

	Ok(result)
}

impl Config {
	/// Loads configuration from a TOML file.
	///
	/// Environment variable references are resolved and the configuration
	/// is validated before being returned.
	pub fn from_file(path: &str) -> Result<Self, ConfigError> {
		let raw = std::fs::read_to_string(path)?;
		raw.parse()
	}

	/// Validates the configuration to ensure all required fields are properly set.
	///
	/// Every network entry must carry an RPC endpoint, a currency symbol,
	/// a nonzero chain id, and an explorer base URL. Delivery intervals
	/// must be nonzero and the poll interval must fit within the timeout.
	fn validate(&self) -> Result<(), ConfigError> {
		if self.networks.is_empty() {
			return Err(ConfigError::Validation(
				"Networks configuration cannot be empty".into(),
			));
		}
		for (name, network) in &self.networks {
			if network.rpc_url.is_empty() {
				return Err(ConfigError::Validation(format!(
					"Network '{}' must have an rpc_url",
					name
				)));
			}
			if network.symbol.is_empty() {
				return Err(ConfigError::Validation(format!(
					"Network '{}' must have a currency symbol",
					name
				)));
			}
			if network.chain_id == 0 {
				return Err(ConfigError::Validation(format!(
					"Network '{}' must have a nonzero chain_id",
					name
				)));
			}
			if network.explorer_url.is_empty() {
				return Err(ConfigError::Validation(format!(
					"Network '{}' must have an explorer_url",
					name
				)));
			}
		}

		if self.delivery.receipt_timeout_seconds == 0 {
			return Err(ConfigError::Validation(
				"receipt_timeout_seconds must be greater than 0".into(),
			));
		}
		if self.delivery.receipt_poll_interval_seconds == 0 {
			return Err(ConfigError::Validation(
				"receipt_poll_interval_seconds must be greater than 0".into(),
			));
		}
		if self.delivery.receipt_poll_interval_seconds > self.delivery.receipt_timeout_seconds {
			return Err(ConfigError::Validation(
				"receipt_poll_interval_seconds cannot exceed receipt_timeout_seconds".into(),
			));
		}

		Ok(())
	}
}

/// Implementation of FromStr trait for Config to enable parsing from string.
///
/// This allows configuration to be parsed from TOML strings using the standard
/// string parsing interface. Environment variables are resolved and the
/// configuration is automatically validated after parsing.
impl FromStr for Config {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let resolved = resolve_env_vars(s)?;
		let config: Config = toml::from_str(&resolved)?;
		config.validate()?;
		Ok(config)
	}
}
