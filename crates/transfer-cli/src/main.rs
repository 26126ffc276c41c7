//! Main entry point for the transfer tool.
//!
//! This binary collects the four transfer inputs as command-line
//! arguments, wires the concrete implementations together, and submits a
//! single native-currency transfer on the selected network.

use clap::Parser;
use std::path::PathBuf;
use transfer_account::implementations::local::create_account;
use transfer_config::Config;
use transfer_core::{ConsolePresenter, TransferOrchestrator};
use transfer_delivery::implementations::evm::alloy::HttpConnector;
use transfer_delivery::ReceiptPolicy;
use transfer_types::{SigningKey, TransferOutcome, TransferRequest};

/// Command-line arguments for the transfer tool.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Path to configuration file; the built-in network registry is used
	/// when omitted
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long, default_value = "info")]
	log_level: String,

	/// Amount to send, in whole native units (e.g. "1.5")
	#[arg(short, long)]
	amount: String,

	/// Recipient address
	#[arg(short, long)]
	recipient: String,

	/// Network to send on
	#[arg(short, long, default_value = "sepolia")]
	network: String,

	/// Sender private key; prefer the environment variable so the key
	/// stays out of shell history
	#[arg(long, env = "TRANSFER_PRIVATE_KEY", hide_env_values = true)]
	private_key: String,
}

/// Main entry point for the transfer tool.
///
/// This function:
/// 1. Parses command-line arguments
/// 2. Initializes logging infrastructure
/// 3. Loads configuration (or the built-in defaults)
/// 4. Builds the orchestrator with the concrete implementations
/// 5. Submits the transfer and maps the outcome to the exit status
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	// Initialize tracing with env filter
	use tracing_subscriber::{fmt, EnvFilter};

	// Create env filter with default from args
	let default_directive = args.log_level.to_string();
	let env_filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

	fmt()
		.with_env_filter(env_filter)
		.with_thread_ids(true)
		.with_target(true)
		.init();

	// Load configuration
	let config = match &args.config {
		Some(path) => {
			let path = path
				.to_str()
				.ok_or_else(|| format!("Invalid config path: {}", path.display()))?;
			Config::from_file(path)?
		}
		None => Config::default(),
	};
	tracing::info!("Loaded configuration [{} networks]", config.networks.len());

	let policy = ReceiptPolicy {
		timeout: config.delivery.receipt_timeout(),
		poll_interval: config.delivery.receipt_poll_interval(),
	};

	let orchestrator = TransferOrchestrator::new(
		config.networks,
		create_account,
		Box::new(HttpConnector::new(policy)),
		Box::new(ConsolePresenter),
	);

	let request = TransferRequest {
		signing_key: SigningKey::new(args.private_key),
		amount: args.amount,
		recipient: args.recipient,
		network: args.network,
	};

	match orchestrator.submit_transfer(&request).await {
		TransferOutcome::Success { .. } => Ok(()),
		TransferOutcome::Failure { .. } => std::process::exit(1),
	}
}
