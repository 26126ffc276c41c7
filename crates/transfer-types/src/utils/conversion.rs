//! Amount conversion utilities.
//!
//! Converts between user-facing decimal amounts and on-chain base units.
//! The native currency carries 18 decimals; parsing itself is delegated
//! to the alloy unit helpers.

use alloy_primitives::{
	utils::{format_units, parse_units, ParseUnits},
	U256,
};
use thiserror::Error;

/// Number of decimal places of the native currency.
pub const NATIVE_DECIMALS: u8 = 18;

/// Errors that can occur when parsing a decimal amount.
#[derive(Debug, Error)]
pub enum AmountError {
	/// The string is not a well-formed decimal number.
	#[error("Invalid amount '{0}'")]
	Invalid(String),
	/// The amount parsed but is zero or negative.
	#[error("Amount must be greater than zero")]
	NotPositive,
}

/// Parses a decimal amount in whole native units into base units.
///
/// Accepts strings like "1.5" and returns the equivalent base-unit value
/// (1500000000000000000). Rejects malformed, zero, and negative amounts.
pub fn parse_native_amount(amount: &str) -> Result<U256, AmountError> {
	let trimmed = amount.trim();
	if trimmed.is_empty() {
		return Err(AmountError::Invalid(amount.to_string()));
	}

	let parsed = parse_units(trimmed, NATIVE_DECIMALS)
		.map_err(|_| AmountError::Invalid(amount.to_string()))?;

	let value = match parsed {
		ParseUnits::U256(value) => value,
		ParseUnits::I256(_) => return Err(AmountError::NotPositive),
	};

	if value.is_zero() {
		return Err(AmountError::NotPositive);
	}

	Ok(value)
}

/// Formats a base-unit value as a decimal string in whole native units.
///
/// Trailing zeros in the fractional part are trimmed for display, so
/// 1500000000000000000 renders as "1.5" and 10^18 as "1".
pub fn format_native_amount(value: U256) -> String {
	match format_units(value, NATIVE_DECIMALS) {
		Ok(formatted) => {
			let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
			if trimmed.is_empty() {
				"0".to_string()
			} else {
				trimmed.to_string()
			}
		}
		// NATIVE_DECIMALS is always a valid unit; fall back to base units
		Err(_) => value.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_fractional_amount_to_base_units() {
		let value = parse_native_amount("1.5").unwrap();
		assert_eq!(value, U256::from(1_500_000_000_000_000_000u64));
	}

	#[test]
	fn parses_whole_amount() {
		let value = parse_native_amount("2").unwrap();
		assert_eq!(value, U256::from(2_000_000_000_000_000_000u64));
	}

	#[test]
	fn parses_small_amount() {
		let value = parse_native_amount("0.001").unwrap();
		assert_eq!(value, U256::from(1_000_000_000_000_000u64));
	}

	#[test]
	fn rejects_zero_and_negative_amounts() {
		assert!(matches!(
			parse_native_amount("0"),
			Err(AmountError::NotPositive)
		));
		assert!(matches!(
			parse_native_amount("0.0"),
			Err(AmountError::NotPositive)
		));
		assert!(matches!(
			parse_native_amount("-1"),
			Err(AmountError::NotPositive)
		));
	}

	#[test]
	fn rejects_malformed_amounts() {
		assert!(matches!(
			parse_native_amount("abc"),
			Err(AmountError::Invalid(_))
		));
		assert!(matches!(
			parse_native_amount(""),
			Err(AmountError::Invalid(_))
		));
		assert!(matches!(
			parse_native_amount("1.2.3"),
			Err(AmountError::Invalid(_))
		));
	}

	#[test]
	fn formats_base_units_for_display() {
		assert_eq!(
			format_native_amount(U256::from(1_500_000_000_000_000_000u64)),
			"1.5"
		);
		assert_eq!(
			format_native_amount(U256::from(1_000_000_000_000_000_000u64)),
			"1"
		);
		assert_eq!(
			format_native_amount(U256::from(100_000_000_000_000_000u64)),
			"0.1"
		);
		assert_eq!(format_native_amount(U256::ZERO), "0");
	}
}
