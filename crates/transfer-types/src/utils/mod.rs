//! Utility functions for common conversions and transformations.
//!
//! This module provides helper functions for converting between decimal
//! amounts and base units, and for hex-string formatting used throughout
//! the transfer workspace.

pub mod conversion;
pub mod formatting;

pub use conversion::{format_native_amount, parse_native_amount, AmountError, NATIVE_DECIMALS};
pub use formatting::{truncate_id, with_0x_prefix, without_0x_prefix};
