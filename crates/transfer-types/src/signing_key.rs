//! Secret wrapper for private signing keys.
//!
//! `SigningKey` holds the sender's private key for the duration of one
//! submission. The backing memory is zeroed on drop and the value is
//! redacted in Debug, Display, and serialized output.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use zeroize::Zeroizing;

/// A private signing key supplied by the user for a single submission.
///
/// Never stored beyond the request that carries it.
#[derive(Clone)]
pub struct SigningKey(Zeroizing<String>);

impl SigningKey {
	/// Wraps a raw key string.
	pub fn new(key: String) -> Self {
		Self(Zeroizing::new(key))
	}

	/// Returns true if no key material was supplied.
	pub fn is_empty(&self) -> bool {
		self.0.trim().is_empty()
	}

	/// Hands the key material to a closure without letting it escape scope.
	pub fn with_exposed<F, R>(&self, f: F) -> R
	where
		F: FnOnce(&str) -> R,
	{
		f(self.0.trim())
	}
}

impl fmt::Debug for SigningKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "SigningKey(<redacted>)")
	}
}

impl fmt::Display for SigningKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "<redacted>")
	}
}

impl From<&str> for SigningKey {
	fn from(key: &str) -> Self {
		Self::new(key.to_string())
	}
}

impl Serialize for SigningKey {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str("<redacted>")
	}
}

impl<'de> Deserialize<'de> for SigningKey {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let key = String::deserialize(deserializer)?;
		Ok(SigningKey::new(key))
	}
}
