//! Session marker storage.
//!
//! The logged-in state of the client is a single serialized record persisted
//! under a fixed key in client-local storage. Its presence is what the auth
//! gate tests. It is not a verified credential; the backend enforces its
//! own checks on every API call.

use serde::{Deserialize, Serialize};

/// Storage key holding the serialized session record.
pub const SESSION_KEY: &str = "user";

/// The client-persisted user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
	/// Display name.
	pub name: String,
	/// Email address.
	pub email: String,
	/// RFC 3339 timestamp of the login.
	#[serde(rename = "loginTime")]
	pub login_time: String,
	/// RFC 3339 timestamp of the last observed activity.
	#[serde(rename = "lastActive")]
	pub last_active: String,
}

/// Injected session repository.
///
/// Implementations persist a single string value under [`SESSION_KEY`]. The
/// typed helpers layer serde on top; a present-but-unparseable value still
/// counts as a marker for [`SessionStore::is_present`].
pub trait SessionStore {
	/// Returns the raw marker value, if present.
	fn raw(&self) -> Option<String>;

	/// Writes the raw marker value.
	fn set_raw(&self, value: &str);

	/// Removes the marker.
	fn clear(&self);

	/// Returns `true` when a marker is present, parseable or not.
	fn is_present(&self) -> bool {
		self.raw().is_some()
	}

	/// Returns the deserialized record, or `None` when absent or corrupt.
	fn get(&self) -> Option<UserRecord> {
		self.raw()
			.and_then(|raw| serde_json::from_str(&raw).ok())
	}

	/// Serializes and stores `record`.
	fn set(&self, record: &UserRecord) {
		if let Ok(raw) = serde_json::to_string(record) {
			self.set_raw(&raw);
		}
	}
}
