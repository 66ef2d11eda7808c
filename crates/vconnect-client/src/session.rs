//! Session marker lifecycle: login, logout, activity tracking.
//!
//! Timestamps use the storage format the site has always written:
//! RFC 3339 UTC with millisecond precision and a `Z` suffix.

use chrono::{SecondsFormat, Utc};

use vconnect_pages::session::{SessionStore, UserRecord};

/// Writes a fresh session marker for `name`/`email` and returns the record.
pub fn login(store: &dyn SessionStore, name: &str, email: &str) -> UserRecord {
	let now = now_timestamp();
	let record = UserRecord {
		name: name.to_string(),
		email: email.to_string(),
		login_time: now.clone(),
		last_active: now,
	};
	store.set(&record);
	record
}

/// Removes the session marker.
pub fn logout(store: &dyn SessionStore) {
	store.clear();
}

/// Refreshes `last_active` on the current record; no-op when logged out.
pub fn touch(store: &dyn SessionStore) {
	if let Some(mut record) = store.get() {
		record.last_active = now_timestamp();
		store.set(&record);
	}
}

fn now_timestamp() -> String {
	Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
	use super::*;
	use vconnect_pages::testing::MemorySessionStore;

	#[test]
	fn test_login_persists_record() {
		let store = MemorySessionStore::new();
		let record = login(&store, "Jas", "jas@example.com");

		assert_eq!(store.get(), Some(record.clone()));
		assert_eq!(record.login_time, record.last_active);
		assert!(record.login_time.ends_with('Z'));
	}

	#[test]
	fn test_logout_clears_marker() {
		let store = MemorySessionStore::new();
		login(&store, "Jas", "jas@example.com");

		logout(&store);
		assert!(!store.is_present());
	}

	#[test]
	fn test_touch_refreshes_last_active_only() {
		let store = MemorySessionStore::new();
		let mut stale = login(&store, "Jas", "jas@example.com");
		stale.last_active = "2025-02-25T10:00:00.000Z".to_string();
		store.set(&stale);

		touch(&store);

		let refreshed = store.get().expect("record survives touch");
		assert_eq!(refreshed.login_time, stale.login_time);
		assert_ne!(refreshed.last_active, "2025-02-25T10:00:00.000Z");
	}

	#[test]
	fn test_touch_without_login_is_noop() {
		let store = MemorySessionStore::new();
		touch(&store);
		assert!(!store.is_present());
	}
}
