//! Error types for fragment loading.
//!
//! Both kinds are terminal for the navigation attempt that raised them: the
//! loader logs the error, mounts an inline error fragment in place of the
//! intended content, and returns. Nothing here crosses the loader boundary.

use thiserror::Error;

/// Failure while loading or shaping a content fragment.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum FragmentError {
	/// The fragment could not be fetched, or the server answered with a
	/// non-success status.
	#[error("failed to load {path}: {reason}")]
	Load {
		/// Path of the fragment source that failed.
		path: String,
		/// Transport error or HTTP status description.
		reason: String,
	},

	/// The fragment was fetched but contains no main content region.
	#[error("no main content region in {path}")]
	Structure {
		/// Path of the offending fragment source.
		path: String,
	},
}

impl FragmentError {
	/// Returns the fragment source path the error refers to.
	pub fn path(&self) -> &str {
		match self {
			Self::Load { path, .. } => path,
			Self::Structure { path } => path,
		}
	}
}
