//! Fragment parsing: main-region extraction and script stripping.
//!
//! A fragment source is a full HTML document; everything outside its single
//! `<main>` element (head, scripts, headers, footers) is scaffolding and
//! gets discarded. Scripts inside the region are removed as well: markup
//! spliced into the live page never executes.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::error::FragmentError;

static MAIN_SELECTOR: LazyLock<Selector> =
	LazyLock::new(|| Selector::parse("main").expect("static selector must parse"));

static SCRIPT_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").expect("static regex must parse"));

/// Extracts the inner markup of the first `<main>` element of `html`, with
/// all `<script>` elements removed.
///
/// `path` names the fragment source in the error when no main region exists.
pub fn extract_main(html: &str, path: &str) -> Result<String, FragmentError> {
	let document = Html::parse_document(html);
	let main = document
		.select(&MAIN_SELECTOR)
		.next()
		.ok_or_else(|| FragmentError::Structure {
			path: path.to_string(),
		})?;
	Ok(strip_scripts(&main.inner_html()))
}

/// Removes every `<script>...</script>` element from `html`.
pub fn strip_scripts(html: &str) -> String {
	SCRIPT_RE.replace_all(html, "").into_owned()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_extracts_inner_markup_of_main() {
		let html = r#"<!DOCTYPE html>
<html>
<head><title>Home</title></head>
<body>
<header><nav>site nav</nav></header>
<main><h1>Welcome</h1><p>Get involved.</p></main>
<footer>footer</footer>
</body>
</html>"#;

		let content = extract_main(html, "/src/views/index.html").unwrap();
		assert_eq!(content, "<h1>Welcome</h1><p>Get involved.</p>");
	}

	#[test]
	fn test_missing_main_is_structure_error() {
		let html = "<html><body><div>no main here</div></body></html>";
		let err = extract_main(html, "/src/views/broken.html").unwrap_err();
		assert!(matches!(err, FragmentError::Structure { .. }));
		assert_eq!(err.path(), "/src/views/broken.html");
	}

	#[test]
	fn test_first_main_wins() {
		let html = "<html><body><main><p>one</p></main><main><p>two</p></main></body></html>";
		let content = extract_main(html, "/x.html").unwrap();
		assert_eq!(content, "<p>one</p>");
	}

	#[test]
	fn test_scripts_inside_main_are_removed() {
		let html = r#"<html><body><main><h1>Gallery</h1><script src="/js/gallery.js"></script><p>photos</p><script>initLightbox();</script></main></body></html>"#;
		let content = extract_main(html, "/src/views/gallery.html").unwrap();
		assert_eq!(content, "<h1>Gallery</h1><p>photos</p>");
	}

	#[test]
	fn test_strip_scripts_handles_attributes_and_case() {
		let html = r#"before<SCRIPT type="module">const x = "</div>";</SCRIPT>after"#;
		assert_eq!(strip_scripts(html), "beforeafter");
	}

	#[test]
	fn test_strip_scripts_leaves_plain_markup_alone() {
		let html = "<p>scripture</p>";
		assert_eq!(strip_scripts(html), html);
	}
}
