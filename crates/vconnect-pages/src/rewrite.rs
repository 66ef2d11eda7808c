//! Asset-path rewriting for fetched fragments.
//!
//! Fragments are authored with relative asset paths that only resolve when
//! the page is served from the site root. Before a fragment is parsed, an
//! ordered list of (pattern, replacement) rules anchors those paths to the
//! root and strips `.html` suffixes from internal navigation links. The rule
//! list is data, not control flow: new asset prefixes are added by appending
//! a rule.

use regex::Regex;

/// A single text-rewrite rule.
#[derive(Debug, Clone)]
pub struct RewriteRule {
	pattern: Regex,
	replacement: String,
}

impl RewriteRule {
	/// Creates a rule from a regex pattern and a replacement template.
	///
	/// Capture groups are referenced as `${1}` in the replacement.
	pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self, regex::Error> {
		Ok(Self {
			pattern: Regex::new(pattern)?,
			replacement: replacement.into(),
		})
	}

	/// Applies this rule to `text`, replacing every occurrence.
	pub fn apply(&self, text: &str) -> String {
		self.pattern.replace_all(text, self.replacement.as_str()).into_owned()
	}
}

/// Ordered list of rewrite rules applied to raw fragment text.
#[derive(Debug, Clone)]
pub struct PathRewriter {
	rules: Vec<RewriteRule>,
}

impl PathRewriter {
	/// Creates a rewriter with no rules. `apply` is then the identity.
	pub fn empty() -> Self {
		Self { rules: Vec::new() }
	}

	/// The standard rule set for site fragments.
	///
	/// Stylesheets under `css/`, scripts under `js/` or `./js/`, vendored
	/// libraries under `node_modules/`, and images under `assets/` are
	/// anchored to the root. Internal `.html` links are anchored first and
	/// then have the suffix stripped; both rules run, in that order, so
	/// `href="about.html"` ends up as `href="/about"`.
	pub fn standard() -> Self {
		Self::empty()
			.rule(r#"href="css/"#, r#"href="/css/"#)
			.rule(r#"href="node_modules/"#, r#"href="/node_modules/"#)
			.rule(r#"src="js/"#, r#"src="/js/"#)
			.rule(r#"src="\./js/"#, r#"src="/js/"#)
			.rule(r#"src="node_modules/"#, r#"src="/node_modules/"#)
			.rule(r#"src="assets/"#, r#"src="/assets/"#)
			.rule(r#"href="([^"]+\.html)""#, r#"href="/${1}""#)
			.rule(r#"href="([^"]+)\.html""#, r#"href="/${1}""#)
	}

	/// Appends a rule, returning the rewriter for chaining.
	///
	/// # Panics
	///
	/// Panics if `pattern` is not a valid regex. Rule patterns are expected
	/// to be literals known at startup.
	pub fn rule(mut self, pattern: &str, replacement: &str) -> Self {
		let rule = RewriteRule::new(pattern, replacement)
			.expect("rewrite rule pattern must be a valid regex");
		self.rules.push(rule);
		self
	}

	/// Applies every rule to `text`, in registration order.
	pub fn apply(&self, text: &str) -> String {
		self.rules
			.iter()
			.fold(text.to_string(), |html, rule| rule.apply(&html))
	}

	/// Returns the number of rules.
	pub fn len(&self) -> usize {
		self.rules.len()
	}

	/// Returns `true` when no rules are registered.
	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}
}

impl Default for PathRewriter {
	fn default() -> Self {
		Self::standard()
	}
}
