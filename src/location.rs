//! Turning a raw location into slug segments.
//!
//! The storefront mounts the category tree under a fixed prefix
//! (`/category/...` by default). [`PathResolver`] splits the active location,
//! drops that prefix and hands the rest to the matcher as a
//! [`CurrentLocation`].
//!
//! # Normalization
//!
//! - Anything from the first `?` or `#` on is ignored.
//! - Empty segments are dropped, so `//a///b/` reads as `a/b`.
//! - A location with no segments past the prefix is the root location; it
//!   is valid and matches no category.
//!
//! ```
//! use category_navigator::PathResolver;
//!
//! let resolver = PathResolver::new(1);
//! let location = resolver.resolve("/category/dien-thoai/iphone?sort=price");
//! assert_eq!(location.segments(), ["dien-thoai", "iphone"]);
//!
//! assert!(resolver.resolve("/category").is_empty());
//! ```

use crate::{debug_log, NavigatorConfig, SlugChain};
use std::borrow::Cow;

/// Slug segments of the active location, prefix removed.
///
/// Produced fresh for every location change and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CurrentLocation {
    segments: Vec<String>,
}

impl CurrentLocation {
    /// Build a location from already-split segments.
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// The root location: no segments.
    pub fn root() -> Self {
        Self::default()
    }

    /// The segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Segment at `index`, if the location is that deep.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(String::as_str)
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True for the root location.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether `chain` is a positional prefix of this location.
    pub fn starts_with(&self, chain: &SlugChain) -> bool {
        chain.is_prefix_of(&self.segments)
    }

    /// The location as a chain, for navigating back to it.
    pub fn to_chain(&self) -> SlugChain {
        SlugChain::from(self.segments.clone())
    }
}

impl<S: Into<String>> FromIterator<S> for CurrentLocation {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Splits locations and strips the mount prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathResolver {
    prefix_segments: usize,
}

impl PathResolver {
    /// Create a resolver that drops `prefix_segments` leading segments.
    pub const fn new(prefix_segments: usize) -> Self {
        Self { prefix_segments }
    }

    /// Create a resolver using [`NavigatorConfig::mount_prefix_segments`].
    pub fn from_config(config: &NavigatorConfig) -> Self {
        Self::new(config.mount_prefix_segments)
    }

    /// Number of leading segments dropped.
    pub const fn prefix_segments(&self) -> usize {
        self.prefix_segments
    }

    /// Resolve a raw location into a [`CurrentLocation`].
    ///
    /// Never fails; a location shorter than the prefix resolves to root.
    pub fn resolve(&self, raw: &str) -> CurrentLocation {
        let segments: Vec<String> = split_path(strip_suffixes(raw))
            .into_iter()
            .skip(self.prefix_segments)
            .collect();

        debug_log!("Resolved location '{}' -> {:?}", raw, segments);

        CurrentLocation { segments }
    }
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::from_config(&NavigatorConfig::default())
    }
}

/// Cut the query string and fragment off a location.
pub fn strip_suffixes(raw: &str) -> &str {
    raw.find(['?', '#']).map_or(raw, |pos| &raw[..pos])
}

/// Split a path into segments, filtering empty segments
///
/// # Examples
///
/// ```
/// use category_navigator::split_path;
///
/// assert_eq!(split_path("/category/phones"), vec!["category", "phones"]);
/// assert_eq!(split_path("/"), Vec::<String>::new());
/// assert_eq!(split_path("a//b/"), vec!["a", "b"]);
/// ```
pub fn split_path(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Normalize a route prefix: leading slash, no trailing slash, `/` for root.
///
/// Returns `Cow<str>` to avoid allocation when the path is already normalized.
///
/// ```
/// use category_navigator::normalize_path;
///
/// assert_eq!(normalize_path("/category"), "/category");
/// assert_eq!(normalize_path("category/"), "/category");
/// assert_eq!(normalize_path(""), "/");
/// assert_eq!(normalize_path("//"), "/");
/// ```
#[must_use]
pub fn normalize_path(path: &'_ str) -> Cow<'_, str> {
    if path.is_empty() {
        return Cow::Borrowed("/");
    }

    if path == "/" {
        return Cow::Borrowed(path);
    }

    if path.starts_with('/') && !path.ends_with('/') && !path.contains("//") {
        return Cow::Borrowed(path);
    }

    let joined = split_path(path).join("/");
    if joined.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{joined}"))
    }
}
