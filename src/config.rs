//! Navigator configuration.
//!
//! ```
//! use category_navigator::NavigatorConfig;
//! use std::time::Duration;
//!
//! let config = NavigatorConfig::new()
//!     .category_route_prefix("/danh-muc")
//!     .debounce(Duration::from_millis(200))
//!     .page_size(24);
//!
//! assert_eq!(config.category_route_prefix, "/danh-muc");
//! assert_eq!(config.page_size, 24);
//! assert_eq!(config.mount_prefix_segments, 1);
//! ```

use crate::location::normalize_path;
use std::time::Duration;

/// Settings shared by the resolver, the navigation controller and the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigatorConfig {
    /// Leading location segments dropped before matching
    pub mount_prefix_segments: usize,
    /// Route under which category chains are mounted
    pub category_route_prefix: String,
    /// Quiet period before a typed keyword takes effect
    pub debounce: Duration,
    /// Products per picker page, never zero
    pub page_size: usize,
    /// Maximum number of products fetched for the picker
    pub product_fetch_cap: usize,
    /// Entries kept by the filter cache
    pub cache_capacity: usize,
}

impl NavigatorConfig {
    /// Default quiet period.
    pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(350);
    /// Default page size.
    pub const DEFAULT_PAGE_SIZE: usize = 12;
    /// Default product fetch cap.
    pub const DEFAULT_PRODUCT_FETCH_CAP: usize = 1000;
    /// Default filter cache capacity.
    pub const DEFAULT_CACHE_CAPACITY: usize = 64;

    /// Create the default configuration.
    pub fn new() -> Self {
        Self {
            mount_prefix_segments: 1,
            category_route_prefix: "/category".to_string(),
            debounce: Self::DEFAULT_DEBOUNCE,
            page_size: Self::DEFAULT_PAGE_SIZE,
            product_fetch_cap: Self::DEFAULT_PRODUCT_FETCH_CAP,
            cache_capacity: Self::DEFAULT_CACHE_CAPACITY,
        }
    }

    /// Set how many leading segments the resolver drops.
    pub fn mount_prefix_segments(mut self, segments: usize) -> Self {
        self.mount_prefix_segments = segments;
        self
    }

    /// Set the category route prefix. The value is normalized to a leading
    /// slash and no trailing slash.
    pub fn category_route_prefix(mut self, prefix: impl AsRef<str>) -> Self {
        self.category_route_prefix = normalize_path(prefix.as_ref()).into_owned();
        self
    }

    /// Set the keyword quiet period.
    pub fn debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Set the picker page size. Zero is coerced to one.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Set the product fetch cap.
    pub fn product_fetch_cap(mut self, cap: usize) -> Self {
        self.product_fetch_cap = cap;
        self
    }

    /// Set the filter cache capacity. Zero is coerced to one.
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity.max(1);
        self
    }
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self::new()
    }
}
