//! Unit tests for location resolution
//!
//! Tests for src/location.rs - prefix stripping, empty segments and
//! query/fragment handling.

use category_navigator::{normalize_path, split_path, NavigatorConfig, PathResolver};

#[test]
fn test_default_resolver_strips_category_mount() {
    let location = PathResolver::default().resolve("/category/dien-thoai/iphone");
    assert_eq!(location.segments(), ["dien-thoai", "iphone"]);
}

#[test]
fn test_root_location_is_valid_and_empty() {
    let resolver = PathResolver::default();
    assert!(resolver.resolve("/category").is_empty());
    assert!(resolver.resolve("/category/").is_empty());
    assert!(resolver.resolve("/").is_empty());
}

#[test]
fn test_empty_segments_discarded() {
    let location = PathResolver::new(1).resolve("//category///a//b///");
    assert_eq!(location.segments(), ["a", "b"]);
}

#[test]
fn test_prefix_from_config() {
    let config = NavigatorConfig::new().mount_prefix_segments(2);
    let resolver = PathResolver::from_config(&config);
    assert_eq!(resolver.prefix_segments(), 2);
    assert_eq!(resolver.resolve("/vi/category/a").segments(), ["a"]);
}

#[test]
fn test_prefix_is_dropped_by_count_not_name() {
    let location = PathResolver::new(1).resolve("/danh-muc/a/b");
    assert_eq!(location.segments(), ["a", "b"]);
}

#[test]
fn test_query_string_ignored() {
    let location = PathResolver::default().resolve("/category/laptop?sort=price&page=2");
    assert_eq!(location.segments(), ["laptop"]);
}

#[test]
fn test_split_and_normalize_agree() {
    for path in ["/a/b", "a/b/", "//a//b", "/a/b/"] {
        assert_eq!(split_path(path), vec!["a", "b"]);
        assert_eq!(normalize_path(path), "/a/b");
    }
}
