//! Unit tests for slug-chain navigation
//!
//! Tests for src/navigation.rs - route building and the empty-chain guard.

use crate::common::*;
use category_navigator::*;

#[test]
fn test_route_is_prefix_plus_joined_chain() {
    for segments in [
        vec!["a"],
        vec!["a", "b"],
        vec!["dien-thoai", "iphone", "15-pro"],
    ] {
        let router = RecordingRouter::new();
        let mut nav = NavigationController::new(router.clone());
        let outcome = nav.select_chain(&chain(&segments));

        let expected = format!("/category/{}", segments.join("/"));
        assert_eq!(outcome.path(), Some(expected.as_str()));
        assert_eq!(router.recorded(), vec![expected]);
    }
}

#[test]
fn test_empty_chain_records_nothing() {
    let router = RecordingRouter::new();
    let mut nav = NavigationController::new(router.clone());

    let outcome = nav.select_chain(&SlugChain::new());
    assert_eq!(
        outcome,
        NavigationOutcome::Ignored(NavigatorError::InvalidNavigationTarget)
    );
    assert!(router.recorded().is_empty());
}

#[test]
fn test_route_for_does_not_navigate() {
    let router = RecordingRouter::new();
    let nav = NavigationController::new(router.clone());

    assert_eq!(
        nav.route_for(&chain(&["laptop"])).as_deref(),
        Some("/category/laptop")
    );
    assert!(router.recorded().is_empty());
}

#[test]
fn test_closure_route_changer() {
    let mut last = String::new();
    {
        let mut nav = NavigationController::new(|path: &str| last = path.to_string());
        nav.select_chain(&chain(&["phu-kien"]));
    }
    assert_eq!(last, "/category/phu-kien");
}

#[test]
fn test_navigation_never_mutates_tree() {
    let forest = storefront_forest();
    let before = forest.clone();
    let location = loc(&["laptop"]);
    let tree = TreeMatcher::new(&location).match_forest(&forest);

    let mut nav = NavigationController::new(RecordingRouter::new());
    for node in &tree {
        nav.select_match(node);
    }
    drop(tree);
    assert_eq!(forest, before);
}

#[test]
fn test_interior_empty_slug_keeps_its_position() {
    let router = RecordingRouter::new();
    let mut nav = NavigationController::new(router.clone());

    let gapped = chain(&["a", "", "b"]);
    let outcome = nav.select_chain(&gapped);

    assert_eq!(outcome.path(), Some("/category/a//b"));
    assert_ne!(nav.route_for(&gapped), nav.route_for(&chain(&["a", "b"])));
    assert_eq!(router.recorded(), vec!["/category/a//b"]);
}
