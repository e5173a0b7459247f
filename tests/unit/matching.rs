//! Unit tests for prefix matching
//!
//! Tests for src/matching.rs - the prefix definition, prefix closure and
//! pruned traversal of the forest.

use crate::common::*;
use category_navigator::*;

#[test]
fn test_on_path_equals_prefix_definition() {
    let locations = [
        loc(&[]),
        loc(&["a"]),
        loc(&["a", "b"]),
        loc(&["a", "b", "c"]),
        loc(&["b", "a"]),
    ];
    let chains = [
        chain(&[]),
        chain(&["a"]),
        chain(&["b"]),
        chain(&["a", "b"]),
        chain(&["a", "c"]),
        chain(&["a", "b", "c", "d"]),
    ];

    for l in &locations {
        for s in &chains {
            let expected =
                s.len() <= l.len() && l.segments()[..s.len()] == *s.segments();
            assert_eq!(is_on_path(s, l), expected, "chain {s} vs {l:?}");
        }
    }
}

#[test]
fn test_on_path_is_prefix_closed() {
    let location = loc(&["phones", "apple", "sale"]);
    let full = chain(&["phones", "apple", "sale"]);
    assert!(is_on_path(&full, &location));

    let mut prefix = full.clone();
    while let Some(parent) = prefix.parent() {
        assert!(is_on_path(&parent, &location), "{parent} should be on path");
        prefix = parent;
    }
}

#[test]
fn test_expanded_matches_on_path_for_every_node() {
    let forest = deep_forest();
    for location in [loc(&[]), loc(&["phones"]), loc(&["phones", "apple", "sale"])] {
        let tree = TreeMatcher::new(&location).match_forest(&forest);
        fn walk(nodes: &[NodeMatch<'_>]) {
            for n in nodes {
                assert_eq!(n.expanded, n.on_path);
                walk(&n.children);
            }
        }
        walk(&tree);
    }
}

#[test]
fn test_repeated_slug_only_matches_its_branch() {
    let forest = deep_forest();
    let location = loc(&["phones", "apple", "sale"]);
    let flat = flatten(&TreeMatcher::new(&location).match_forest(&forest));

    let on_path: Vec<&str> = flat
        .iter()
        .filter(|(_, on)| *on)
        .map(|(c, _)| c.as_str())
        .collect();
    assert_eq!(on_path, vec!["phones", "phones/apple", "phones/apple/sale"]);

    assert!(flat.contains(&("phones/sale".to_string(), false)));
    assert!(flat.contains(&("sale".to_string(), false)));
}

#[test]
fn test_children_of_off_path_nodes_not_evaluated() {
    let forest = deep_forest();
    let location = loc(&["sale"]);
    let tree = TreeMatcher::new(&location).match_forest(&forest);

    assert!(!tree[0].on_path);
    assert!(tree[0].children.is_empty());
    assert!(tree[0].expandable);
    assert!(tree[1].on_path);
    assert!(!tree[1].expandable);
}

#[test]
fn test_trail_and_lookup_agree() {
    let forest = deep_forest();
    let location = loc(&["phones", "apple", "iphone-15"]);
    let trail = TreeMatcher::new(&location).active_trail(&forest);
    let selected = trail.selected().unwrap();

    assert_eq!(find_by_chain(&forest, &selected.chain).map(|n| n.id), Some(3));
    assert_eq!(chain_of(&forest, 3), Some(selected.chain.clone()));
}
