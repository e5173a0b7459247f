//! Unit tests for keyword filtering and pagination
//!
//! Tests for src/search.rs - the category retention rule and page clamping.

use crate::common::*;
use category_navigator::search::{filter_categories, matches_keyword};
use category_navigator::*;

#[test]
fn test_category_filter_properties() {
    let forest = storefront_forest();
    for keyword in ["", "i", "IPHONE", "laptop", "sac", "zzz", " phone "] {
        let groups = filter_categories(&forest, keyword);

        for group in &groups {
            let parent = &forest[group.parent];
            let any_child = parent
                .children
                .iter()
                .any(|c| matches_keyword(&c.category_name, keyword));
            assert!(
                matches_keyword(&parent.category_name, keyword) || any_child,
                "parent '{}' kept without a match for '{keyword}'",
                parent.category_name
            );
            for &i in &group.children {
                assert!(matches_keyword(&parent.children[i].category_name, keyword));
            }
        }

        for (i, parent) in forest.iter().enumerate() {
            let should_keep = matches_keyword(&parent.category_name, keyword)
                || parent
                    .children
                    .iter()
                    .any(|c| matches_keyword(&c.category_name, keyword));
            assert_eq!(
                groups.iter().any(|g| g.parent == i),
                should_keep,
                "parent '{}' for '{keyword}'",
                parent.category_name
            );
        }
    }
}

#[test]
fn test_iphone_keyword_keeps_parents_via_children() {
    let forest = storefront_forest();
    let index = TargetSearchIndex::categories(forest.clone());
    let matches = index.filter("iphone");
    let groups = index.category_groups(&matches);

    // "Dien thoai" via iPhone, "Phu kien" via "Op lung iPhone"
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].children.len(), 1);
    assert_eq!(index.filter("").len(), forest.len());
}

#[test]
fn test_paging_37_by_12() {
    let pagination = Pagination::new(37, 12, 5);
    assert_eq!(pagination.total_pages, 4);
    assert_eq!(pagination.page, 4);
    assert_eq!(pagination.range().len(), 1);
}

#[test]
fn test_product_page_clamps() {
    let index = TargetSearchIndex::products(product_list(37));
    let matches = index.filter("product");

    let last = index.product_page(&matches, 99, 12).unwrap();
    assert_eq!(last.pagination.page, 4);
    assert_eq!(last.items.len(), 1);
    assert_eq!(last.items[0].id, 36);

    let first = index.product_page(&matches, 0, 12).unwrap();
    assert_eq!(first.pagination.page, 1);
    assert_eq!(first.items.len(), 12);
}

#[test]
fn test_no_matches_single_empty_page() {
    let index = TargetSearchIndex::products(product_list(5));
    let matches = index.filter("nothing");
    let page = index.product_page(&matches, 3, 12).unwrap();
    assert_eq!(page.pagination.page, 1);
    assert_eq!(page.pagination.total_pages, 0);
    assert!(page.items.is_empty());
}
