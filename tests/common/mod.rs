//! Test utilities shared by the integration suites
//!
//! Provides fixture forests, product listings, a recording route changer and
//! assertion helpers.

#![allow(dead_code)]

use category_navigator::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Route test logs to the test harness. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a location from literal segments
pub fn loc(segments: &[&str]) -> CurrentLocation {
    segments.iter().copied().collect()
}

/// Build a slug chain from literal segments
pub fn chain(segments: &[&str]) -> SlugChain {
    segments.iter().copied().collect()
}

/// Shorthand for a millisecond duration
pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// The two-level storefront forest used across the suites
pub fn storefront_forest() -> Vec<CategoryNode> {
    vec![
        CategoryNode::new(1, "Dien thoai", "dien-thoai").with_children(vec![
            CategoryNode::new(11, "iPhone", "iphone"),
            CategoryNode::new(12, "Samsung", "samsung"),
        ]),
        CategoryNode::new(2, "Laptop", "laptop").with_children(vec![
            CategoryNode::new(21, "MacBook", "macbook"),
            CategoryNode::new(22, "Gaming laptop", "gaming"),
        ]),
        CategoryNode::new(3, "Phu kien", "phu-kien").with_children(vec![
            CategoryNode::new(31, "Op lung iPhone", "op-lung"),
            CategoryNode::new(32, "Sac du phong", "sac"),
        ]),
    ]
}

/// A deeper forest where the slug "sale" repeats in unrelated branches
pub fn deep_forest() -> Vec<CategoryNode> {
    vec![
        CategoryNode::new(1, "Phones", "phones").with_children(vec![
            CategoryNode::new(2, "Apple", "apple").with_children(vec![
                CategoryNode::new(3, "iPhone 15", "iphone-15"),
                CategoryNode::new(4, "Sale", "sale"),
            ]),
            CategoryNode::new(5, "Sale", "sale"),
        ]),
        CategoryNode::new(6, "Sale", "sale"),
    ]
}

/// `n` products named "Product 0" .. "Product n-1"
pub fn product_list(n: usize) -> ProductList {
    ProductList {
        items: (0..n)
            .map(|i| ProductItem::new(i as u64, format!("Product {i}"), format!("product-{i}")))
            .collect(),
        total: n,
    }
}

/// Route changer that records every requested path
#[derive(Debug, Clone, Default)]
pub struct RecordingRouter {
    pub paths: Rc<RefCell<Vec<String>>>,
}

impl RecordingRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recorded(&self) -> Vec<String> {
        self.paths.borrow().clone()
    }
}

impl RouteChanger for RecordingRouter {
    fn navigate(&mut self, path: &str) {
        self.paths.borrow_mut().push(path.to_string());
    }
}

/// Collect every node match into a flat `(chain, on_path)` list
pub fn flatten(matches: &[NodeMatch<'_>]) -> Vec<(String, bool)> {
    let mut out = Vec::new();
    for m in matches {
        out.push((m.chain.to_string(), m.on_path));
        out.extend(flatten(&m.children));
    }
    out
}

/// Assert that no node in the matched tree is on path
pub fn assert_fully_collapsed(matches: &[NodeMatch<'_>]) {
    for m in matches {
        assert!(!m.on_path, "'{}' should not be on path", m.chain);
        assert!(!m.shows_children(), "'{}' should be collapsed", m.chain);
        assert!(m.children.is_empty(), "'{}' children should be pruned", m.chain);
    }
}
