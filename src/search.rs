//! Keyword filtering and pagination behind the target picker.
//!
//! The index holds one immutable data snapshot and answers filter queries
//! against it. Results are index lists into the snapshot
//! ([`FilterMatches`]), so they are cheap to cache and to resolve into
//! borrowed views later.
//!
//! # Category mode
//!
//! Works on a two-level forest. For keyword `K`:
//!
//! - a parent is kept iff its own name matches `K` or one of its children does;
//! - a kept parent lists only its matching children.
//!
//! # Product mode
//!
//! Works on a flat list. Items whose name matches are paged with
//! [`Pagination`], which clamps the requested page into range.
//!
//! Matching is a case-insensitive substring test on the trimmed keyword; an
//! empty keyword matches everything.
//!
//! ```
//! use category_navigator::{CategoryNode, TargetSearchIndex};
//!
//! let index = TargetSearchIndex::categories(vec![
//!     CategoryNode::new(1, "Phones", "phones").with_children(vec![
//!         CategoryNode::new(2, "iPhone", "iphone"),
//!         CategoryNode::new(3, "Samsung", "samsung"),
//!     ]),
//! ]);
//!
//! let matches = index.filter("IPHONE");
//! let groups = index.category_groups(&matches);
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].children.len(), 1);
//! assert_eq!(groups[0].children[0].slug, "iphone");
//! ```

use crate::{debug_log, CategoryNode, ProductItem, ProductList};
use std::ops::Range;
use std::sync::Arc;

/// Normalize a keyword for matching: trimmed and lowercased.
pub fn normalize_keyword(keyword: &str) -> String {
    keyword.trim().to_lowercase()
}

/// Case-insensitive substring test. `needle` must already be normalized.
fn contains_normalized(name: &str, needle: &str) -> bool {
    needle.is_empty() || name.to_lowercase().contains(needle)
}

/// Case-insensitive substring test of `keyword` against `name`.
///
/// ```
/// use category_navigator::search::matches_keyword;
///
/// assert!(matches_keyword("Dien Thoai", "thoai"));
/// assert!(matches_keyword("Dien Thoai", "  DIEN "));
/// assert!(matches_keyword("anything", ""));
/// assert!(!matches_keyword("Laptop", "phone"));
/// ```
pub fn matches_keyword(name: &str, keyword: &str) -> bool {
    contains_normalized(name, &normalize_keyword(keyword))
}

/// A kept parent and the positions of its visible children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMatch {
    /// Position of the parent in the forest
    pub parent: usize,
    /// Positions of matching children within the parent's `children`
    pub children: Vec<usize>,
}

/// Result of one filter pass, as positions into the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterMatches {
    /// Kept parents with their visible children
    Categories(Vec<GroupMatch>),
    /// Matching product positions, in list order
    Products(Vec<usize>),
}

impl FilterMatches {
    /// Number of top-level matches (parents or products).
    pub fn len(&self) -> usize {
        match self {
            FilterMatches::Categories(groups) => groups.len(),
            FilterMatches::Products(items) => items.len(),
        }
    }

    /// Nothing matched.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Filter a two-level forest by keyword.
pub fn filter_categories(forest: &[CategoryNode], keyword: &str) -> Vec<GroupMatch> {
    let needle = normalize_keyword(keyword);

    forest
        .iter()
        .enumerate()
        .filter_map(|(parent, node)| {
            let children: Vec<usize> = node
                .children
                .iter()
                .enumerate()
                .filter(|(_, child)| contains_normalized(&child.category_name, &needle))
                .map(|(i, _)| i)
                .collect();

            let keep = contains_normalized(&node.category_name, &needle) || !children.is_empty();
            keep.then_some(GroupMatch { parent, children })
        })
        .collect()
}

/// Filter a flat product list by keyword.
pub fn filter_products(items: &[ProductItem], keyword: &str) -> Vec<usize> {
    let needle = normalize_keyword(keyword);

    items
        .iter()
        .enumerate()
        .filter(|(_, item)| contains_normalized(&item.name, &needle))
        .map(|(i, _)| i)
        .collect()
}

/// `ceil(count / page_size)`. A zero page size counts as one.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Clamp a requested page into `[1, total_pages]`, or to 1 when there are no
/// pages.
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

/// One page of a filtered list.
///
/// ```
/// use category_navigator::Pagination;
///
/// let pagination = Pagination::new(37, 12, 5);
/// assert_eq!(pagination.total_pages, 4);
/// assert_eq!(pagination.page, 4);
/// assert_eq!(pagination.range(), 36..37);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Current page, 1-based; [`Pagination::new`] clamps it into range
    pub page: usize,
    /// Items per page
    pub page_size: usize,
    /// Items across all pages
    pub total_items: usize,
    /// Number of pages, 0 when there are no items
    pub total_pages: usize,
}

impl Pagination {
    /// Compute pagination for `total_items`, clamping `requested_page`.
    pub fn new(total_items: usize, page_size: usize, requested_page: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_pages(total_items, page_size);
        Self {
            page: clamp_page(requested_page, total_pages),
            page_size,
            total_items,
            total_pages,
        }
    }

    /// Positions of this page's items within the filtered list.
    pub fn range(&self) -> Range<usize> {
        let start = self
            .page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .min(self.total_items);
        let end = start.saturating_add(self.page_size).min(self.total_items);
        start..end
    }

    /// There is a page after this one.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// There is a page before this one.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// A kept parent with its visible children, borrowed from the snapshot.
#[derive(Debug, Clone)]
pub struct CategoryGroup<'a> {
    /// The parent category
    pub parent: &'a CategoryNode,
    /// Children that matched the keyword
    pub children: Vec<&'a CategoryNode>,
}

/// One page of matching products, borrowed from the snapshot.
#[derive(Debug, Clone)]
pub struct ProductPage<'a> {
    /// Products on this page
    pub items: Vec<&'a ProductItem>,
    /// Where this page sits
    pub pagination: Pagination,
}

/// Immutable data snapshot plus the queries the picker runs on it.
///
/// Cloning is cheap: the data is shared behind an `Arc`. A new fetch builds
/// a new index instead of mutating this one.
#[derive(Debug, Clone)]
pub enum TargetSearchIndex {
    /// Two-level category forest
    Categories(Arc<[CategoryNode]>),
    /// Flat product list with the backend-reported total
    Products {
        /// Fetched products
        items: Arc<[ProductItem]>,
        /// Total the backend reported
        reported_total: usize,
    },
}

impl TargetSearchIndex {
    /// Index a category forest.
    pub fn categories(forest: Vec<CategoryNode>) -> Self {
        TargetSearchIndex::Categories(forest.into())
    }

    /// Index a product listing.
    pub fn products(list: ProductList) -> Self {
        TargetSearchIndex::Products {
            items: list.items.into(),
            reported_total: list.total,
        }
    }

    /// Number of top-level entries (parents or products) in the snapshot.
    pub fn len(&self) -> usize {
        match self {
            TargetSearchIndex::Categories(forest) => forest.len(),
            TargetSearchIndex::Products { items, .. } => items.len(),
        }
    }

    /// The snapshot holds nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run one filter pass.
    pub fn filter(&self, keyword: &str) -> FilterMatches {
        let matches = match self {
            TargetSearchIndex::Categories(forest) => {
                FilterMatches::Categories(filter_categories(forest, keyword))
            }
            TargetSearchIndex::Products { items, .. } => {
                FilterMatches::Products(filter_products(items, keyword))
            }
        };
        debug_log!(
            "Filter pass for keyword '{}': {} of {} entries kept",
            keyword,
            matches.len(),
            self.len()
        );
        matches
    }

    /// Resolve category matches into borrowed groups.
    ///
    /// Returns nothing for a product index or for product matches.
    pub fn category_groups(&self, matches: &FilterMatches) -> Vec<CategoryGroup<'_>> {
        let (TargetSearchIndex::Categories(forest), FilterMatches::Categories(groups)) =
            (self, matches)
        else {
            return Vec::new();
        };

        groups
            .iter()
            .filter_map(|group| {
                let parent = forest.get(group.parent)?;
                let children = group
                    .children
                    .iter()
                    .filter_map(|&i| parent.children.get(i))
                    .collect();
                Some(CategoryGroup { parent, children })
            })
            .collect()
    }

    /// Resolve product matches into one clamped page.
    ///
    /// Returns `None` for a category index or for category matches.
    pub fn product_page(
        &self,
        matches: &FilterMatches,
        page: usize,
        page_size: usize,
    ) -> Option<ProductPage<'_>> {
        let (TargetSearchIndex::Products { items, .. }, FilterMatches::Products(positions)) =
            (self, matches)
        else {
            return None;
        };

        let pagination = Pagination::new(positions.len(), page_size, page);
        let page_items = positions[pagination.range()]
            .iter()
            .filter_map(|&i| items.get(i))
            .collect();

        Some(ProductPage {
            items: page_items,
            pagination,
        })
    }

    /// Total the backend reported for a product index.
    pub fn reported_total(&self) -> Option<usize> {
        match self {
            TargetSearchIndex::Categories(_) => None,
            TargetSearchIndex::Products { reported_total, .. } => Some(*reported_total),
        }
    }
}
