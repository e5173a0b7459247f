//! Deriving on-path and expanded state from a location.
//!
//! A node is **on path** when its [`SlugChain`] is a positional prefix of the
//! [`CurrentLocation`]. Because a child's chain always extends its parent's,
//! a child can only be on path when its parent is, so the matcher walks the
//! forest top-down and never looks below a node that is off path.
//!
//! # Example
//!
//! For the location `["dien-thoai", "iphone"]`:
//!
//! ```text
//! dien-thoai      on_path  expanded
//!   iphone        on_path
//!   samsung       -
//! laptop          -        (children not evaluated)
//! ```
//!
//! ```
//! use category_navigator::{CategoryNode, CurrentLocation, TreeMatcher};
//!
//! let forest = vec![CategoryNode::new(1, "Phones", "dien-thoai").with_children(vec![
//!     CategoryNode::new(2, "iPhone", "iphone"),
//!     CategoryNode::new(3, "Samsung", "samsung"),
//! ])];
//! let location: CurrentLocation = ["dien-thoai", "iphone"].into_iter().collect();
//!
//! let tree = TreeMatcher::new(&location).match_forest(&forest);
//! assert!(tree[0].on_path && tree[0].expanded);
//! assert!(tree[0].children[0].on_path);
//! assert!(!tree[0].children[1].on_path);
//! ```

use crate::{trace_log, CategoryNode, CurrentLocation, ItemId, SlugChain};

/// True iff `chain` equals the first `chain.len()` segments of `location`.
///
/// A location shorter than the chain is a mismatch.
pub fn is_on_path(chain: &SlugChain, location: &CurrentLocation) -> bool {
    chain
        .segments()
        .iter()
        .enumerate()
        .all(|(i, slug)| location.get(i) == Some(slug.as_str()))
}

/// Whether a node shows its children.
///
/// Equivalent to [`is_on_path`]: requiring `chain.len() <= location.len()`
/// on top adds nothing, since `is_on_path` already fails for any chain longer
/// than the location.
pub fn is_expanded(chain: &SlugChain, location: &CurrentLocation) -> bool {
    is_on_path(chain, location)
}

/// Match state of one node, with its matched children.
#[derive(Debug, Clone)]
pub struct NodeMatch<'a> {
    /// The category this entry describes
    pub node: &'a CategoryNode,
    /// Chain from the root down to `node`
    pub chain: SlugChain,
    /// `chain` is a prefix of the location
    pub on_path: bool,
    /// The node shows its children
    pub expanded: bool,
    /// The node has children, so the renderer offers an expand affordance.
    /// Leaves never do, whatever their match state.
    pub expandable: bool,
    /// Matched children. Empty unless the node is on path.
    pub children: Vec<NodeMatch<'a>>,
}

impl<'a> NodeMatch<'a> {
    /// Whether the renderer should draw the children list open.
    pub fn shows_children(&self) -> bool {
        self.expandable && self.expanded
    }

    /// Depth in the forest, 0 for roots.
    pub fn depth(&self) -> usize {
        self.chain.len().saturating_sub(1)
    }
}

/// One level of the [`ActiveTrail`].
#[derive(Debug, Clone)]
pub struct TrailEntry<'a> {
    /// The on-path node at this level
    pub node: &'a CategoryNode,
    /// Its chain
    pub chain: SlugChain,
    /// 0 for the root category
    pub depth: usize,
}

/// The on-path nodes, root first, down to the deepest match.
///
/// This is what breadcrumbs render.
#[derive(Debug, Clone, Default)]
pub struct ActiveTrail<'a> {
    entries: Vec<TrailEntry<'a>>,
    location_len: usize,
}

impl<'a> ActiveTrail<'a> {
    /// Entry at a specific depth
    pub fn at_depth(&self, depth: usize) -> Option<&TrailEntry<'a>> {
        self.entries.get(depth)
    }

    /// The root category of the trail
    pub fn root(&self) -> Option<&TrailEntry<'a>> {
        self.entries.first()
    }

    /// The deepest matched category, i.e. the selected one
    pub fn selected(&self) -> Option<&TrailEntry<'a>> {
        self.entries.last()
    }

    /// All entries
    pub fn entries(&self) -> &[TrailEntry<'a>] {
        &self.entries
    }

    /// Number of matched levels
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No category matched
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every location segment was matched by a category.
    ///
    /// False when the location names a slug that does not exist under the
    /// deepest match.
    pub fn is_exact(&self) -> bool {
        !self.entries.is_empty() && self.entries.len() == self.location_len
    }

    /// Display names from root to selected.
    pub fn names(&self) -> Vec<&'a str> {
        self.entries
            .iter()
            .map(|e| e.node.category_name.as_str())
            .collect()
    }
}

/// Computes match state for a forest against one location.
///
/// Borrowing the location keeps the matcher a pure function of its inputs:
/// a new location means a new matcher.
#[derive(Debug, Clone, Copy)]
pub struct TreeMatcher<'l> {
    location: &'l CurrentLocation,
    include_inactive: bool,
}

impl<'l> TreeMatcher<'l> {
    /// Create a matcher for `location`. Inactive categories are skipped.
    pub fn new(location: &'l CurrentLocation) -> Self {
        Self {
            location,
            include_inactive: false,
        }
    }

    /// Also match categories with `is_active == false`.
    pub fn include_inactive(mut self, include: bool) -> Self {
        self.include_inactive = include;
        self
    }

    /// The location being matched against.
    pub fn location(&self) -> &'l CurrentLocation {
        self.location
    }

    fn visible(&self, node: &CategoryNode) -> bool {
        self.include_inactive || node.is_active
    }

    /// Match every root of `forest`, recursing only into on-path nodes.
    ///
    /// Recursion depth is bounded by the location length plus one, since
    /// only on-path nodes are descended into.
    pub fn match_forest<'a>(&self, forest: &'a [CategoryNode]) -> Vec<NodeMatch<'a>> {
        self.match_level(forest, None)
    }

    fn match_level<'a>(
        &self,
        nodes: &'a [CategoryNode],
        parent: Option<&SlugChain>,
    ) -> Vec<NodeMatch<'a>> {
        nodes
            .iter()
            .filter(|node| self.visible(node))
            .map(|node| {
                let chain = parent.map_or_else(
                    || SlugChain::root(node.slug.as_str()),
                    |p| p.child(node.slug.as_str()),
                );
                let on_path = is_on_path(&chain, self.location);
                let expanded = is_expanded(&chain, self.location);

                trace_log!("Node '{}' on_path={} expanded={}", chain, on_path, expanded);

                let children = if on_path && node.has_children() {
                    self.match_level(&node.children, Some(&chain))
                } else {
                    Vec::new()
                };

                NodeMatch {
                    node,
                    expandable: node.has_children(),
                    chain,
                    on_path,
                    expanded,
                    children,
                }
            })
            .collect()
    }

    /// Follow the location down the forest and collect the on-path nodes.
    ///
    /// Slugs are unique among siblings, so each level has at most one
    /// on-path node.
    pub fn active_trail<'a>(&self, forest: &'a [CategoryNode]) -> ActiveTrail<'a> {
        let mut trail = ActiveTrail {
            entries: Vec::new(),
            location_len: self.location.len(),
        };
        let mut level = forest;
        let mut chain = SlugChain::new();

        for (depth, segment) in self.location.segments().iter().enumerate() {
            let Some(node) = level
                .iter()
                .find(|n| self.visible(n) && n.slug == *segment)
            else {
                break;
            };
            chain.push(node.slug.as_str());
            trail.entries.push(TrailEntry {
                node,
                chain: chain.clone(),
                depth,
            });
            level = &node.children;
        }

        trail
    }
}

/// Find the node a chain addresses.
pub fn find_by_chain<'a>(forest: &'a [CategoryNode], chain: &SlugChain) -> Option<&'a CategoryNode> {
    let (first, rest) = chain.segments().split_first()?;
    let mut node = forest.iter().find(|n| n.slug == *first)?;
    for slug in rest {
        node = node.children.iter().find(|n| n.slug == *slug)?;
    }
    Some(node)
}

/// Build the chain of the node with the given id.
pub fn chain_of(forest: &[CategoryNode], id: ItemId) -> Option<SlugChain> {
    fn walk(nodes: &[CategoryNode], id: ItemId, chain: &mut SlugChain) -> bool {
        for node in nodes {
            chain.push(node.slug.as_str());
            if node.id == id || walk(&node.children, id, chain) {
                return true;
            }
            chain.pop();
        }
        false
    }

    let mut chain = SlugChain::new();
    walk(forest, id, &mut chain).then_some(chain)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(segments: &[&str]) -> CurrentLocation {
        segments.iter().copied().collect()
    }

    fn chain(segments: &[&str]) -> SlugChain {
        segments.iter().copied().collect()
    }

    fn forest() -> Vec<CategoryNode> {
        vec![
            CategoryNode::new(1, "Phones", "dien-thoai").with_children(vec![
                CategoryNode::new(2, "iPhone", "iphone")
                    .with_children(vec![CategoryNode::new(5, "iPhone 15", "15")]),
                CategoryNode::new(3, "Samsung", "samsung"),
            ]),
            CategoryNode::new(4, "Laptops", "laptop")
                .with_children(vec![CategoryNode::new(6, "Mac", "mac")]),
        ]
    }

    #[test]
    fn test_on_path_prefix() {
        assert!(is_on_path(&chain(&["a"]), &loc(&["a", "b"])));
        assert!(is_on_path(&chain(&["a", "b"]), &loc(&["a", "b"])));
        assert!(!is_on_path(&chain(&["a", "c"]), &loc(&["a", "b"])));
        assert!(!is_on_path(&chain(&["b"]), &loc(&["a", "b"])));
    }

    #[test]
    fn test_on_path_longer_chain_is_mismatch() {
        assert!(!is_on_path(&chain(&["a", "b", "c"]), &loc(&["a", "b"])));
        assert!(!is_on_path(&chain(&["a"]), &loc(&[])));
    }

    #[test]
    fn test_expanded_equals_on_path() {
        let locations = [loc(&[]), loc(&["a"]), loc(&["a", "b"]), loc(&["x", "b"])];
        let chains = [
            chain(&["a"]),
            chain(&["a", "b"]),
            chain(&["a", "b", "c"]),
            chain(&["b"]),
        ];
        for l in &locations {
            for c in &chains {
                assert_eq!(is_expanded(c, l), is_on_path(c, l), "{c} vs {l:?}");
            }
        }
    }

    #[test]
    fn test_match_forest_prunes_off_path_subtrees() {
        let forest = forest();
        let location = loc(&["dien-thoai"]);
        let tree = TreeMatcher::new(&location).match_forest(&forest);

        assert!(tree[0].on_path);
        assert_eq!(tree[0].children.len(), 2);
        // iphone is off path, so its own children are not evaluated
        assert!(!tree[0].children[0].on_path);
        assert!(tree[0].children[0].children.is_empty());
        assert!(tree[0].children[0].expandable);
        // laptop is off path
        assert!(!tree[1].on_path);
        assert!(tree[1].children.is_empty());
    }

    #[test]
    fn test_leaf_never_expandable() {
        let forest = forest();
        let location = loc(&["dien-thoai", "samsung"]);
        let tree = TreeMatcher::new(&location).match_forest(&forest);
        let samsung = &tree[0].children[1];

        assert!(samsung.on_path);
        assert!(samsung.expanded);
        assert!(!samsung.expandable);
        assert!(!samsung.shows_children());
        assert_eq!(samsung.depth(), 1);
    }

    #[test]
    fn test_inactive_nodes_skipped() {
        let forest = vec![
            CategoryNode::new(1, "Hidden", "hidden").inactive(),
            CategoryNode::new(2, "Shown", "shown"),
        ];
        let location = loc(&["hidden"]);

        let tree = TreeMatcher::new(&location).match_forest(&forest);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].node.slug, "shown");

        let all = TreeMatcher::new(&location)
            .include_inactive(true)
            .match_forest(&forest);
        assert_eq!(all.len(), 2);
        assert!(all[0].on_path);

        assert!(TreeMatcher::new(&location).active_trail(&forest).is_empty());
    }

    #[test]
    fn test_active_trail() {
        let forest = forest();
        let location = loc(&["dien-thoai", "iphone", "15"]);
        let trail = TreeMatcher::new(&location).active_trail(&forest);

        assert_eq!(trail.len(), 3);
        assert!(trail.is_exact());
        assert_eq!(trail.names(), vec!["Phones", "iPhone", "iPhone 15"]);
        assert_eq!(trail.selected().unwrap().chain.to_string(), "dien-thoai/iphone/15");
        assert_eq!(trail.root().unwrap().node.id, 1);
        assert_eq!(trail.at_depth(1).unwrap().depth, 1);
    }

    #[test]
    fn test_active_trail_partial() {
        let forest = forest();
        let location = loc(&["dien-thoai", "nokia"]);
        let trail = TreeMatcher::new(&location).active_trail(&forest);

        assert_eq!(trail.len(), 1);
        assert!(!trail.is_exact());
    }

    #[test]
    fn test_find_by_chain() {
        let forest = forest();
        let node = find_by_chain(&forest, &chain(&["dien-thoai", "iphone", "15"])).unwrap();
        assert_eq!(node.id, 5);
        assert!(find_by_chain(&forest, &chain(&["laptop", "iphone"])).is_none());
        assert!(find_by_chain(&forest, &SlugChain::new()).is_none());
    }

    #[test]
    fn test_chain_of() {
        let forest = forest();
        assert_eq!(chain_of(&forest, 5).unwrap().to_string(), "dien-thoai/iphone/15");
        assert_eq!(chain_of(&forest, 6).unwrap().to_string(), "laptop/mac");
        assert_eq!(chain_of(&forest, 4).unwrap().to_string(), "laptop");
        assert!(chain_of(&forest, 99).is_none());
    }
}
