//! Category and product data as delivered by the providers.
//!
//! The types here are plain owned values. A category forest is a
//! `Vec<CategoryNode>` where every node exclusively owns its `children`;
//! `parent_id` is a back-reference for display only and is never followed
//! when walking the tree.
//!
//! Field names follow the providers' JSON (`categoryName`, `parentId`,
//! `isActive`), so payloads decode with `serde_json` directly:
//!
//! ```
//! use category_navigator::CategoryNode;
//!
//! let json = r#"{"id": 1, "categoryName": "Phones", "slug": "phones"}"#;
//! let node: CategoryNode = serde_json::from_str(json).unwrap();
//! assert!(node.is_active);
//! assert!(node.children.is_empty());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a category or product.
pub type ItemId = u64;

fn default_active() -> bool {
    true
}

/// One node of the category taxonomy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryNode {
    /// Unique key of the category.
    pub id: ItemId,
    /// Display name.
    pub category_name: String,
    /// URL-safe token, unique among siblings.
    pub slug: String,
    /// Optional image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Informational link to the parent category.
    #[serde(default)]
    pub parent_id: Option<ItemId>,
    /// Ordered child categories.
    #[serde(default)]
    pub children: Vec<CategoryNode>,
    /// Visibility flag. Missing in the payload means visible.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl CategoryNode {
    /// Create an active leaf category.
    pub fn new(id: ItemId, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id,
            category_name: name.into(),
            slug: slug.into(),
            image: None,
            parent_id: None,
            children: Vec::new(),
            is_active: true,
        }
    }

    /// Attach children, pointing their `parent_id` at this node.
    pub fn with_children(mut self, children: Vec<CategoryNode>) -> Self {
        self.children = children
            .into_iter()
            .map(|mut child| {
                child.parent_id = Some(self.id);
                child
            })
            .collect();
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Mark the category hidden.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Whether the node has any children at all.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Ordered slugs from a root category down to one node.
///
/// A chain is the node's canonical route key: two nodes with the same slug
/// in unrelated branches still have distinct chains.
///
/// ```
/// use category_navigator::SlugChain;
///
/// let phones = SlugChain::root("dien-thoai");
/// let iphone = phones.child("iphone");
///
/// assert_eq!(iphone.to_string(), "dien-thoai/iphone");
/// assert_eq!(iphone.parent(), Some(phones.clone()));
/// assert!(phones.is_prefix_of(iphone.segments()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlugChain {
    slugs: Vec<String>,
}

impl SlugChain {
    /// An empty chain. It addresses no node.
    pub fn new() -> Self {
        Self::default()
    }

    /// A chain holding a single root slug.
    pub fn root(slug: impl Into<String>) -> Self {
        Self {
            slugs: vec![slug.into()],
        }
    }

    /// Extend this chain by one level, returning the child's chain.
    pub fn child(&self, slug: impl Into<String>) -> Self {
        let mut slugs = Vec::with_capacity(self.slugs.len() + 1);
        slugs.extend(self.slugs.iter().cloned());
        slugs.push(slug.into());
        Self { slugs }
    }

    /// Append a slug in place.
    pub fn push(&mut self, slug: impl Into<String>) {
        self.slugs.push(slug.into());
    }

    /// Remove and return the last slug.
    pub fn pop(&mut self) -> Option<String> {
        self.slugs.pop()
    }

    /// The chain of the parent node, or `None` for roots and the empty chain.
    pub fn parent(&self) -> Option<Self> {
        match self.slugs.len() {
            0 | 1 => None,
            n => Some(Self {
                slugs: self.slugs[..n - 1].to_vec(),
            }),
        }
    }

    /// The slugs, root first.
    pub fn segments(&self) -> &[String] {
        &self.slugs
    }

    /// The node's own slug.
    pub fn last(&self) -> Option<&str> {
        self.slugs.last().map(String::as_str)
    }

    /// Number of slugs.
    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    /// True for the empty chain.
    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }

    /// Whether every slug equals the segment at the same position in `segments`.
    ///
    /// A chain longer than `segments` is never a prefix.
    pub fn is_prefix_of(&self, segments: &[String]) -> bool {
        self.slugs.len() <= segments.len()
            && self
                .slugs
                .iter()
                .zip(segments.iter())
                .all(|(slug, segment)| slug == segment)
    }

    /// Join the slugs with `separator`.
    pub fn join(&self, separator: &str) -> String {
        self.slugs.join(separator)
    }
}

impl fmt::Display for SlugChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join("/"))
    }
}

impl<S: Into<String>> FromIterator<S> for SlugChain {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            slugs: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Vec<String>> for SlugChain {
    fn from(slugs: Vec<String>) -> Self {
        Self { slugs }
    }
}

/// A product as returned by the flat product listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItem {
    /// Unique key of the product.
    pub id: ItemId,
    /// URL-safe token.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Optional image URL.
    #[serde(default)]
    pub image: Option<String>,
}

impl ProductItem {
    /// Create a product without an image.
    pub fn new(id: ItemId, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id,
            slug: slug.into(),
            name: name.into(),
            image: None,
        }
    }
}

/// One response of the product listing.
///
/// `total` is what the backend reports; it can exceed `items.len()` when the
/// listing was capped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductList {
    /// The fetched products.
    #[serde(default)]
    pub items: Vec<ProductItem>,
    /// Total number of products known to the backend.
    #[serde(default)]
    pub total: usize,
}

/// What the picker hands to `on_select`: a flattened category or product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetItem {
    /// Slug of the picked category or product.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Optional image URL.
    #[serde(default)]
    pub image: Option<String>,
}

impl From<&CategoryNode> for TargetItem {
    fn from(node: &CategoryNode) -> Self {
        Self {
            slug: node.slug.clone(),
            name: node.category_name.clone(),
            image: node.image.clone(),
        }
    }
}

impl From<&ProductItem> for TargetItem {
    fn from(item: &ProductItem) -> Self {
        Self {
            slug: item.slug.clone(),
            name: item.name.clone(),
            image: item.image.clone(),
        }
    }
}
