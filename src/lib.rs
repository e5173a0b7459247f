//! Category navigation for storefront and admin tools.
//!
//! This crate derives everything a category sidebar and a link-target picker
//! need from two inputs: the category forest and the active location.
//!
//! - [`PathResolver`] turns a raw location into a [`CurrentLocation`].
//! - [`TreeMatcher`] marks which nodes are on the current path and expanded,
//!   descending only into on-path nodes.
//! - [`NavigationController`] turns a selected node's [`SlugChain`] into one
//!   navigation request under `/category/`.
//! - [`TargetPicker`] and [`TargetSearchIndex`] filter categories or
//!   products by a debounced keyword and page the product list.
//!
//! Rendering, data retrieval and the timer itself belong to the embedder:
//! providers are traits, the route changer is a trait, and time is passed in
//! as [`Instant`](std::time::Instant) values.
//!
//! # Example
//!
//! ```
//! use category_navigator::{
//!     CategoryNode, NavigationController, PathResolver, TreeMatcher,
//! };
//!
//! let forest = vec![CategoryNode::new(1, "Dien thoai", "dien-thoai").with_children(vec![
//!     CategoryNode::new(2, "iPhone", "iphone"),
//!     CategoryNode::new(3, "Samsung", "samsung"),
//! ])];
//!
//! let location = PathResolver::default().resolve("/category/dien-thoai/iphone");
//! let tree = TreeMatcher::new(&location).match_forest(&forest);
//! assert!(tree[0].on_path);
//! assert!(!tree[0].children[1].on_path);
//!
//! let mut requested = Vec::new();
//! let mut nav = NavigationController::new(|path: &str| requested.push(path.to_owned()));
//! nav.select_match(&tree[0].children[1]);
//! drop(nav);
//! assert_eq!(requested, ["/category/dien-thoai/samsung"]);
//! ```
//!
//! # Features
//!
//! | Feature   | Default | Effect                                   |
//! |-----------|---------|------------------------------------------|
//! | `log`     | yes     | log through the `log` crate              |
//! | `tracing` | no      | log through the `tracing` crate instead  |
//! | `cache`   | yes     | LRU cache of picker filter passes        |

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod logging;

#[cfg(feature = "cache")]
pub mod cache;
pub mod config;
pub mod debounce;
pub mod error;
pub mod location;
pub mod matching;
pub mod model;
pub mod navigation;
pub mod picker;
pub mod search;

pub use config::NavigatorConfig;
pub use debounce::Debouncer;
pub use error::{
    FetchOutcome, NavigationOutcome, NavigatorError, ProviderError, ProviderErrorKind,
};
pub use location::{normalize_path, split_path, CurrentLocation, PathResolver};
pub use matching::{
    chain_of, find_by_chain, is_expanded, is_on_path, ActiveTrail, NodeMatch, TrailEntry,
    TreeMatcher,
};
pub use model::{CategoryNode, ItemId, ProductItem, ProductList, SlugChain, TargetItem};
pub use navigation::{category_route, NavigationController, RouteChanger};
pub use picker::{
    CategoryProvider, FetchTicket, Freshness, GroupRow, LoadState, ModeConfig, ModeKind,
    PickerData, PickerMode, PickerView, ProductProvider, QueryKey, TargetPicker,
};
pub use search::{
    CategoryGroup, FilterMatches, GroupMatch, Pagination, ProductPage, TargetSearchIndex,
};
