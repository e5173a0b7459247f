//! Turning a category selection into one navigation request.
//!
//! Selecting a node joins its ancestor-inclusive [`SlugChain`] with `/` and
//! asks the [`RouteChanger`] to navigate to `"<prefix>/" + joined`. An empty
//! chain requests nothing. Tree data is never touched.
//!
//! ```
//! use category_navigator::{NavigationController, SlugChain};
//!
//! let mut visited = Vec::new();
//! let mut nav = NavigationController::new(|path: &str| visited.push(path.to_string()));
//!
//! let outcome = nav.select_chain(&SlugChain::root("dien-thoai").child("iphone"));
//! assert_eq!(outcome.path(), Some("/category/dien-thoai/iphone"));
//!
//! assert!(nav.select_chain(&SlugChain::new()).is_ignored());
//! drop(nav);
//! assert_eq!(visited, vec!["/category/dien-thoai/iphone"]);
//! ```

use crate::error::{NavigationOutcome, NavigatorError};
use crate::matching::NodeMatch;
use crate::{debug_log, CategoryNode, NavigatorConfig, SlugChain};

/// Receives navigation requests.
///
/// Implemented for any `FnMut(&str)`, so a closure is enough for simple
/// embedders and tests.
pub trait RouteChanger {
    /// Request a location change to `path`.
    fn navigate(&mut self, path: &str);
}

impl<F> RouteChanger for F
where
    F: FnMut(&str),
{
    fn navigate(&mut self, path: &str) {
        self(path);
    }
}

/// Build the route for a chain, or `None` if the chain names nothing.
///
/// Every slug is kept in place, so distinct chains never share a route. A
/// chain with no slugs, or with only empty slugs, names nothing.
///
/// ```
/// use category_navigator::{category_route, SlugChain};
///
/// let chain = SlugChain::root("a").child("b");
/// assert_eq!(category_route("/category", &chain).as_deref(), Some("/category/a/b"));
/// assert_eq!(category_route("/", &chain).as_deref(), Some("/a/b"));
/// assert_eq!(category_route("/category", &SlugChain::new()), None);
/// assert_eq!(category_route("/category", &SlugChain::root("")), None);
/// ```
pub fn category_route(prefix: &str, chain: &SlugChain) -> Option<String> {
    if chain.segments().iter().all(String::is_empty) {
        return None;
    }

    let prefix = prefix.trim_end_matches('/');
    Some(format!("{prefix}/{}", chain.join("/")))
}

/// Sends one navigation request per valid selection.
pub struct NavigationController<R> {
    route_prefix: String,
    changer: R,
}

impl<R: RouteChanger> NavigationController<R> {
    /// Create a controller using the default `/category` prefix.
    pub fn new(changer: R) -> Self {
        Self::with_config(&NavigatorConfig::default(), changer)
    }

    /// Create a controller using [`NavigatorConfig::category_route_prefix`].
    pub fn with_config(config: &NavigatorConfig, changer: R) -> Self {
        Self {
            route_prefix: config.category_route_prefix.clone(),
            changer,
        }
    }

    /// The prefix routes are built under.
    pub fn route_prefix(&self) -> &str {
        &self.route_prefix
    }

    /// The route a chain would navigate to, without navigating.
    pub fn route_for(&self, chain: &SlugChain) -> Option<String> {
        category_route(&self.route_prefix, chain)
    }

    /// Navigate to the node addressed by `chain`.
    pub fn select_chain(&mut self, chain: &SlugChain) -> NavigationOutcome {
        let Some(path) = self.route_for(chain) else {
            debug_log!("Ignoring selection with empty slug chain");
            return NavigationOutcome::Ignored(NavigatorError::InvalidNavigationTarget);
        };

        debug_log!("Navigating to category route: {}", path);
        self.changer.navigate(&path);
        NavigationOutcome::Requested { path }
    }

    /// Navigate to `node`, given the chain of its parent (`None` for roots).
    pub fn select_node(
        &mut self,
        parent: Option<&SlugChain>,
        node: &CategoryNode,
    ) -> NavigationOutcome {
        let chain = parent.map_or_else(
            || SlugChain::root(node.slug.as_str()),
            |p| p.child(node.slug.as_str()),
        );
        self.select_chain(&chain)
    }

    /// Navigate to a node produced by the tree matcher.
    pub fn select_match(&mut self, matched: &NodeMatch<'_>) -> NavigationOutcome {
        self.select_chain(&matched.chain)
    }

    /// Borrow the route changer.
    pub fn changer(&self) -> &R {
        &self.changer
    }

    /// Consume the controller, returning the route changer.
    pub fn into_changer(self) -> R {
        self.changer
    }
}

impl<R> std::fmt::Debug for NavigationController<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationController")
            .field("route_prefix", &self.route_prefix)
            .finish_non_exhaustive()
    }
}
