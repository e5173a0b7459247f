//! The target picker: browse or search categories or products and pick one.
//!
//! A [`TargetPicker`] is built for one [`PickerMode`], chosen once:
//!
//! | Mode       | Data                        | View                                  |
//! |------------|-----------------------------|---------------------------------------|
//! | `Category` | two-level category forest   | parent groups, each collapsible       |
//! | `Product`  | flat list, capped on fetch  | one page of matches                   |
//!
//! # Events
//!
//! Everything runs synchronously in response to one of:
//!
//! - **keystroke**: [`input`](TargetPicker::input) updates the buffer and
//!   restarts the debounce window;
//! - **timer tick**: [`tick`](TargetPicker::tick) applies the buffered
//!   keyword once the window has elapsed, resetting the page to 1;
//! - **data arrival**: [`complete_fetch`](TargetPicker::complete_fetch)
//!   swaps in a new snapshot, unless a newer fetch has started since;
//! - **open / close**: reset the keyword, effective keyword and page
//!   immediately, cancelling any pending timer.
//!
//! # Fetch lifecycle
//!
//! Each [`begin_fetch`](TargetPicker::begin_fetch) issues a [`FetchTicket`]
//! with a fresh generation. Only the ticket of the latest generation can
//! apply its result; older ones come back as
//! [`FetchOutcome::Discarded`]. While a fetch is in flight the previous
//! snapshot stays on screen, marked [`Freshness::Stale`].
//!
//! ```
//! use category_navigator::{
//!     CategoryNode, NavigatorConfig, PickerMode, PickerView, ProviderError, TargetPicker,
//! };
//! use std::time::{Duration, Instant};
//!
//! let mode = PickerMode::category(|| {
//!     Ok::<_, ProviderError>(vec![CategoryNode::new(1, "Phones", "phones").with_children(vec![
//!         CategoryNode::new(2, "iPhone", "iphone"),
//!         CategoryNode::new(3, "Samsung", "samsung"),
//!     ])])
//! });
//! let mut picker = TargetPicker::new(mode, &NavigatorConfig::default());
//! picker.open();
//! assert!(picker.load().is_applied());
//!
//! let t0 = Instant::now();
//! picker.input("sams", t0);
//! picker.tick(t0 + Duration::from_millis(350));
//!
//! let PickerView::Categories { groups, .. } = picker.view() else { unreachable!() };
//! assert_eq!(groups[0].children.len(), 1);
//! ```

#[cfg(feature = "cache")]
use crate::cache::{CacheStats, FilterCache, FilterKey};
use crate::error::{FetchOutcome, NavigatorError, ProviderError};
use crate::search::{
    clamp_page, normalize_keyword, total_pages, FilterMatches, ProductPage, TargetSearchIndex,
};
use crate::{
    debug_log, error_log, info_log, trace_log, warn_log, CategoryNode, Debouncer, ItemId,
    NavigatorConfig, ProductList, TargetItem,
};
use std::collections::HashSet;
use std::fmt;
use std::time::Instant;

// ============================================================================
// Providers
// ============================================================================

/// Supplies the category forest (parents and their direct children).
pub trait CategoryProvider {
    /// Fetch the whole forest.
    fn fetch_forest(&self) -> Result<Vec<CategoryNode>, ProviderError>;
}

impl<F> CategoryProvider for F
where
    F: Fn() -> Result<Vec<CategoryNode>, ProviderError>,
{
    fn fetch_forest(&self) -> Result<Vec<CategoryNode>, ProviderError> {
        self()
    }
}

/// Supplies the flat product list.
pub trait ProductProvider {
    /// Fetch at most `limit` products.
    fn fetch_flat_list(&self, limit: usize) -> Result<ProductList, ProviderError>;
}

impl<F> ProductProvider for F
where
    F: Fn(usize) -> Result<ProductList, ProviderError>,
{
    fn fetch_flat_list(&self, limit: usize) -> Result<ProductList, ProviderError> {
        self(limit)
    }
}

// ============================================================================
// Modes
// ============================================================================

/// Which dataset a picker browses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    /// Category forest
    Category,
    /// Flat product list
    Product,
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeKind::Category => f.write_str("category"),
            ModeKind::Product => f.write_str("product"),
        }
    }
}

/// Display strings for one picker mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeConfig {
    /// Dialog title
    pub title: String,
    /// Icon name shown next to the title
    pub icon: String,
    /// Placeholder of the search box
    pub placeholder: String,
    /// Shown when nothing matches or the data is unavailable
    pub empty_text: String,
}

impl ModeConfig {
    /// Defaults for category mode.
    pub fn category() -> Self {
        Self {
            title: "Select category".to_string(),
            icon: "folder-tree".to_string(),
            placeholder: "Search categories...".to_string(),
            empty_text: "No categories found".to_string(),
        }
    }

    /// Defaults for product mode.
    pub fn product() -> Self {
        Self {
            title: "Select product".to_string(),
            icon: "package".to_string(),
            placeholder: "Search products...".to_string(),
            empty_text: "No products found".to_string(),
        }
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the icon name.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Set the search placeholder.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the empty-state text.
    pub fn empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }
}

/// Picker mode with its display strings and fetch operation.
pub enum PickerMode {
    /// Browse the category forest
    Category {
        config: ModeConfig,
        provider: Box<dyn CategoryProvider>,
    },
    /// Search the product list
    Product {
        config: ModeConfig,
        provider: Box<dyn ProductProvider>,
    },
}

impl PickerMode {
    /// Category mode with default display strings.
    pub fn category(provider: impl CategoryProvider + 'static) -> Self {
        PickerMode::Category {
            config: ModeConfig::category(),
            provider: Box::new(provider),
        }
    }

    /// Product mode with default display strings.
    pub fn product(provider: impl ProductProvider + 'static) -> Self {
        PickerMode::Product {
            config: ModeConfig::product(),
            provider: Box::new(provider),
        }
    }

    /// Replace the display strings.
    pub fn with_config(mut self, new_config: ModeConfig) -> Self {
        match &mut self {
            PickerMode::Category { config, .. } | PickerMode::Product { config, .. } => {
                *config = new_config;
            }
        }
        self
    }

    /// Which dataset this mode browses.
    pub fn kind(&self) -> ModeKind {
        match self {
            PickerMode::Category { .. } => ModeKind::Category,
            PickerMode::Product { .. } => ModeKind::Product,
        }
    }

    /// The display strings.
    pub fn config(&self) -> &ModeConfig {
        match self {
            PickerMode::Category { config, .. } | PickerMode::Product { config, .. } => config,
        }
    }

    fn fetch(&self, cap: usize) -> Result<PickerData, ProviderError> {
        match self {
            PickerMode::Category { provider, .. } => {
                provider.fetch_forest().map(PickerData::Categories)
            }
            PickerMode::Product { provider, .. } => {
                provider.fetch_flat_list(cap).map(PickerData::Products)
            }
        }
    }
}

impl fmt::Debug for PickerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerMode")
            .field("kind", &self.kind())
            .field("config", self.config())
            .finish_non_exhaustive()
    }
}

/// Data delivered by a fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerData {
    /// Category forest
    Categories(Vec<CategoryNode>),
    /// Product listing
    Products(ProductList),
}

impl PickerData {
    /// Which mode the data belongs to.
    pub fn kind(&self) -> ModeKind {
        match self {
            PickerData::Categories(_) => ModeKind::Category,
            PickerData::Products(_) => ModeKind::Product,
        }
    }

    /// No categories or no products.
    pub fn is_empty(&self) -> bool {
        match self {
            PickerData::Categories(forest) => forest.is_empty(),
            PickerData::Products(list) => list.items.is_empty(),
        }
    }
}

// ============================================================================
// Query keys and fetch tickets
// ============================================================================

/// Parameters a fetch was issued for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    /// Picker mode
    pub mode: ModeKind,
    /// Effective keyword at fetch time
    pub keyword: String,
    /// Page at fetch time
    pub page: usize,
}

impl QueryKey {
    /// Create a query key.
    pub fn new(mode: ModeKind, keyword: impl Into<String>, page: usize) -> Self {
        Self {
            mode,
            keyword: keyword.into(),
            page,
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}?keyword={}&page={}", self.mode, self.keyword, self.page)
    }
}

/// Handle for one in-flight fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    key: QueryKey,
    generation: u64,
}

impl FetchTicket {
    /// The query the fetch was issued for.
    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    /// Monotonic fetch counter value.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Where the picker's data stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A fetch is in flight
    Loading,
    /// The latest fetch was applied
    Ready,
    /// The latest fetch failed or returned nothing
    Failed(NavigatorError),
}

impl LoadState {
    /// A fetch is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// The latest fetch was applied.
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready)
    }

    /// The latest fetch failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }
}

/// Whether displayed data is confirmed or left over from before a refetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Result of the latest fetch
    Fresh,
    /// A refetch is in flight; this is the previous snapshot
    Stale,
}

// ============================================================================
// Views
// ============================================================================

/// A parent category in the picker with its visible children.
#[derive(Debug, Clone)]
pub struct GroupRow<'a> {
    /// The parent category
    pub parent: &'a CategoryNode,
    /// Children matching the keyword
    pub children: Vec<&'a CategoryNode>,
    /// The user has not collapsed this group
    pub expanded: bool,
}

/// What the picker should render right now.
#[derive(Debug, Clone)]
pub enum PickerView<'a> {
    /// No data yet
    Loading,
    /// The data could not be loaded
    Unavailable {
        /// Empty-state text of the mode
        message: &'a str,
        /// Why
        error: &'a NavigatorError,
    },
    /// Data is loaded but nothing matches the keyword
    Empty {
        /// Empty-state text of the mode
        message: &'a str,
        /// Whether the data is fresh
        freshness: Freshness,
    },
    /// Category groups
    Categories {
        /// Kept parents, in forest order
        groups: Vec<GroupRow<'a>>,
        /// Whether the data is fresh
        freshness: Freshness,
    },
    /// One page of products
    Products {
        /// The page
        page: ProductPage<'a>,
        /// Whether the data is fresh
        freshness: Freshness,
    },
}

impl PickerView<'_> {
    /// Freshness of the displayed data, if any is displayed.
    pub fn freshness(&self) -> Option<Freshness> {
        match self {
            PickerView::Loading | PickerView::Unavailable { .. } => None,
            PickerView::Empty { freshness, .. }
            | PickerView::Categories { freshness, .. }
            | PickerView::Products { freshness, .. } => Some(*freshness),
        }
    }
}

// ============================================================================
// TargetPicker
// ============================================================================

type SelectHandler = Box<dyn FnMut(&TargetItem)>;
type CloseHandler = Box<dyn FnMut()>;

/// Picker state for one mode.
pub struct TargetPicker {
    mode: PickerMode,
    page_size: usize,
    fetch_cap: usize,
    open: bool,
    input: String,
    keyword: String,
    page: usize,
    debouncer: Debouncer<String>,
    index: Option<TargetSearchIndex>,
    matches: Option<FilterMatches>,
    load_state: LoadState,
    generation: u64,
    collapsed: HashSet<ItemId>,
    filter_passes: usize,
    on_select: Option<SelectHandler>,
    on_close: Option<CloseHandler>,
    #[cfg(feature = "cache")]
    cache: FilterCache,
}

impl TargetPicker {
    /// Create a closed picker for `mode`.
    pub fn new(mode: PickerMode, config: &NavigatorConfig) -> Self {
        Self {
            mode,
            page_size: config.page_size.max(1),
            fetch_cap: config.product_fetch_cap,
            open: false,
            input: String::new(),
            keyword: String::new(),
            page: 1,
            debouncer: Debouncer::new(config.debounce),
            index: None,
            matches: None,
            load_state: LoadState::Idle,
            generation: 0,
            collapsed: HashSet::new(),
            filter_passes: 0,
            on_select: None,
            on_close: None,
            #[cfg(feature = "cache")]
            cache: FilterCache::with_capacity(config.cache_capacity),
        }
    }

    /// Set the callback invoked by [`select`](Self::select).
    pub fn on_select(mut self, handler: impl FnMut(&TargetItem) + 'static) -> Self {
        self.on_select = Some(Box::new(handler));
        self
    }

    /// Set the callback invoked by [`close`](Self::close).
    pub fn on_close(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Which dataset this picker browses.
    pub fn mode_kind(&self) -> ModeKind {
        self.mode.kind()
    }

    /// The mode's display strings.
    pub fn config(&self) -> &ModeConfig {
        self.mode.config()
    }

    /// The picker is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Raw contents of the search box.
    pub fn input_text(&self) -> &str {
        &self.input
    }

    /// The keyword filtering is currently applied with, trimmed and lowercased.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Current page, 1-based.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Products per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Where the data stands.
    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// The current data snapshot.
    pub fn index(&self) -> Option<&TargetSearchIndex> {
        self.index.as_ref()
    }

    /// Matches of the last filter pass.
    pub fn matches(&self) -> Option<&FilterMatches> {
        self.matches.as_ref()
    }

    /// Number of filter passes run since construction.
    pub fn filter_passes(&self) -> usize {
        self.filter_passes
    }

    /// A keyword is waiting for its quiet window.
    pub fn has_pending_input(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// When the pending keyword will apply.
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Statistics of the filter cache.
    #[cfg(feature = "cache")]
    pub fn cache_stats(&self) -> &CacheStats {
        self.cache.stats()
    }

    /// Whether displayed data is confirmed.
    pub fn freshness(&self) -> Freshness {
        if self.load_state.is_loading() && self.index.is_some() {
            Freshness::Stale
        } else {
            Freshness::Fresh
        }
    }

    /// The parameters a fetch issued now would carry.
    pub fn query_key(&self) -> QueryKey {
        QueryKey::new(self.mode.kind(), self.keyword.clone(), self.page)
    }

    // ------------------------------------------------------------------
    // Open / close
    // ------------------------------------------------------------------

    /// Open the picker with a clean query.
    pub fn open(&mut self) {
        self.reset_query();
        self.open = true;
        info_log!("Opened {} picker", self.mode.kind());
    }

    /// Close the picker and notify `on_close`.
    ///
    /// Resets the query immediately, cancels the pending keyword and
    /// invalidates any in-flight fetch.
    pub fn close(&mut self) {
        self.reset_query();
        self.open = false;

        if self.load_state.is_loading() {
            self.generation += 1;
            self.load_state = if self.index.is_some() {
                LoadState::Ready
            } else {
                LoadState::Idle
            };
        }

        info_log!("Closed {} picker", self.mode.kind());
        if let Some(handler) = self.on_close.as_mut() {
            handler();
        }
    }

    fn reset_query(&mut self) {
        self.debouncer.cancel();
        self.input.clear();
        self.page = 1;
        self.collapsed.clear();
        if !self.keyword.is_empty() {
            self.keyword.clear();
            self.refilter();
        }
    }

    // ------------------------------------------------------------------
    // Keyword input
    // ------------------------------------------------------------------

    /// Record a keystroke: update the buffer and restart the quiet window.
    ///
    /// Ignored while the picker is closed.
    pub fn input(&mut self, text: impl Into<String>, now: Instant) {
        if !self.open {
            trace_log!("Ignoring input while picker is closed");
            return;
        }
        self.input = text.into();
        self.debouncer.push(self.input.clone(), now);
    }

    /// Timer tick: apply the buffered keyword if its window has elapsed.
    ///
    /// Returns `true` if a new keyword was applied.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(keyword) => self.apply_keyword(keyword),
            None => false,
        }
    }

    /// Apply the buffered keyword right away, e.g. on Enter.
    pub fn flush_input(&mut self) -> bool {
        match self.debouncer.flush() {
            Some(keyword) => self.apply_keyword(keyword),
            None => false,
        }
    }

    fn apply_keyword(&mut self, raw: String) -> bool {
        let keyword = normalize_keyword(&raw);
        if keyword == self.keyword {
            trace_log!("Keyword '{}' unchanged after normalization", raw);
            return false;
        }
        debug_log!("Applying keyword '{}' to {} picker", keyword, self.mode.kind());
        self.keyword = keyword;
        self.page = 1;
        self.refilter();
        true
    }

    fn refilter(&mut self) {
        let Some(index) = self.index.as_ref() else {
            self.matches = None;
            return;
        };
        self.filter_passes += 1;

        #[cfg(feature = "cache")]
        let matches = {
            let key = FilterKey::new(self.mode.kind(), &self.keyword);
            if let Some(hit) = self.cache.get(&key) {
                hit
            } else {
                let computed = index.filter(&self.keyword);
                self.cache.insert(key, computed.clone());
                computed
            }
        };

        #[cfg(not(feature = "cache"))]
        let matches = index.filter(&self.keyword);

        self.matches = Some(matches);
    }

    // ------------------------------------------------------------------
    // Paging and groups
    // ------------------------------------------------------------------

    /// Number of pages of the current product matches; 0 in category mode
    /// or before data arrives.
    pub fn total_pages(&self) -> usize {
        match &self.matches {
            Some(FilterMatches::Products(positions)) => total_pages(positions.len(), self.page_size),
            _ => 0,
        }
    }

    /// Go to `page`, clamped into range. Returns the page now shown.
    pub fn set_page(&mut self, page: usize) -> usize {
        self.page = clamp_page(page, self.total_pages());
        self.page
    }

    /// Go to the next page, if any.
    pub fn next_page(&mut self) -> usize {
        self.set_page(self.page.saturating_add(1))
    }

    /// Go to the previous page, if any.
    pub fn previous_page(&mut self) -> usize {
        self.set_page(self.page.saturating_sub(1))
    }

    /// Flip a category group between expanded and collapsed. Returns the new
    /// expanded state.
    pub fn toggle_group(&mut self, parent_id: ItemId) -> bool {
        if self.collapsed.remove(&parent_id) {
            true
        } else {
            self.collapsed.insert(parent_id);
            false
        }
    }

    /// Groups start expanded.
    pub fn is_group_expanded(&self, parent_id: ItemId) -> bool {
        !self.collapsed.contains(&parent_id)
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Hand `item` to `on_select`. The picker stays open.
    pub fn select(&mut self, item: &TargetItem) {
        debug_log!("Selected {} target '{}'", self.mode.kind(), item.slug);
        if let Some(handler) = self.on_select.as_mut() {
            handler(item);
        }
    }

    // ------------------------------------------------------------------
    // Fetching
    // ------------------------------------------------------------------

    /// Start a fetch, superseding any in flight.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.load_state = LoadState::Loading;
        let ticket = FetchTicket {
            key: self.query_key(),
            generation: self.generation,
        };
        debug_log!("Fetch {} started for {}", ticket.generation, ticket.key);
        ticket
    }

    /// Finish the fetch behind `ticket`.
    ///
    /// Stale tickets are discarded without touching state. Failures and
    /// empty data mark the picker [`LoadState::Failed`].
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<PickerData, ProviderError>,
    ) -> FetchOutcome {
        if ticket.generation != self.generation {
            debug_log!(
                "Discarding stale fetch {} for {} (current generation {})",
                ticket.generation,
                ticket.key,
                self.generation
            );
            return FetchOutcome::Discarded(NavigatorError::StaleQuery { key: ticket.key });
        }

        let mode = self.mode.kind();
        let checked = match result {
            Ok(data) if data.kind() != mode => {
                error_log!(
                    "{} picker received {} data; check the provider wiring",
                    mode,
                    data.kind()
                );
                Err(format!("expected {} data, got {}", mode, data.kind()))
            }
            Ok(data) if data.is_empty() => {
                self.index = None;
                self.matches = None;
                Err("provider returned no data".to_string())
            }
            Ok(data) => Ok(data),
            Err(err) => Err(err.to_string()),
        };

        match checked {
            Ok(data) => {
                self.apply_snapshot(data);
                self.load_state = LoadState::Ready;
                FetchOutcome::Applied
            }
            Err(reason) => {
                warn_log!("{} data unavailable: {}", mode, reason);
                let err = NavigatorError::DataUnavailable { mode, reason };
                self.load_state = LoadState::Failed(err.clone());
                FetchOutcome::Failed(err)
            }
        }
    }

    /// Fetch from the mode's provider and apply the result.
    pub fn load(&mut self) -> FetchOutcome {
        let ticket = self.begin_fetch();
        let result = self.mode.fetch(self.fetch_cap);
        self.complete_fetch(ticket, result)
    }

    fn apply_snapshot(&mut self, data: PickerData) {
        self.index = Some(match data {
            PickerData::Categories(forest) => TargetSearchIndex::categories(forest),
            PickerData::Products(mut list) => {
                list.items.truncate(self.fetch_cap);
                TargetSearchIndex::products(list)
            }
        });

        #[cfg(feature = "cache")]
        self.cache.clear();

        self.refilter();
        self.set_page(self.page);
    }

    // ------------------------------------------------------------------
    // View
    // ------------------------------------------------------------------

    /// What to render for the current state.
    pub fn view(&self) -> PickerView<'_> {
        let message = self.mode.config().empty_text.as_str();

        if let LoadState::Failed(error) = &self.load_state {
            return PickerView::Unavailable { message, error };
        }

        let (Some(index), Some(matches)) = (self.index.as_ref(), self.matches.as_ref()) else {
            return PickerView::Loading;
        };

        let freshness = self.freshness();
        if matches.is_empty() {
            return PickerView::Empty { message, freshness };
        }

        match index {
            TargetSearchIndex::Categories(_) => PickerView::Categories {
                groups: index
                    .category_groups(matches)
                    .into_iter()
                    .map(|group| GroupRow {
                        expanded: self.is_group_expanded(group.parent.id),
                        parent: group.parent,
                        children: group.children,
                    })
                    .collect(),
                freshness,
            },
            TargetSearchIndex::Products { .. } => {
                match index.product_page(matches, self.page, self.page_size) {
                    Some(page) => PickerView::Products { page, freshness },
                    None => PickerView::Loading,
                }
            }
        }
    }
}

impl fmt::Debug for TargetPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetPicker")
            .field("mode", &self.mode)
            .field("open", &self.open)
            .field("input", &self.input)
            .field("keyword", &self.keyword)
            .field("page", &self.page)
            .field("load_state", &self.load_state)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}
