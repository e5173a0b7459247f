//! Errors and outcomes.
//!
//! Nothing in this crate panics on bad input or failed fetches. Instead:
//!
//! - [`ProviderError`]: what a category or product provider returns when a
//!   fetch fails.
//! - [`NavigatorError`]: the three failure modes of the subsystem
//!   (`DataUnavailable`, `InvalidNavigationTarget`, `StaleQuery`).
//! - [`NavigationOutcome`] / [`FetchOutcome`]: the result of a selection
//!   or a fetch completion, with the error folded in as a variant.
//!
//! # Examples
//!
//! ```
//! use category_navigator::error::{NavigationOutcome, NavigatorError};
//!
//! let outcome = NavigationOutcome::Requested { path: "/category/phones".into() };
//! assert_eq!(outcome.path(), Some("/category/phones"));
//!
//! let ignored = NavigationOutcome::Ignored(NavigatorError::InvalidNavigationTarget);
//! assert!(ignored.is_ignored());
//! ```

use crate::picker::{ModeKind, QueryKey};
use std::fmt;

// ============================================================================
// Provider errors
// ============================================================================

/// Broad classification of a provider failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    /// Transport failure or timeout
    Network,
    /// The payload could not be decoded
    Decode,
    /// Anything else
    Other,
}

/// Error returned by a [`CategoryProvider`](crate::CategoryProvider) or
/// [`ProductProvider`](crate::ProductProvider).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    kind: ProviderErrorKind,
    message: String,
}

impl ProviderError {
    /// Create an error of the given kind.
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Shorthand for a [`ProviderErrorKind::Network`] error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Network, message)
    }

    /// Shorthand for a [`ProviderErrorKind::Decode`] error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Decode, message)
    }

    /// Shorthand for a [`ProviderErrorKind::Other`] error.
    pub fn other(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Other, message)
    }

    /// The failure class.
    pub fn kind(&self) -> ProviderErrorKind {
        self.kind
    }

    /// The provider's message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ProviderErrorKind::Network => write!(f, "network error: {}", self.message),
            ProviderErrorKind::Decode => write!(f, "decode error: {}", self.message),
            ProviderErrorKind::Other => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ProviderError {}

// ============================================================================
// Subsystem errors
// ============================================================================

/// Failure modes of navigation and the target picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigatorError {
    /// The fetch failed or returned nothing; the picker shows its empty state
    DataUnavailable { mode: ModeKind, reason: String },

    /// A selection resolved to an empty slug chain
    InvalidNavigationTarget,

    /// A fetch completed after a newer one had started
    StaleQuery { key: QueryKey },
}

impl fmt::Display for NavigatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigatorError::DataUnavailable { mode, reason } => {
                write!(f, "{} data unavailable: {}", mode, reason)
            }
            NavigatorError::InvalidNavigationTarget => {
                write!(f, "Selection has an empty slug chain")
            }
            NavigatorError::StaleQuery { key } => {
                write!(f, "Discarded stale result for {}", key)
            }
        }
    }
}

impl std::error::Error for NavigatorError {}

// ============================================================================
// Outcomes
// ============================================================================

/// Result of selecting a category for navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// One navigation request was sent to the route changer
    Requested { path: String },
    /// Nothing was sent
    Ignored(NavigatorError),
}

impl NavigationOutcome {
    /// Check if a navigation request was made
    pub fn is_requested(&self) -> bool {
        matches!(self, NavigationOutcome::Requested { .. })
    }

    /// Check if the selection was ignored
    pub fn is_ignored(&self) -> bool {
        matches!(self, NavigationOutcome::Ignored(_))
    }

    /// The requested path, if any
    pub fn path(&self) -> Option<&str> {
        match self {
            NavigationOutcome::Requested { path } => Some(path),
            NavigationOutcome::Ignored(_) => None,
        }
    }
}

/// Result of completing a fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The data replaced the picker's snapshot
    Applied,
    /// A newer fetch had started; the data was dropped
    Discarded(NavigatorError),
    /// The provider failed or returned nothing
    Failed(NavigatorError),
}

impl FetchOutcome {
    /// Check if the result was applied
    pub fn is_applied(&self) -> bool {
        matches!(self, FetchOutcome::Applied)
    }

    /// Check if the result was stale
    pub fn is_discarded(&self) -> bool {
        matches!(self, FetchOutcome::Discarded(_))
    }

    /// Check if the fetch failed
    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }

    /// The error carried by a discarded or failed outcome
    pub fn error(&self) -> Option<&NavigatorError> {
        match self {
            FetchOutcome::Applied => None,
            FetchOutcome::Discarded(err) | FetchOutcome::Failed(err) => Some(err),
        }
    }
}
