//! `claimdesk-console`
//!
//! **Responsibility:** navigation and notification state of the claims
//! console, gated by the session's authorization policy.
//!
//! This crate provides:
//! - The [`Console`] container (the only writer of navigation state)
//! - Breadcrumb derivation and role landing views
//! - A transient notification queue
//! - Search hand-off
//! - Dashboard statistics loading with bounded retry

pub mod config;
pub mod console;
pub mod demo;
pub mod menu;
pub mod navigation;
pub mod notifications;
pub mod retry;
pub mod search;
pub mod statistics;

pub use config::{ConfigError, ConsoleConfig};
pub use console::{ACCESS_DENIED_TITLE, Console, ConsoleSnapshot, Transition};
pub use menu::MenuEntry;
pub use navigation::{HOME_LABEL, Landing, NavigationState, breadcrumbs};
pub use notifications::{Notification, NotificationKind, NotificationQueue};
pub use retry::{RetryPolicy, retry_with_backoff};
pub use search::{
    InMemorySearchIndex, SearchError, SearchProvider, SearchResult, SearchResultKind, first_hit,
};
pub use statistics::{
    DashboardStatistics, StaticStatistics, StatisticsError, StatisticsSource, load_statistics,
};
