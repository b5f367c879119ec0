//! Browser-local subreddit subscriptions.
//!
//! This module holds the subscription list and the manager driving it:
//! - The list is kept unique and lower-case, re-sorted after each insert
//! - Every mutation is written through to storage before it is visible
//! - The manager renders the sidebar, updates the subscribe button and
//!   redirects the site root to the combined feed
//!
//! # Example
//!
//! ```ignore
//! let manager = SubscriptionManager::start(
//!     ManagerConfig::default(),
//!     MemoryStorage::new(),
//!     HeadlessHost::new("/r/rust"),
//! )?;
//!
//! manager.toggle_subscription("Rust")?;
//! assert!(manager.is_subscribed("RUST"));
//!
//! // Navigates to /r/rust
//! manager.navigate_to_feed()?;
//! ```

mod list;
mod manager;

pub use list::SubscriptionList;
pub use manager::SubscriptionManager;
