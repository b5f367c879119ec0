//! # Subscriptions
//!
//! Browser-local subreddit subscriptions for a Reddit-reading front end.
//!
//! ## Core Concepts
//!
//! - **Subscription list**: Lower-case, unique subreddit names, persisted as a
//!   JSON array under one storage key and written through on every change
//! - **Sidebar**: A list of links to each subscribed subreddit
//! - **Combined feed**: `/r/<a>+<b>+...`, where the site root and the home
//!   link lead once anything is subscribed
//! - **Host**: The page environment (location, elements, alerts); the browser
//!   implementation lives behind the `web-bindings` feature
//!
//! ## Example
//!
//! ```ignore
//! use subscriptions::{HeadlessHost, ManagerConfig, MemoryStorage, SubscriptionManager};
//!
//! let manager = SubscriptionManager::start(
//!     ManagerConfig::default(),
//!     MemoryStorage::new(),
//!     HeadlessHost::new("/").with_list_container(),
//! )?;
//!
//! manager.toggle_subscription("pics")?;
//! manager.toggle_subscription("aww")?;
//!
//! // Navigates to /r/aww+pics
//! manager.navigate_to_feed()?;
//! ```

pub mod config;
pub mod error;
pub mod host;
pub mod render;
pub mod storage;
pub mod subscriptions;
pub mod types;
#[cfg(feature = "web-bindings")]
pub mod web;

// Re-exports
pub use config::{LoadPolicy, ManagerConfig};
pub use error::{Result, SubscriptionError};
pub use host::{HeadlessButton, HeadlessHost, Host};
pub use render::{button_state, render_header_list, ButtonState, ListItem};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use subscriptions::{SubscriptionList, SubscriptionManager};
pub use types::*;
