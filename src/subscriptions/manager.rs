//! Subscription manager tying the list, its storage and the page together.

use crate::config::{LoadPolicy, ManagerConfig};
use crate::error::{Result, SubscriptionError};
use crate::host::Host;
use crate::render::{button_state, render_header_list};
use crate::storage::KeyValueStorage;
use crate::types::{FeedPath, HomeClick, Subreddit, Toggle};
use parking_lot::RwLock;
use tracing::{debug, warn};

use super::list::SubscriptionList;

/// Owns the subscription list and keeps storage and page in step with it.
///
/// Every operation takes `&self`, so one instance can be shared by all the
/// page's event handlers. The list lock is never held across a host call.
pub struct SubscriptionManager<S, H> {
    config: ManagerConfig,
    storage: S,
    host: H,
    list: RwLock<SubscriptionList>,
}

impl<S: KeyValueStorage, H: Host> SubscriptionManager<S, H> {
    /// Load the persisted list. Does not touch the page.
    pub fn new(config: ManagerConfig, storage: S, host: H) -> Result<Self> {
        let list = Self::load(&config, &storage)?;
        debug!(count = list.len(), key = %config.storage_key, "loaded subscriptions");

        Ok(Self {
            config,
            storage,
            host,
            list: RwLock::new(list),
        })
    }

    /// Page-load entry point: load, then [`init`](Self::init).
    pub fn start(config: ManagerConfig, storage: S, host: H) -> Result<Self> {
        let manager = Self::new(config, storage, host)?;
        manager.init()?;
        Ok(manager)
    }

    /// Render the sidebar, sync the button and apply the default route.
    ///
    /// Click handlers are not bound here; the browser adapter attaches them
    /// between the button update and the default-route check.
    pub fn init(&self) -> Result<()> {
        self.render_header_list();
        self.update_current_page_button();
        self.handle_default_route()?;
        Ok(())
    }

    fn load(config: &ManagerConfig, storage: &S) -> Result<SubscriptionList> {
        let loaded = storage
            .get_item(&config.storage_key)
            .and_then(|raw| match raw {
                // An empty slot reads the same as a missing one
                Some(raw) if raw.is_empty() => Ok(SubscriptionList::new()),
                Some(raw) => SubscriptionList::decode(&raw),
                None => Ok(SubscriptionList::new()),
            });

        match (loaded, config.load_policy) {
            (Ok(list), _) => Ok(list),
            (Err(e), LoadPolicy::Strict) => Err(e),
            (Err(e), LoadPolicy::FailOpen) => {
                warn!(error = %e, key = %config.storage_key, "ignoring unreadable subscriptions");
                Ok(SubscriptionList::new())
            }
        }
    }

    fn persist(&self, list: &SubscriptionList) -> Result<()> {
        let raw = list.encode()?;
        self.storage.set_item(&self.config.storage_key, &raw)
    }

    // --- Queries ---

    /// Whether `name` (any casing) is subscribed.
    pub fn is_subscribed(&self, name: &str) -> bool {
        self.list.read().contains(&Subreddit::new(name))
    }

    /// Snapshot of the current list, in list order.
    pub fn subscriptions(&self) -> Vec<Subreddit> {
        self.list.read().names().to_vec()
    }

    pub fn is_empty(&self) -> bool {
        self.list.read().is_empty()
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Subreddit named by the current page's subscribe button, if any.
    pub fn current_page_subreddit(&self) -> Option<String> {
        self.host
            .element_data(&self.config.button_element_id, &self.config.button_data_key)
            .filter(|name| !name.is_empty())
    }

    // --- Mutation ---

    /// Subscribe to `name` if not subscribed, unsubscribe otherwise.
    ///
    /// The new list is persisted before it becomes visible; if the write
    /// fails the list is left as it was and the error is returned. On
    /// success the sidebar and button are refreshed.
    pub fn toggle_subscription(&self, name: &str) -> Result<Toggle> {
        let sub = Subreddit::new(name);

        let outcome = {
            let mut list = self.list.write();
            let previous = list.clone();
            let outcome = list.toggle(sub.clone());

            if let Err(e) = self.persist(&list) {
                warn!(error = %e, subreddit = %sub, "failed to persist subscriptions");
                *list = previous;
                return Err(e);
            }
            outcome
        };

        debug!(subreddit = %sub, ?outcome, "toggled subscription");

        self.render_header_list();
        self.update_current_page_button();

        Ok(outcome)
    }

    /// Toggle the subreddit named by the current page's button.
    ///
    /// `Ok(None)` when the page has no button or it names no subreddit.
    pub fn toggle_current_page(&self) -> Result<Option<Toggle>> {
        match self.current_page_subreddit() {
            Some(name) => self.toggle_subscription(&name).map(Some),
            None => Ok(None),
        }
    }

    // --- Navigation ---

    /// Navigate to the combined feed of all subscriptions.
    ///
    /// With nothing subscribed, shows the configured alert and returns
    /// [`SubscriptionError::NoSubscriptions`] without navigating.
    pub fn navigate_to_feed(&self) -> Result<FeedPath> {
        let path = self.list.read().feed_path();

        let Some(path) = path else {
            self.host.alert(&self.config.empty_feed_message);
            return Err(SubscriptionError::NoSubscriptions);
        };

        debug!(path = %path, "navigating to feed");
        self.host.navigate(path.as_str())?;
        Ok(path)
    }

    /// What a click on the home link should do.
    pub fn on_home_click(&self) -> HomeClick {
        if self.is_empty() {
            HomeClick::PassThrough
        } else {
            HomeClick::Intercept
        }
    }

    /// Handle a home-link click, navigating to the feed when intercepted.
    ///
    /// The caller suppresses the link's default action on
    /// [`HomeClick::Intercept`].
    pub fn handle_home_click(&self) -> Result<HomeClick> {
        let action = self.on_home_click();
        if action == HomeClick::Intercept {
            self.navigate_to_feed()?;
        }
        Ok(action)
    }

    /// Redirect the site root to the combined feed when subscriptions exist.
    ///
    /// Returns the feed path navigated to, if any.
    pub fn handle_default_route(&self) -> Result<Option<FeedPath>> {
        if self.host.pathname() != self.config.root_path || self.is_empty() {
            return Ok(None);
        }
        self.navigate_to_feed().map(Some)
    }

    // --- Rendering ---

    /// Rebuild the sidebar list from the current subscriptions.
    ///
    /// No-op when the page has no list container. Host failures are logged;
    /// the persisted list stays authoritative.
    pub fn render_header_list(&self) {
        let items = render_header_list(&self.list.read());

        match self.host.replace_list(&self.config.list_element_id, &items) {
            Ok(true) => {}
            Ok(false) => debug!(id = %self.config.list_element_id, "no subscription list on page"),
            Err(e) => warn!(error = %e, "failed to render subscription list"),
        }
    }

    /// Sync the subscribe button's label and style with the current list.
    ///
    /// No-op when the page has no button or it names no subreddit.
    pub fn update_current_page_button(&self) {
        let Some(name) = self.current_page_subreddit() else {
            return;
        };

        let state = button_state(self.is_subscribed(&name));
        if let Err(e) = self.host.apply_button_state(
            &self.config.button_element_id,
            &state,
            &self.config.outline_class,
        ) {
            warn!(error = %e, "failed to update subscribe button");
        }
    }
}
