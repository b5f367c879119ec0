//! Manager configuration.

/// How a stored value that cannot be read or parsed is handled at load time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Treat it as an empty list and log a warning.
    #[default]
    FailOpen,
    /// Return the error from construction.
    Strict,
}

/// Subscription manager configuration.
#[derive(Clone, Debug)]
pub struct ManagerConfig {
    /// Storage key holding the JSON-encoded list.
    pub storage_key: String,

    /// Id of the sidebar list container.
    pub list_element_id: String,

    /// Id of the subscribe/unsubscribe button.
    pub button_element_id: String,

    /// Data attribute on the button naming the page's subreddit
    /// (`subreddit` reads `data-subreddit`).
    pub button_data_key: String,

    /// Id of the home navigation link.
    pub home_element_id: String,

    /// Whether the browser adapter wires the button's click to a toggle.
    /// Off by default: page templates call `toggleSubscription` inline, and a
    /// second listener would undo every click.
    pub bind_subscribe_button: bool,

    /// Class applied to the button while subscribed.
    pub outline_class: String,

    /// Pathname of the site root, where the default-route redirect applies.
    pub root_path: String,

    /// Alert shown when navigating to the feed without subscriptions.
    pub empty_feed_message: String,

    /// Handling of a corrupt or unreadable stored value.
    pub load_policy: LoadPolicy,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            storage_key: "eddrit_subscriptions".to_string(),
            list_element_id: "subscriptions-list".to_string(),
            button_element_id: "subscribe-button".to_string(),
            button_data_key: "subreddit".to_string(),
            home_element_id: "nav-home".to_string(),
            bind_subscribe_button: false,
            outline_class: "outline".to_string(),
            root_path: "/".to_string(),
            empty_feed_message: "You have no subscriptions yet!".to_string(),
            load_policy: LoadPolicy::FailOpen,
        }
    }
}
