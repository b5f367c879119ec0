//! View model for the sidebar list and the subscribe button.
//!
//! Rendering is a pure function of the subscription list; hosts replace
//! their output wholesale.

use crate::subscriptions::SubscriptionList;

/// Text of the placeholder entry shown when nothing is subscribed.
pub const NO_SUBSCRIPTIONS_TEXT: &str = "No subscriptions";

/// One entry of the sidebar list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListItem {
    /// Non-link entry, rendered as small text.
    Placeholder(String),
    /// Link to a subreddit page.
    Link { href: String, label: String },
}

/// Label and style of the subscribe button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonState {
    pub label: &'static str,
    /// Whether the outline style class is applied.
    pub outline: bool,
}

/// Render the sidebar entries for a list.
pub fn render_header_list(list: &SubscriptionList) -> Vec<ListItem> {
    if list.is_empty() {
        return vec![ListItem::Placeholder(NO_SUBSCRIPTIONS_TEXT.to_string())];
    }

    list.iter()
        .map(|sub| ListItem::Link {
            href: sub.page_path(),
            label: sub.label(),
        })
        .collect()
}

/// Button state for a page whose subreddit is (or isn't) subscribed.
pub fn button_state(subscribed: bool) -> ButtonState {
    if subscribed {
        ButtonState {
            label: "Unsubscribe",
            outline: true,
        }
    } else {
        ButtonState {
            label: "Subscribe",
            outline: false,
        }
    }
}
