//! The page environment the manager drives.
//!
//! [`Host`] covers everything outside the subscription list itself: the
//! current location, full-page navigation, the blocking alert and the
//! handful of page elements the manager reads or rewrites. Missing
//! elements are reported with `Ok(false)` / `None`, never as errors.

use crate::error::{Result, SubscriptionError};
use crate::render::{ButtonState, ListItem};
use parking_lot::Mutex;

/// Page environment.
pub trait Host {
    /// Pathname of the current location.
    fn pathname(&self) -> String;

    /// Full page navigation to `path`.
    fn navigate(&self, path: &str) -> Result<()>;

    /// Show a blocking notification.
    fn alert(&self, message: &str);

    /// Replace the contents of a list container.
    ///
    /// Returns `Ok(false)` if the container does not exist.
    fn replace_list(&self, element_id: &str, items: &[ListItem]) -> Result<bool>;

    /// Read a `data-*` attribute of an element.
    fn element_data(&self, element_id: &str, data_key: &str) -> Option<String>;

    /// Set a button's label and toggle its outline class.
    ///
    /// Returns `Ok(false)` if the button does not exist.
    fn apply_button_state(
        &self,
        element_id: &str,
        state: &ButtonState,
        outline_class: &str,
    ) -> Result<bool>;
}

/// Snapshot of the button held by a [`HeadlessHost`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeadlessButton {
    /// Value of the button's `data-*` attribute.
    pub subreddit: Option<String>,
    pub label: String,
    pub classes: Vec<String>,
}

impl HeadlessButton {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

#[derive(Default)]
struct HeadlessPage {
    pathname: String,
    list: Option<Vec<ListItem>>,
    button: Option<HeadlessButton>,
    navigations: Vec<String>,
    alerts: Vec<String>,
    fail_navigation: bool,
}

/// A host without a browser.
///
/// Holds a simulated page (one list container, one button) and records every
/// navigation and alert, so manager behavior can be driven and inspected
/// outside the browser. Element ids and data keys are not checked: the page
/// has at most one list and one button.
#[derive(Default)]
pub struct HeadlessHost {
    page: Mutex<HeadlessPage>,
}

impl HeadlessHost {
    /// Create a page at `pathname` with no elements.
    pub fn new(pathname: &str) -> Self {
        Self {
            page: Mutex::new(HeadlessPage {
                pathname: pathname.to_string(),
                ..Default::default()
            }),
        }
    }

    /// Add an (empty) sidebar list container.
    pub fn with_list_container(self) -> Self {
        self.page.lock().list = Some(Vec::new());
        self
    }

    /// Add a subscribe button carrying `subreddit` as its data value.
    pub fn with_subscribe_button(self, subreddit: &str) -> Self {
        self.page.lock().button = Some(HeadlessButton {
            subreddit: Some(subreddit.to_string()),
            ..Default::default()
        });
        self
    }

    /// Add a subscribe button without a data value.
    pub fn with_unnamed_button(self) -> Self {
        self.page.lock().button = Some(HeadlessButton::default());
        self
    }

    /// Make every navigation fail.
    pub fn with_failing_navigation(self) -> Self {
        self.page.lock().fail_navigation = true;
        self
    }

    /// Current list contents, `None` if the page has no container.
    pub fn rendered_list(&self) -> Option<Vec<ListItem>> {
        self.page.lock().list.clone()
    }

    pub fn button(&self) -> Option<HeadlessButton> {
        self.page.lock().button.clone()
    }

    /// Paths navigated to, oldest first.
    pub fn navigations(&self) -> Vec<String> {
        self.page.lock().navigations.clone()
    }

    /// Alerts shown, oldest first.
    pub fn alerts(&self) -> Vec<String> {
        self.page.lock().alerts.clone()
    }
}

impl Host for HeadlessHost {
    fn pathname(&self) -> String {
        self.page.lock().pathname.clone()
    }

    fn navigate(&self, path: &str) -> Result<()> {
        let mut page = self.page.lock();
        if page.fail_navigation {
            return Err(SubscriptionError::Host(format!("navigation to {} failed", path)));
        }
        page.navigations.push(path.to_string());
        Ok(())
    }

    fn alert(&self, message: &str) {
        self.page.lock().alerts.push(message.to_string());
    }

    fn replace_list(&self, _element_id: &str, items: &[ListItem]) -> Result<bool> {
        let mut page = self.page.lock();
        match page.list.as_mut() {
            Some(list) => {
                *list = items.to_vec();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn element_data(&self, _element_id: &str, _data_key: &str) -> Option<String> {
        self.page.lock().button.as_ref()?.subreddit.clone()
    }

    fn apply_button_state(
        &self,
        _element_id: &str,
        state: &ButtonState,
        outline_class: &str,
    ) -> Result<bool> {
        let mut page = self.page.lock();
        let Some(button) = page.button.as_mut() else {
            return Ok(false);
        };

        button.label = state.label.to_string();
        button.classes.retain(|c| c != outline_class);
        if state.outline {
            button.classes.push(outline_class.to_string());
        }
        Ok(true)
    }
}
