//! Browser bindings.
//!
//! `localStorage` storage, a DOM-backed [`Host`], the click bindings for the
//! home link and subscribe button, and the `#[wasm_bindgen]` surface page
//! scripts call into. On load the bootstrap builds one manager and exposes it
//! as `window.subscriptionManager`.
//!
//! Failures inside event handlers have no caller to return to; they are
//! written to the browser console.

use crate::config::ManagerConfig;
use crate::error::{Result, SubscriptionError};
use crate::host::Host;
use crate::render::{ButtonState, ListItem};
use crate::storage::KeyValueStorage;
use crate::subscriptions::SubscriptionManager;
use crate::types::{HomeClick, Toggle};
use std::rc::Rc;
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, Window};

/// Manager wired to the real browser.
pub type WebManager = SubscriptionManager<LocalStorage, DomHost>;

/// Global the bootstrap assigns the manager to.
const GLOBAL_NAME: &str = "subscriptionManager";

fn js_error(value: JsValue) -> SubscriptionError {
    SubscriptionError::Host(format!("{:?}", value))
}

fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| SubscriptionError::Host("no window".into()))
}

/// Log a failure through `tracing` and to the browser console.
fn report(message: &str) {
    warn!("{}", message);
    web_sys::console::warn_1(&JsValue::from_str(message));
}

impl From<SubscriptionError> for JsValue {
    fn from(e: SubscriptionError) -> Self {
        js_sys::Error::new(&e.to_string()).into()
    }
}

// --- Storage ---

/// `window.localStorage`.
pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    pub fn from_window() -> Result<Self> {
        let inner = window()?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| SubscriptionError::Storage("localStorage unavailable".into()))?;
        Ok(Self { inner })
    }
}

impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.inner
            .get_item(key)
            .map_err(|e| SubscriptionError::Storage(format!("getItem failed: {:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.inner
            .set_item(key, value)
            .map_err(|e| SubscriptionError::Storage(format!("setItem failed: {:?}", e)))
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.inner
            .remove_item(key)
            .map_err(|e| SubscriptionError::Storage(format!("removeItem failed: {:?}", e)))
    }
}

// --- DOM ---

/// The current document and location.
pub struct DomHost {
    window: Window,
    document: Document,
}

impl DomHost {
    pub fn from_window() -> Result<Self> {
        let window = window()?;
        let document = window
            .document()
            .ok_or_else(|| SubscriptionError::Host("no document".into()))?;
        Ok(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn list_item(&self, item: &ListItem) -> Result<Element> {
        let li = self.document.create_element("li").map_err(js_error)?;

        let child = match item {
            ListItem::Placeholder(text) => {
                let small = self.document.create_element("small").map_err(js_error)?;
                small.set_text_content(Some(text.as_str()));
                small
            }
            ListItem::Link { href, label } => {
                let a = self.document.create_element("a").map_err(js_error)?;
                a.set_attribute("href", href).map_err(js_error)?;
                a.set_text_content(Some(label.as_str()));
                a
            }
        };

        li.append_child(&child).map_err(js_error)?;
        Ok(li)
    }
}

impl Host for DomHost {
    fn pathname(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    fn navigate(&self, path: &str) -> Result<()> {
        self.window.location().set_href(path).map_err(js_error)
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            report(&format!("alert failed: {:?}", e));
        }
    }

    fn replace_list(&self, element_id: &str, items: &[ListItem]) -> Result<bool> {
        let Some(container) = self.document.get_element_by_id(element_id) else {
            return Ok(false);
        };

        container.set_inner_html("");
        for item in items {
            let li = self.list_item(item)?;
            container.append_child(&li).map_err(js_error)?;
        }
        Ok(true)
    }

    fn element_data(&self, element_id: &str, data_key: &str) -> Option<String> {
        self.document
            .get_element_by_id(element_id)?
            .get_attribute(&format!("data-{}", data_key))
    }

    fn apply_button_state(
        &self,
        element_id: &str,
        state: &ButtonState,
        outline_class: &str,
    ) -> Result<bool> {
        let Some(button) = self.document.get_element_by_id(element_id) else {
            return Ok(false);
        };

        button.set_text_content(Some(state.label));
        let classes = button.class_list();
        if state.outline {
            classes.add_1(outline_class).map_err(js_error)?;
        } else {
            classes.remove_1(outline_class).map_err(js_error)?;
        }
        Ok(true)
    }
}

// --- Event bindings ---

fn on_click<F>(element: &Element, mut handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| handler(event));
    element
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

/// Intercept home-link clicks while subscriptions exist.
pub fn bind_home_link(manager: &Rc<WebManager>) -> Result<()> {
    let id = &manager.config().home_element_id;
    let Some(link) = manager.host().document().get_element_by_id(id) else {
        return Ok(());
    };

    let manager = Rc::clone(manager);
    on_click(&link, move |event| {
        if manager.on_home_click() == HomeClick::Intercept {
            event.prevent_default();
            if let Err(e) = manager.navigate_to_feed() {
                report(&format!("home link navigation failed: {}", e));
            }
        }
    })
}

/// Toggle the page's subreddit when its subscribe button is clicked.
pub fn bind_subscribe_button(manager: &Rc<WebManager>) -> Result<()> {
    let id = &manager.config().button_element_id;
    let Some(button) = manager.host().document().get_element_by_id(id) else {
        return Ok(());
    };

    let manager = Rc::clone(manager);
    on_click(&button, move |event| {
        event.prevent_default();
        if let Err(e) = manager.toggle_current_page() {
            report(&format!("toggle failed: {}", e));
        }
    })
}

/// Build the manager for the current page and run the page-load sequence.
pub fn start_with_config(config: ManagerConfig) -> Result<Rc<WebManager>> {
    let bind_button = config.bind_subscribe_button;
    let manager = Rc::new(SubscriptionManager::new(
        config,
        LocalStorage::from_window()?,
        DomHost::from_window()?,
    )?);

    manager.render_header_list();
    manager.update_current_page_button();
    bind_home_link(&manager)?;
    if bind_button {
        bind_subscribe_button(&manager)?;
    }
    manager.handle_default_route()?;

    Ok(manager)
}

// --- JS surface ---

/// Handle page scripts use to drive subscriptions.
///
/// Only [`install`] creates one; page scripts reach it through
/// `window.subscriptionManager`. There is no JS constructor, since each
/// instance runs the page-load sequence and binds its own listeners.
#[wasm_bindgen]
pub struct WebSubscriptionManager {
    inner: Rc<WebManager>,
}

#[wasm_bindgen]
impl WebSubscriptionManager {
    #[wasm_bindgen(js_name = isSubscribed)]
    pub fn is_subscribed(&self, name: &str) -> bool {
        self.inner.is_subscribed(name)
    }

    /// Returns true when the subreddit is subscribed afterwards.
    #[wasm_bindgen(js_name = toggleSubscription)]
    pub fn toggle_subscription(&self, name: &str) -> std::result::Result<bool, JsValue> {
        let outcome = self.inner.toggle_subscription(name)?;
        Ok(outcome == Toggle::Subscribed)
    }

    /// Go to the combined feed. Without subscriptions this only alerts.
    #[wasm_bindgen(js_name = navigateToFeed)]
    pub fn navigate_to_feed(&self) -> std::result::Result<(), JsValue> {
        match self.inner.navigate_to_feed() {
            Ok(_) | Err(SubscriptionError::NoSubscriptions) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Subscribed names in list order.
    pub fn subscriptions(&self) -> js_sys::Array {
        self.inner
            .subscriptions()
            .iter()
            .map(|sub| JsValue::from_str(sub.as_str()))
            .collect()
    }
}

/// Run the page-load sequence and expose the manager as
/// `window.subscriptionManager`.
pub fn install(config: ManagerConfig) -> std::result::Result<(), JsValue> {
    let window = window()?;
    let manager = WebSubscriptionManager {
        inner: start_with_config(config)?,
    };
    js_sys::Reflect::set(&window, &JsValue::from_str(GLOBAL_NAME), &manager.into())?;
    Ok(())
}

/// Module entry point: boot once the DOM is parsed.
#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = window()?;
    let document = window
        .document()
        .ok_or_else(|| SubscriptionError::Host("no document".into()))?;

    // The module may load after DOMContentLoaded has already fired.
    if document.ready_state() != "loading" {
        return install(ManagerConfig::default());
    }

    let closure = Closure::once(move |_: Event| {
        if let Err(e) = install(ManagerConfig::default()) {
            report(&format!("subscription manager failed to start: {:?}", e));
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
