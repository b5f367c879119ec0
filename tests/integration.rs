//! Integration tests for the subscription manager.

use std::rc::Rc;
use subscriptions::{
    HeadlessHost, HomeClick, KeyValueStorage, ListItem, ManagerConfig, MemoryStorage,
    SubscriptionManager, Toggle,
};

const KEY: &str = "eddrit_subscriptions";

type Manager = SubscriptionManager<Rc<MemoryStorage>, HeadlessHost>;

fn start(storage: &Rc<MemoryStorage>, host: HeadlessHost) -> Manager {
    SubscriptionManager::start(ManagerConfig::default(), Rc::clone(storage), host).unwrap()
}

fn names(manager: &Manager) -> Vec<String> {
    manager.subscriptions().iter().map(|s| s.to_string()).collect()
}

fn link(name: &str) -> ListItem {
    ListItem::Link {
        href: format!("/r/{}", name),
        label: format!("r/{}", name),
    }
}

// --- Page Load ---

#[test]
fn test_root_redirects_to_feed() {
    let storage = Rc::new(MemoryStorage::with_item(KEY, r#"["news"]"#));
    let manager = start(&storage, HeadlessHost::new("/"));

    assert_eq!(manager.host().navigations(), vec!["/r/news".to_string()]);
    assert!(manager.host().alerts().is_empty());
}

#[test]
fn test_root_without_subscriptions_stays() {
    let storage = Rc::new(MemoryStorage::new());
    let manager = start(&storage, HeadlessHost::new("/").with_list_container());

    assert!(manager.host().navigations().is_empty());
    assert!(manager.host().alerts().is_empty());
    assert_eq!(
        manager.host().rendered_list().unwrap(),
        vec![ListItem::Placeholder("No subscriptions".to_string())]
    );
}

#[test]
fn test_subreddit_page_load_renders_state() {
    let storage = Rc::new(MemoryStorage::with_item(KEY, r#"["aww","pics"]"#));
    let host = HeadlessHost::new("/r/pics")
        .with_list_container()
        .with_subscribe_button("Pics");
    let manager = start(&storage, host);

    assert!(manager.host().navigations().is_empty());
    assert_eq!(
        manager.host().rendered_list().unwrap(),
        vec![link("aww"), link("pics")]
    );

    let button = manager.host().button().unwrap();
    assert_eq!(button.label, "Unsubscribe");
    assert!(button.has_class("outline"));
}

// --- Realistic Workflow Tests ---

#[test]
fn test_subscribe_then_go_home() {
    let storage = Rc::new(MemoryStorage::new());
    let host = HeadlessHost::new("/r/rust")
        .with_list_container()
        .with_subscribe_button("rust");
    let manager = start(&storage, host);

    assert_eq!(manager.on_home_click(), HomeClick::PassThrough);

    assert_eq!(manager.toggle_current_page().unwrap(), Some(Toggle::Subscribed));
    assert_eq!(manager.toggle_subscription("Golang").unwrap(), Toggle::Subscribed);

    assert_eq!(manager.host().rendered_list().unwrap(), vec![link("golang"), link("rust")]);
    assert_eq!(manager.host().button().unwrap().label, "Unsubscribe");

    assert_eq!(manager.handle_home_click().unwrap(), HomeClick::Intercept);
    assert_eq!(manager.host().navigations(), vec!["/r/golang+rust".to_string()]);
}

#[test]
fn test_unsubscribe_last_restores_placeholder() {
    let storage = Rc::new(MemoryStorage::with_item(KEY, r#"["rust"]"#));
    let host = HeadlessHost::new("/r/rust")
        .with_list_container()
        .with_subscribe_button("rust");
    let manager = start(&storage, host);

    assert_eq!(manager.toggle_current_page().unwrap(), Some(Toggle::Unsubscribed));

    assert_eq!(
        manager.host().rendered_list().unwrap(),
        vec![ListItem::Placeholder("No subscriptions".to_string())]
    );
    let button = manager.host().button().unwrap();
    assert_eq!(button.label, "Subscribe");
    assert!(!button.has_class("outline"));
    assert_eq!(storage.get_item(KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_feed_uses_list_order() {
    let storage = Rc::new(MemoryStorage::with_item(KEY, r#"["aww","pics"]"#));
    let manager = start(&storage, HeadlessHost::new("/r/aww"));

    let path = manager.navigate_to_feed().unwrap();
    assert_eq!(path.as_str(), "/r/aww+pics");
    assert_eq!(manager.host().navigations(), vec!["/r/aww+pics".to_string()]);
}

#[test]
fn test_feed_not_resorted_at_navigation() {
    // Stored order is kept even when it isn't sorted
    let storage = Rc::new(MemoryStorage::with_item(KEY, r#"["pics","aww"]"#));
    let manager = start(&storage, HeadlessHost::new("/"));

    assert_eq!(manager.host().navigations(), vec!["/r/pics+aww".to_string()]);
}

#[test]
fn test_empty_feed_alerts_once() {
    let storage = Rc::new(MemoryStorage::new());
    let manager = start(&storage, HeadlessHost::new("/r/rust"));

    assert!(manager.navigate_to_feed().is_err());
    assert!(manager.host().navigations().is_empty());
    assert_eq!(
        manager.host().alerts(),
        vec!["You have no subscriptions yet!".to_string()]
    );
}

// --- Persistence ---

#[test]
fn test_reload_reproduces_list() {
    let storage = Rc::new(MemoryStorage::new());
    let first = start(&storage, HeadlessHost::new("/r/x"));

    for name in ["pics", "Aww", "news", "zig"] {
        first.toggle_subscription(name).unwrap();
    }
    first.toggle_subscription("news").unwrap();
    let expected = names(&first);
    assert_eq!(expected, vec!["aww", "pics", "zig"]);

    let second = start(&storage, HeadlessHost::new("/r/x"));
    assert_eq!(names(&second), expected);
}

#[test]
fn test_case_insensitive_membership() {
    let storage = Rc::new(MemoryStorage::new());
    let manager = start(&storage, HeadlessHost::new("/r/x"));

    manager.toggle_subscription("AskReddit").unwrap();
    for name in ["askreddit", "ASKREDDIT", "AskReddit", "aSkReDdIt"] {
        assert!(manager.is_subscribed(name), "{} should be subscribed", name);
    }
    assert_eq!(storage.get_item(KEY).unwrap().as_deref(), Some(r#"["askreddit"]"#));
}

#[test]
fn test_custom_config() {
    let storage = Rc::new(MemoryStorage::with_item("subs", r#"["rust"]"#));
    let config = ManagerConfig {
        storage_key: "subs".to_string(),
        root_path: "/home".to_string(),
        empty_feed_message: "Nothing here".to_string(),
        ..Default::default()
    };

    let manager =
        SubscriptionManager::start(config, Rc::clone(&storage), HeadlessHost::new("/home"))
            .unwrap();
    assert_eq!(manager.host().navigations(), vec!["/r/rust".to_string()]);

    manager.toggle_subscription("rust").unwrap();
    assert!(manager.navigate_to_feed().is_err());
    assert_eq!(manager.host().alerts(), vec!["Nothing here".to_string()]);
    assert_eq!(storage.get_item("subs").unwrap().as_deref(), Some("[]"));
    assert_eq!(storage.get_item(KEY).unwrap(), None);
}
