//! Key-value storage for the persisted subscription list.
//!
//! The list lives in a single string slot of a durable per-origin store
//! (`localStorage` in the browser). Backends implement [`KeyValueStorage`];
//! [`MemoryStorage`] is the in-process backend used off the browser.

mod memory;

pub use memory::MemoryStorage;

use crate::error::Result;
use std::rc::Rc;

/// A string-keyed store of string values.
pub trait KeyValueStorage {
    /// Read a slot. `Ok(None)` when the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite a slot.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a slot. Deleting an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &T {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Rc<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}
