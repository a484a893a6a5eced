use super::{MediaQuery, PreferenceStore, RootClassList};
use crate::error::ThemeError;
use crate::utils::storage::{decode_bool, encode_bool};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

/// Storage backed by a shared map of raw strings, encoded the same way as
/// `localStorage`. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
    unavailable: Rc<Cell<bool>>,
}

impl MemoryStorage {
    pub fn unavailable() -> Self {
        let storage = Self::default();
        storage.unavailable.set(true);
        storage
    }

    pub fn with_raw(self, key: &str, raw: &str) -> Self {
        self.items
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn check(&self) -> Result<(), ThemeError> {
        if self.unavailable.get() {
            return Err(ThemeError::StorageUnavailable);
        }
        Ok(())
    }
}

impl PreferenceStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<bool>, ThemeError> {
        self.check()?;
        Ok(decode_bool(key, self.items.borrow().get(key).map(String::as_str)))
    }

    fn set_item(&self, key: &str, value: bool) -> Result<(), ThemeError> {
        self.check()?;
        self.items
            .borrow_mut()
            .insert(key.to_string(), encode_bool(value));
        Ok(())
    }
}

/// Media query stub answering every query with a fixed "prefers dark".
#[derive(Debug, Clone, Default)]
pub struct MemoryMediaQuery {
    prefers_dark: Rc<Cell<bool>>,
    unsupported: bool,
    queries: Rc<RefCell<Vec<String>>>,
}

impl MemoryMediaQuery {
    pub fn prefers_dark(prefers_dark: bool) -> Self {
        let media = Self::default();
        media.prefers_dark.set(prefers_dark);
        media
    }

    pub fn unsupported() -> Self {
        Self {
            unsupported: true,
            ..Self::default()
        }
    }

    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        self.prefers_dark.set(prefers_dark);
    }

    /// Queries received so far, in order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

impl MediaQuery for MemoryMediaQuery {
    fn matches(&self, query: &str) -> Result<bool, ThemeError> {
        self.queries.borrow_mut().push(query.to_string());
        if self.unsupported {
            return Err(ThemeError::MediaQuery(format!("{query} is not supported")));
        }
        Ok(self.prefers_dark.get())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryClassList {
    classes: Rc<RefCell<BTreeSet<String>>>,
}

impl MemoryClassList {
    pub fn with_class(self, token: &str) -> Self {
        self.classes.borrow_mut().insert(token.to_string());
        self
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }
}

impl RootClassList for MemoryClassList {
    fn add(&self, token: &str) -> Result<(), ThemeError> {
        self.classes.borrow_mut().insert(token.to_string());
        Ok(())
    }

    fn remove(&self, token: &str) -> Result<(), ThemeError> {
        self.classes.borrow_mut().remove(token);
        Ok(())
    }

    fn contains(&self, token: &str) -> bool {
        self.classes.borrow().contains(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_clones_share_items() {
        let storage = MemoryStorage::default();
        let other = storage.clone();
        storage.set_item("dark-mode", false).unwrap();
        assert_eq!(other.get_item("dark-mode").unwrap(), Some(false));
        assert_eq!(other.raw("dark-mode").as_deref(), Some("false"));
        assert_eq!(other.get_item("missing").unwrap(), None);
    }

    #[test]
    fn unavailable_storage_fails_both_ways() {
        let storage = MemoryStorage::unavailable();
        assert_eq!(storage.get_item("dark-mode"), Err(ThemeError::StorageUnavailable));
        assert_eq!(
            storage.set_item("dark-mode", true),
            Err(ThemeError::StorageUnavailable)
        );
    }

    #[test]
    fn class_list_add_and_remove_are_idempotent() {
        let root = MemoryClassList::default().with_class("app");
        root.add("dark-mode").unwrap();
        root.add("dark-mode").unwrap();
        assert_eq!(root.classes(), vec!["app".to_string(), "dark-mode".to_string()]);
        root.remove("dark-mode").unwrap();
        root.remove("dark-mode").unwrap();
        assert!(!root.contains("dark-mode"));
        assert!(root.contains("app"));
    }
}
