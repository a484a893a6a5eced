//! Collaborators the theme controller talks to: durable storage, the
//! host's color-scheme query and the root element's class list.

pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::error::ThemeError;
use std::rc::Rc;

/// Key-value store with a tri-state read: `Some(true)`, `Some(false)` or
/// `None` when nothing was ever stored.
pub trait PreferenceStore {
    fn get_item(&self, key: &str) -> Result<Option<bool>, ThemeError>;
    fn set_item(&self, key: &str, value: bool) -> Result<(), ThemeError>;
}

pub trait MediaQuery {
    /// Whether the environment currently matches `query`.
    fn matches(&self, query: &str) -> Result<bool, ThemeError>;
}

/// Class set of the document root. `add` and `remove` must be idempotent.
pub trait RootClassList {
    fn add(&self, token: &str) -> Result<(), ThemeError>;
    fn remove(&self, token: &str) -> Result<(), ThemeError>;
    fn contains(&self, token: &str) -> bool;
}

#[derive(Clone)]
pub struct ThemeEnvironment {
    pub storage: Rc<dyn PreferenceStore>,
    pub media: Rc<dyn MediaQuery>,
    pub root: Rc<dyn RootClassList>,
}

impl ThemeEnvironment {
    pub fn new(
        storage: impl PreferenceStore + 'static,
        media: impl MediaQuery + 'static,
        root: impl RootClassList + 'static,
    ) -> Self {
        Self {
            storage: Rc::new(storage),
            media: Rc::new(media),
            root: Rc::new(root),
        }
    }

    /// Browser collaborators on wasm, in-memory ones everywhere else.
    pub fn detect() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(web::LocalStorage, web::WindowMediaQuery, web::DocumentRoot)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::new(
                memory::MemoryStorage::default(),
                memory::MemoryMediaQuery::default(),
                memory::MemoryClassList::default(),
            )
        }
    }
}

impl std::fmt::Debug for ThemeEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeEnvironment").finish_non_exhaustive()
    }
}
