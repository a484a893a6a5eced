#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

/// Runs `test` inside a fresh reactive runtime, disposed afterwards.
#[cfg(test)]
pub fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = test();
    runtime.dispose();
    result
}

#[cfg(test)]
pub mod helpers {
    use crate::config::{ThemeConfig, DARK_MODE_CLASS, DARK_MODE_KEY};
    use crate::platform::memory::{MemoryClassList, MemoryMediaQuery, MemoryStorage};
    use crate::platform::{PreferenceStore, RootClassList, ThemeEnvironment};
    use crate::state::theme::ThemeController;

    /// In-memory collaborators that stay inspectable after being handed to
    /// a controller.
    pub struct ThemeFixture {
        pub storage: MemoryStorage,
        pub media: MemoryMediaQuery,
        pub root: MemoryClassList,
    }

    impl ThemeFixture {
        pub fn new(persisted: Option<bool>, prefers_dark: bool) -> Self {
            let storage = MemoryStorage::default();
            if let Some(value) = persisted {
                storage.set_item(DARK_MODE_KEY, value).unwrap();
            }
            Self {
                storage,
                media: MemoryMediaQuery::prefers_dark(prefers_dark),
                root: MemoryClassList::default(),
            }
        }

        pub fn failing() -> Self {
            Self {
                storage: MemoryStorage::unavailable(),
                media: MemoryMediaQuery::unsupported(),
                root: MemoryClassList::default(),
            }
        }

        pub fn environment(&self) -> ThemeEnvironment {
            ThemeEnvironment::new(self.storage.clone(), self.media.clone(), self.root.clone())
        }

        pub fn controller(&self) -> ThemeController {
            ThemeController::new(self.environment(), ThemeConfig::default())
        }

        pub fn marker(&self) -> bool {
            self.root.contains(DARK_MODE_CLASS)
        }

        pub fn stored(&self) -> Option<bool> {
            self.storage.get_item(DARK_MODE_KEY).unwrap()
        }
    }
}
