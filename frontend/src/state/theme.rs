use crate::config::ThemeConfig;
use crate::platform::ThemeEnvironment;
use leptos::*;
use log::{debug, warn};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }
}

type Observer = Rc<dyn Fn(Theme)>;

/// Owns the dark-mode flag and keeps storage and the root class in step
/// with it.
///
/// A new controller reads `false` (light) until [`ThemeController::initialize`]
/// has resolved the real preference. Seeing that default is expected for a
/// freshly mounted controller and is not an error state.
///
/// One controller per document: two of them would fight over the same
/// storage slot and root class.
#[derive(Clone)]
pub struct ThemeController {
    is_dark: RwSignal<bool>,
    initialized: RwSignal<bool>,
    env: ThemeEnvironment,
    config: Rc<ThemeConfig>,
    observers: Rc<RefCell<Vec<Observer>>>,
    committing: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<bool>>>,
}

impl ThemeController {
    pub fn new(env: ThemeEnvironment, config: ThemeConfig) -> Self {
        let controller = Self {
            is_dark: create_rw_signal(false),
            initialized: create_rw_signal(false),
            env,
            config: Rc::new(config),
            observers: Rc::default(),
            committing: Rc::default(),
            pending: Rc::default(),
        };

        // The sync pass is always the first observer.
        let env = controller.env.clone();
        let config = Rc::clone(&controller.config);
        controller.on_change(move |theme| sync_document(&env, &config, theme));
        controller
    }

    /// Resolves the starting theme: the persisted choice wins, including an
    /// explicit `false`; the system preference is only asked when nothing
    /// was persisted. Runs once; later calls keep the current theme.
    pub fn initialize(&self) -> Theme {
        if self.initialized.get_untracked() {
            warn!("theme controller already initialized; keeping current theme");
            return self.theme_untracked();
        }

        let is_dark = match self.persisted_preference() {
            Some(value) => {
                debug!("theme: using persisted preference (dark={value})");
                value
            }
            None => {
                let value = self.system_prefers_dark();
                debug!("theme: no persisted preference, system dark={value}");
                value
            }
        };

        self.commit(is_dark);
        self.initialized.set(true);
        Theme::from_dark(is_dark)
    }

    /// Setting the current value again is a no-op. Called from an observer,
    /// the value is queued and committed once the running pass finishes.
    pub fn set_theme(&self, next: bool) {
        if self.committing.get() {
            self.pending.set(Some(next));
            return;
        }
        if self.is_dark.get_untracked() == next {
            debug!("theme: unchanged (dark={next})");
            return;
        }
        self.commit(next);
    }

    pub fn toggle(&self) {
        self.set_theme(!self.is_dark.get_untracked());
    }

    /// Registers a callback run after every committed change, after the
    /// storage and document have been synced. Registering from inside a
    /// callback takes effect from the next pass.
    pub fn on_change(&self, observer: impl Fn(Theme) + 'static) {
        self.observers.borrow_mut().push(Rc::new(observer));
    }

    pub fn is_dark(&self) -> Signal<bool> {
        self.is_dark.into()
    }

    pub fn theme(&self) -> Signal<Theme> {
        let is_dark = self.is_dark;
        Signal::derive(move || Theme::from_dark(is_dark.get()))
    }

    pub fn theme_untracked(&self) -> Theme {
        Theme::from_dark(self.is_dark.get_untracked())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.get_untracked()
    }

    pub fn context(&self) -> ThemeContext {
        let controller = self.clone();
        ThemeContext::Ready {
            is_dark: self.is_dark(),
            set_theme: Callback::new(move |next: bool| controller.set_theme(next)),
        }
    }

    /// Runs one full pass per committed value; passes never nest.
    fn commit(&self, is_dark: bool) {
        self.committing.set(true);
        let mut next = Some(is_dark);
        while let Some(is_dark) = next {
            self.is_dark.set(is_dark);
            let theme = Theme::from_dark(is_dark);
            let observers = self.observers.borrow().clone();
            for observer in &observers {
                observer(theme);
            }
            next = self.pending.take().filter(|queued| *queued != is_dark);
        }
        self.committing.set(false);
    }

    fn persisted_preference(&self) -> Option<bool> {
        match self.env.storage.get_item(&self.config.storage_key) {
            Ok(value) => value,
            Err(err) => {
                warn!("theme: reading persisted preference failed: {err}");
                None
            }
        }
    }

    fn system_prefers_dark(&self) -> bool {
        match self.env.media.matches(&self.config.media_query) {
            Ok(matches) => matches,
            Err(err) => {
                warn!("theme: system preference unavailable: {err}");
                false
            }
        }
    }
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("theme", &self.theme_untracked())
            .field("initialized", &self.is_initialized())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn sync_document(env: &ThemeEnvironment, config: &ThemeConfig, theme: Theme) {
    if let Err(err) = env.storage.set_item(&config.storage_key, theme.is_dark()) {
        warn!("theme: persisting preference failed: {err}");
    }

    let marked = if theme.is_dark() {
        env.root.add(&config.dark_class)
    } else {
        env.root.remove(&config.dark_class)
    };
    if let Err(err) = marked {
        warn!("theme: updating root class failed: {err}");
    }
}

/// What descendants see of the theme. `Uninitialized` means no
/// [`ThemeController`] has been provided above them.
#[derive(Clone, Copy, Default)]
pub enum ThemeContext {
    #[default]
    Uninitialized,
    Ready {
        is_dark: Signal<bool>,
        set_theme: Callback<bool>,
    },
}

impl ThemeContext {
    pub fn is_ready(&self) -> bool {
        matches!(self, ThemeContext::Ready { .. })
    }

    pub fn is_dark(&self) -> Option<bool> {
        match self {
            ThemeContext::Ready { is_dark, .. } => Some(is_dark.get()),
            ThemeContext::Uninitialized => None,
        }
    }

    pub fn theme(&self) -> Option<Theme> {
        self.is_dark().map(Theme::from_dark)
    }

    /// Returns `false` when there is no controller to forward to.
    pub fn set_theme(&self, next: bool) -> bool {
        match self {
            ThemeContext::Ready { set_theme, .. } => {
                set_theme.call(next);
                true
            }
            ThemeContext::Uninitialized => false,
        }
    }

    pub fn toggle(&self) -> bool {
        match self {
            ThemeContext::Ready { is_dark, set_theme } => {
                set_theme.call(!is_dark.get_untracked());
                true
            }
            ThemeContext::Uninitialized => false,
        }
    }
}

impl std::fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeContext::Uninitialized => f.write_str("Uninitialized"),
            ThemeContext::Ready { is_dark, .. } => f
                .debug_struct("Ready")
                .field("is_dark", &is_dark.get_untracked())
                .finish_non_exhaustive(),
        }
    }
}

/// Builds a controller, resolves the initial theme and provides the
/// resulting [`ThemeContext`] to descendants.
pub fn provide_theme(env: ThemeEnvironment, config: ThemeConfig) -> ThemeController {
    let controller = ThemeController::new(env, config);
    controller.initialize();
    provide_context(controller.context());
    controller
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_default()
}
