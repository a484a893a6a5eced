use leptos::*;

mod components;
pub mod config;
pub mod error;
pub mod platform;
pub mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

pub use components::theme::{ThemeProvider, ThemeStatus, ThemeToggle};
pub use error::ThemeError;
pub use state::theme::{provide_theme, use_theme, Theme, ThemeContext, ThemeController};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ThemeProvider>
            <header class="flex items-center justify-between p-4 bg-white dark:bg-gray-900">
                <ThemeStatus/>
                <ThemeToggle/>
            </header>
        </ThemeProvider>
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting Themekeeper Frontend (wasm)");

    let cfg = config::init();
    log::debug!("Theme config resolved: {cfg:?}");

    mount_to_body(|| view! { <App/> });
}
