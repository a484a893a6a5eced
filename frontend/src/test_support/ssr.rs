use super::with_runtime;
use crate::config::ThemeConfig;
use crate::platform::ThemeEnvironment;
use crate::state::theme::provide_theme;
use leptos::*;

/// Renders `view` with no theme provider above it.
pub fn render_to_string<N: IntoView>(view: impl FnOnce() -> N) -> String {
    with_runtime(|| view().into_view().render_to_string().to_string())
}

/// Renders `view` below an initialized controller built on `environment`.
pub fn render_with_theme<N: IntoView>(
    environment: ThemeEnvironment,
    view: impl FnOnce() -> N,
) -> String {
    with_runtime(|| {
        provide_theme(environment, ThemeConfig::default());
        view().into_view().render_to_string().to_string()
    })
}
