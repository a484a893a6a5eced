use crate::config;
use crate::platform::ThemeEnvironment;
use crate::state::theme::{provide_theme, use_theme};
use leptos::*;

/// Resolves the theme before rendering `children`, so descendants never
/// render against the light placeholder.
#[component]
pub fn ThemeProvider(
    children: Children,
    /// Collaborators to use instead of the detected ones.
    #[prop(optional)]
    environment: Option<ThemeEnvironment>,
) -> impl IntoView {
    let environment = environment.unwrap_or_else(ThemeEnvironment::detect);
    provide_theme(environment, config::current());

    view! { <>{children()}</> }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    let is_dark = move || theme.theme().unwrap_or_default().is_dark();

    let on_click = move |_| {
        if !theme.toggle() {
            log::warn!("ThemeToggle clicked outside of a ThemeProvider");
        }
    };

    view! {
        <button
            type="button"
            class="relative inline-flex h-6 w-11 items-center rounded-full bg-gray-200 dark:bg-gray-700 transition-colors focus:outline-none focus:ring-2 focus:ring-primary-500 focus:ring-offset-2"
            on:click=on_click
            disabled={!theme.is_ready()}
            aria-pressed=move || is_dark().to_string()
            aria-label="Toggle theme"
        >
            <span class="sr-only">"Toggle theme"</span>

            <span
                class=move || {
                    if is_dark() {
                        "translate-x-6 bg-primary-600"
                    } else {
                        "translate-x-1 bg-white"
                    }
                }
                class="inline-block h-4 w-4 transform rounded-full transition-transform shadow-theme-switch"
            />

            <span
                class=move || { if is_dark() { "opacity-100" } else { "opacity-0" } }
                class="absolute left-1 top-1/2 -translate-y-1/2 text-xs text-gray-400 transition-opacity"
            >
                <i class="fas fa-moon"></i>
            </span>

            <span
                class=move || { if is_dark() { "opacity-0" } else { "opacity-100" } }
                class="absolute right-1 top-1/2 -translate-y-1/2 text-xs text-yellow-500 transition-opacity"
            >
                <i class="fas fa-sun"></i>
            </span>
        </button>
    }
}

/// Names the active theme, or says there is no provider.
#[component]
pub fn ThemeStatus() -> impl IntoView {
    let theme = use_theme();

    view! {
        <span class="theme-status">
            {move || match theme.theme() {
                Some(current) => format!("{} theme", current.label()),
                None => "Theme unavailable".to_string(),
            }}
        </span>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::ThemeFixture;
    use crate::test_support::ssr::{render_to_string, render_with_theme};

    #[test]
    fn toggle_is_disabled_without_provider() {
        let html = render_to_string(|| view! { <ThemeToggle/> });
        assert!(html.contains("disabled"));
        assert!(html.contains("aria-pressed=\"false\""));
    }

    #[test]
    fn status_reports_missing_provider() {
        let html = render_to_string(|| view! { <ThemeStatus/> });
        assert!(html.contains("Theme unavailable"));
    }

    #[test]
    fn provider_renders_persisted_dark_theme() {
        let fixture = ThemeFixture::new(Some(true), false);
        let environment = fixture.environment();
        let html = render_to_string(move || {
            view! {
                <ThemeProvider environment=environment>
                    <ThemeToggle/>
                    <ThemeStatus/>
                </ThemeProvider>
            }
        });
        assert!(html.contains("Dark theme"));
        assert!(html.contains("aria-pressed=\"true\""));
        assert!(!html.contains("disabled"));
        assert!(fixture.marker());
    }

    #[test]
    fn toggle_reflects_light_controller() {
        let fixture = ThemeFixture::new(Some(false), true);
        let html = render_with_theme(fixture.environment(), || {
            view! { <ThemeToggle/><ThemeStatus/> }
        });
        assert!(html.contains("aria-pressed=\"false\""));
        assert!(html.contains("Light theme"));
        assert!(!html.contains("disabled"));
        assert_eq!(fixture.stored(), Some(false));
    }

    #[test]
    fn provider_falls_back_to_system_preference() {
        let fixture = ThemeFixture::new(None, true);
        let environment = fixture.environment();
        let html = render_to_string(move || {
            view! {
                <ThemeProvider environment=environment>
                    <ThemeStatus/>
                </ThemeProvider>
            }
        });
        assert!(html.contains("Dark theme"));
        assert_eq!(fixture.stored(), Some(true));
    }

    #[test]
    fn provider_without_environment_defaults_to_light() {
        let html = render_to_string(|| {
            view! {
                <ThemeProvider>
                    <ThemeStatus/>
                </ThemeProvider>
            }
        });
        assert!(html.contains("Light theme"));
    }
}
