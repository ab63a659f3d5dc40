use leptos::prelude::*;

use super::icons::{Icon, theme_icon};
use crate::view_model::ThemeToggleView;

/// Button that switches to the next theme.
///
/// Shows the glyph of the theme a click switches to (a moon while light is
/// active). Renders nothing when the current theme is not configured.
#[component]
pub fn ThemePicker(
    #[prop(into)] toggle: Signal<Option<ThemeToggleView>>,
    on_cycle: Callback<()>,
) -> impl IntoView {
    move || {
        toggle.get().map(|t| {
            let (path, name) = theme_icon(t.icon);
            view! {
                <div class="theme-picker">
                    <button
                        type="button"
                        class="button tertiary"
                        aria-label=t.label
                        data-next-theme=t.next.to_string()
                        on:click=move |_| on_cycle.run(())
                    >
                        <span class="icon-swap">
                            <Icon path=path name=name />
                        </span>
                    </button>
                </div>
            }
        })
    }
}
