use leptos::prelude::*;

use super::icons::{Icon, menu_icon};
use crate::view_model::MenuIcon;

/// Hamburger button for narrow screens.
#[component]
pub fn MenuButton(
    #[prop(into)] icon: Signal<MenuIcon>,
    #[prop(into)] expanded: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="hamburger-menu">
            <button
                type="button"
                class="button tertiary"
                aria-label=move || if expanded.get() { "Close menu" } else { "Open menu" }
                aria-expanded=move || expanded.get().to_string()
                on:click=move |_| on_toggle.run(())
            >
                <span class="icon-swap">
                    {move || {
                        let (path, name) = menu_icon(icon.get());
                        view! { <Icon path=path name=name /> }
                    }}
                </span>
            </button>
        </div>
    }
}
