//! Navigation link list. Inline on wide screens, full-screen overlay on
//! narrow ones while `open` is set.

use leptos::prelude::*;

use crate::view_model::LinkView;

#[component]
pub fn NavLinks(
    #[prop(into)] links: Signal<Vec<LinkView>>,
    #[prop(into)] open: Signal<bool>,
    /// Fired when any link is followed
    on_navigate: Callback<()>,
) -> impl IntoView {
    view! {
        <ul class="nav-links" class:open=move || open.get()>
            <For
                each=move || links.get()
                key=|link: &LinkView| link.key.clone()
                children=move |link: LinkView| {
                    let key = link.key.clone();
                    let is_active = move || {
                        links.with(|all| all.iter().any(|l| l.key == key && l.active))
                    };
                    view! {
                        <li>
                            <a
                                href=link.href
                                class:active=is_active.clone()
                                aria-current=move || is_active().then_some("page")
                                on:click=move |_| on_navigate.run(())
                            >
                                {link.label}
                            </a>
                        </li>
                    }
                }
            />
        </ul>
    }
}
