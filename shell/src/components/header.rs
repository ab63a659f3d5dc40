//! Page header and layout.
//!
//! `SiteHeader` owns a [`ShellController`] for as long as it is mounted. The
//! controller lives in local (non-`Send`) reactive storage; a pair of signals
//! mirror its menu state and the store's theme so the view can react to them.
//! When the header unmounts the menu is closed and the store listener is
//! dropped, which releases the scroll lock if the overlay was open.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use super::icons::Logo;
use super::menu_button::MenuButton;
use super::nav_links::NavLinks;
use super::theme_picker::ThemePicker;
use crate::controller::ShellController;
use crate::nav::compute_active_link;
use crate::theme::ThemeId;
use crate::view_model::render;

/// Fixed page header: logo, navigation, theme toggle and mobile menu button.
#[component]
pub fn SiteHeader(
    /// Composed controller; see [`ShellController::compose`]
    controller: ShellController,
    /// Current route path, e.g. `/blog`
    #[prop(into)]
    current_path: Signal<String>,
    /// Accessible name of the logo link
    #[prop(into, default = String::from("Home"))]
    site_name: String,
) -> impl IntoView {
    let nav = controller.nav().to_vec();
    let themes = controller.themes().clone();

    let (theme, set_theme) = signal(controller.current_theme());
    let (menu, set_menu) = signal(controller.menu_state());
    let listener = controller.subscribe_theme(Box::new(move |id: &ThemeId| {
        set_theme.set(id.clone())
    }));

    let ctl = StoredValue::new_local(Rc::new(RefCell::new(controller)));

    // Runs `f` against the controller and mirrors the resulting menu state.
    let with_menu = move |f: &dyn Fn(&mut ShellController)| {
        if let Some(ctl) = ctl.try_get_value() {
            let mut ctl = ctl.borrow_mut();
            f(&mut ctl);
            set_menu.set(ctl.menu_state());
        }
    };

    Effect::new(move |_| {
        let path = current_path.get();
        with_menu(&|c: &mut ShellController| c.on_route_change(&path));
    });

    on_cleanup(move || {
        if let Some(ctl) = ctl.try_get_value() {
            let mut ctl = ctl.borrow_mut();
            ctl.close_menu();
            ctl.unsubscribe_theme(listener);
        }
    });

    let view_model = Memo::new(move |_| {
        let path = current_path.get();
        render(
            menu.get(),
            compute_active_link(&path, &nav),
            &theme.get(),
            &nav,
            &themes,
        )
    });

    let toggle_menu = Callback::new(move |_: ()| {
        with_menu(&|c: &mut ShellController| {
            c.toggle_menu();
        })
    });
    let close_menu = Callback::new(move |_: ()| {
        with_menu(&|c: &mut ShellController| c.close_menu())
    });
    let cycle_theme = Callback::new(move |_: ()| {
        if let Some(ctl) = ctl.try_get_value() {
            if let Err(e) = ctl.borrow().cycle_theme() {
                tracing::warn!(error = %e, "theme toggle ignored");
            }
        }
    });

    let links = Signal::derive(move || view_model.with(|vm| vm.links.clone()));
    let overlay = Signal::derive(move || view_model.with(|vm| vm.overlay_visible));
    let menu_icon = Signal::derive(move || view_model.with(|vm| vm.menu_icon));
    let theme_toggle = Signal::derive(move || view_model.with(|vm| vm.theme_toggle.clone()));

    view! {
        <header class="site-header" data-theme=move || theme.get().to_string()>
            <nav>
                <div class="leading">
                    <a href="/" class="logo" aria-label=site_name>
                        <Logo />
                    </a>
                </div>
                <div class="trailing">
                    <NavLinks links=links open=overlay on_navigate=close_menu />
                    <ThemePicker toggle=theme_toggle on_cycle=cycle_theme />
                    <MenuButton icon=menu_icon expanded=overlay on_toggle=toggle_menu />
                </div>
            </nav>
        </header>
    }
}

/// Header plus the main content region.
#[component]
pub fn Layout(
    controller: ShellController,
    #[prop(into)] current_path: Signal<String>,
    #[prop(into, default = String::from("Home"))] site_name: String,
    children: Children,
) -> impl IntoView {
    view! {
        <SiteHeader controller=controller current_path=current_path site_name=site_name />
        <main class="site-main" id="main-content" tabindex="-1">
            {children()}
        </main>
    }
}
