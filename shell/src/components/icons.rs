//! Inline SVG icons.
//!
//! Glyphs follow the [Feather](https://feathericons.com/) set (24px grid,
//! 2px stroke) expressed as single path strings.

use leptos::prelude::*;

use crate::theme::ThemeIcon;
use crate::view_model::MenuIcon;

/// Renders a stroked icon from a path data string.
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    #[prop(into)]
    path: &'static str,
    /// Icon name, exposed as `data-icon`
    #[prop(default = "")]
    name: &'static str,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-icon=name
        >
            <path d=path></path>
        </svg>
    }
}

/// Site logo (filled, 40px grid).
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <svg width="40" height="40" viewBox="0 0 40 40" xmlns="http://www.w3.org/2000/svg" aria-hidden="true">
            <path d=LOGO_BOWL></path>
            <path d=LOGO_STEM></path>
        </svg>
    }
}

pub const ICON_SUN: &str = "M12 7a5 5 0 1 0 0 10a5 5 0 1 0 0-10zM12 1v2M12 21v2M4.22 4.22l1.42 1.42M18.36 18.36l1.42 1.42M1 12h2M21 12h2M4.22 19.78l1.42-1.42M18.36 5.64l1.42-1.42";

pub const ICON_MOON: &str = "M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z";

pub const ICON_MENU: &str = "M3 12h18M3 6h18M3 18h18";

pub const ICON_X: &str = "M18 6L6 18M6 6l12 12";

const LOGO_BOWL: &str = "M26.75 0H2C0.89543 0 0 0.89543 0 2V26.5625H26.75C34.0625 26.5625 40 20.625 40 13.3125C40 6 34.0625 0 26.75 0Z";

const LOGO_STEM: &str = "M0 2.85723V38.0001C0 39.1046 0.895431 40.0001 2 40.0001H36.9822C38.0959 40.0001 38.6536 38.6536 37.8661 37.8662L20 20.0001L0.58 0.590088V0.590088C0.209346 0.947905 0 1.44098 0 1.95616V2.85723Z";

/// Path and name for a theme affordance.
pub fn theme_icon(icon: ThemeIcon) -> (&'static str, &'static str) {
    match icon {
        ThemeIcon::Sun => (ICON_SUN, "sun"),
        ThemeIcon::Moon => (ICON_MOON, "moon"),
    }
}

/// Path and name for the hamburger button.
pub fn menu_icon(icon: MenuIcon) -> (&'static str, &'static str) {
    match icon {
        MenuIcon::Menu => (ICON_MENU, "menu"),
        MenuIcon::Close => (ICON_X, "x"),
    }
}
