//! Projection from shell state to a renderable description.

use crate::menu::MenuState;
use crate::nav::NavItem;
use crate::theme::{ThemeIcon, ThemeId, ThemeSet};

/// Glyph on the hamburger button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    /// Closed menu: three bars
    Menu,
    /// Open menu: a cross
    Close,
}

/// One rendered navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    /// Stable list key (the nav item's path segment)
    pub key: String,
    pub href: String,
    pub label: String,
    pub active: bool,
}

/// What the theme button shows and what it switches to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeToggleView {
    pub icon: ThemeIcon,
    pub next: ThemeId,
    /// Accessible label, e.g. "Switch to Dark theme"
    pub label: String,
}

/// Everything the renderer needs for one frame of the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub overlay_visible: bool,
    pub menu_icon: MenuIcon,
    pub links: Vec<LinkView>,
    pub active_index: Option<usize>,
    /// `None` when the current theme is outside the set; the picker then
    /// renders nothing.
    pub theme_toggle: Option<ThemeToggleView>,
    pub theme_class: String,
}

/// Map state to view. Pure; no decisions beyond the direct mapping.
pub fn render(
    menu: MenuState,
    active_index: Option<usize>,
    current_theme: &ThemeId,
    items: &[NavItem],
    themes: &ThemeSet,
) -> ViewModel {
    let links = items
        .iter()
        .enumerate()
        .map(|(idx, item)| LinkView {
            key: item.path.clone(),
            href: item.href(),
            label: item.label.clone(),
            active: active_index == Some(idx),
        })
        .collect();

    let theme_toggle = themes.next_entry(current_theme).map(|next| ThemeToggleView {
        icon: next.icon,
        next: next.id.clone(),
        label: format!("Switch to {} theme", next.label),
    });

    ViewModel {
        overlay_visible: menu.is_open,
        menu_icon: if menu.is_open {
            MenuIcon::Close
        } else {
            MenuIcon::Menu
        },
        links,
        active_index,
        theme_toggle,
        theme_class: current_theme.class_name(),
    }
}
