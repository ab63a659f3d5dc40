//! Leptos components for the page shell.
//!
//! # Component Hierarchy
//!
//! ```text
//! Layout
//! ├── SiteHeader
//! │   ├── Logo
//! │   ├── NavLinks        (inline / overlay)
//! │   ├── ThemePicker     (sun / moon)
//! │   └── MenuButton      (menu / x)
//! └── <main id="main-content">
//! ```
//!
//! Components render the same in the browser and through
//! `crate::render_shell` (with the `ssr` feature).

mod header;
mod icons;
mod menu_button;
mod nav_links;
mod theme_picker;
mod typography;

pub use header::{Layout, SiteHeader};
pub use icons::*;
pub use menu_button::MenuButton;
pub use nav_links::NavLinks;
pub use theme_picker::ThemePicker;
pub use typography::{Text, TypeScale, text_class};
