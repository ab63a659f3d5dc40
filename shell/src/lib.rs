//! # spectra-shell
//!
//! Page shell for the Spectra Salon Suites site: fixed header with
//! navigation links, a mobile navigation overlay, a theme toggle and the
//! site's typographic primitives, built with [Leptos](https://leptos.dev/).
//!
//! ## Architecture
//!
//! - [`nav`] - navigation entries and active-link derivation
//! - [`theme`] - theme ids, the ordered theme set, the [`ThemeStore`] seam
//! - [`menu`] - overlay state and the RAII scroll lock
//! - [`view_model`] - pure state-to-view projection
//! - [`controller`] - [`ShellController`], composing the above
//! - [`config`] - TOML configuration
//! - [`components`] - Leptos components
//! - [`styles`] - CSS constants
//!
//! The browser app injects a DOM scroll lock and a persistent theme store;
//! with the `ssr` feature (on by default), `render_shell` renders the same
//! header to a static HTML string.

pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod menu;
pub mod nav;
#[cfg(feature = "ssr")]
mod static_html;
pub mod styles;
pub mod theme;
pub mod view_model;

pub use config::{Shell, ShellConfig};
pub use controller::ShellController;
pub use error::{Result, ShellError};
pub use menu::{MenuController, MenuState, NoopScrollLock, ScrollGuard, ScrollLock};
pub use nav::{NavItem, compute_active_link};
pub use theme::{MemoryThemeStore, ThemeId, ThemeSet, ThemeStore, cycle_theme};
pub use view_model::{ViewModel, render};

#[cfg(feature = "ssr")]
pub use static_html::render_shell;
