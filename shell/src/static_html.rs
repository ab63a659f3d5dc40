//! Static HTML rendering of the header.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::components::SiteHeader;
use crate::{MemoryThemeStore, NoopScrollLock, Result, Shell, ShellController, ThemeId};

/// Render the site header to an HTML string.
///
/// `theme` overrides the configured default theme. No document exists here,
/// so the scroll lock is a no-op and the theme lives in memory.
///
/// ```rust
/// use spectra_shell::{ShellConfig, render_shell};
///
/// let shell = ShellConfig::default().validate().unwrap();
/// let html = render_shell(&shell, "/blog", None).unwrap();
/// assert!(html.contains("site-header"));
/// ```
///
/// # Errors
///
/// [`crate::ShellError::UnknownTheme`] when `theme` is not in the configured set.
pub fn render_shell(shell: &Shell, current_path: &str, theme: Option<ThemeId>) -> Result<String> {
    let theme = theme.unwrap_or_else(|| shell.default_theme.clone());
    let store = MemoryThemeStore::new(theme);
    let controller = ShellController::from_shell(shell, Rc::new(store), Rc::new(NoopScrollLock))?;

    let path = current_path.to_string();
    let site_name = shell.site_name.clone();
    let owner = Owner::new_root(None);
    let html = owner.with(move || {
        view! {
            <SiteHeader
                controller=controller
                current_path=Signal::derive(move || path.clone())
                site_name=site_name
            />
        }
        .to_html()
    });

    Ok(html)
}
