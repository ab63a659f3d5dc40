//! Navigation shell controller.
//!
//! Composes the menu, the nav list and an injected theme store into the
//! operations the header needs: toggle the overlay, cycle the theme and
//! project everything into a [`ViewModel`].

use std::fmt;
use std::rc::Rc;

use crate::config::Shell;
use crate::error::Result;
use crate::menu::{MenuController, MenuState, ScrollLock};
use crate::nav::{NavItem, compute_active_link};
use crate::theme::{ListenerId, ThemeId, ThemeListener, ThemeSet, ThemeStore};
use crate::view_model::{ViewModel, render};

pub struct ShellController {
    menu: MenuController,
    store: Rc<dyn ThemeStore>,
    nav: Vec<NavItem>,
    themes: ThemeSet,
}

impl ShellController {
    /// Wire the controller to its collaborators.
    ///
    /// Fails with [`crate::ShellError::UnknownTheme`] when the store already
    /// holds a theme outside `themes`; that is a composition error, not
    /// something to recover from at click time.
    pub fn compose(
        nav: Vec<NavItem>,
        themes: ThemeSet,
        store: Rc<dyn ThemeStore>,
        lock: Rc<dyn ScrollLock>,
    ) -> Result<Self> {
        themes.ensure_known(&store.current())?;
        Ok(Self {
            menu: MenuController::new(lock),
            store,
            nav,
            themes,
        })
    }

    /// Same as [`ShellController::compose`], taking lists from a validated [`Shell`].
    pub fn from_shell(
        shell: &Shell,
        store: Rc<dyn ThemeStore>,
        lock: Rc<dyn ScrollLock>,
    ) -> Result<Self> {
        Self::compose(shell.nav.clone(), shell.themes.clone(), store, lock)
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu.toggle()
    }

    pub fn close_menu(&mut self) {
        self.menu.close();
    }

    pub fn on_route_change(&mut self, path: &str) {
        self.menu.on_route_change(path);
    }

    pub fn menu_state(&self) -> MenuState {
        self.menu.state()
    }

    pub fn scroll_suspended(&self) -> bool {
        self.menu.scroll_suspended()
    }

    pub fn current_theme(&self) -> ThemeId {
        self.store.current()
    }

    /// Ask the store to move to the next theme. Returns the requested id.
    pub fn cycle_theme(&self) -> Result<ThemeId> {
        let next = self.themes.next(&self.store.current())?;
        tracing::debug!(theme = %next, "switching theme");
        self.store.set_theme(next.clone());
        Ok(next)
    }

    /// Forward store change notifications to `listener`.
    pub fn subscribe_theme(&self, listener: ThemeListener) -> ListenerId {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe_theme(&self, id: ListenerId) {
        self.store.unsubscribe(id);
    }

    pub fn active_link(&self, current_path: &str) -> Option<usize> {
        compute_active_link(current_path, &self.nav)
    }

    /// View of the shell for `current_path`.
    pub fn view(&self, current_path: &str) -> ViewModel {
        render(
            self.menu.state(),
            self.active_link(current_path),
            &self.store.current(),
            &self.nav,
            &self.themes,
        )
    }

    pub fn nav(&self) -> &[NavItem] {
        &self.nav
    }

    pub fn themes(&self) -> &ThemeSet {
        &self.themes
    }
}

impl fmt::Debug for ShellController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShellController")
            .field("menu", &self.menu)
            .field("theme", &self.store.current())
            .field("nav", &self.nav)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShellError;
    use crate::menu::tests::RecordingLock;
    use crate::nav::default_nav;
    use crate::theme::{MemoryThemeStore, ThemeIcon};
    use crate::view_model::MenuIcon;

    fn shell(theme: ThemeId) -> (MemoryThemeStore, Rc<RecordingLock>, ShellController) {
        let store = MemoryThemeStore::new(theme);
        let lock = Rc::new(RecordingLock::default());
        let ctl = ShellController::compose(
            default_nav(),
            ThemeSet::light_dark(),
            Rc::new(store.clone()),
            lock.clone(),
        )
        .unwrap();
        (store, lock, ctl)
    }

    #[test]
    fn end_to_end_closed_light_blog() {
        let (_store, lock, ctl) = shell(ThemeId::light());
        let vm = ctl.view("/blog");

        assert!(!vm.overlay_visible);
        assert_eq!(vm.menu_icon, MenuIcon::Menu);
        assert_eq!(vm.theme_toggle.as_ref().map(|t| t.icon), Some(ThemeIcon::Moon));
        let active: Vec<_> = vm.links.iter().filter(|l| l.active).map(|l| l.key.as_str()).collect();
        assert_eq!(active, vec!["blog"]);
        assert!(!lock.suspended.get());
    }

    #[test]
    fn unknown_store_theme_fails_fast() {
        let err = ShellController::compose(
            default_nav(),
            ThemeSet::light_dark(),
            Rc::new(MemoryThemeStore::new(ThemeId::new("sepia"))),
            Rc::new(RecordingLock::default()),
        )
        .unwrap_err();
        assert!(matches!(err, ShellError::UnknownTheme(id) if id == "sepia"));
    }

    #[test]
    fn cycle_theme_writes_through_store() {
        let (store, _lock, ctl) = shell(ThemeId::light());
        assert_eq!(ctl.cycle_theme().unwrap(), ThemeId::dark());
        assert_eq!(store.current(), ThemeId::dark());
        assert_eq!(ctl.current_theme(), ThemeId::dark());

        assert_eq!(ctl.cycle_theme().unwrap(), ThemeId::light());
        assert_eq!(store.current(), ThemeId::light());
    }

    #[test]
    fn view_follows_external_theme_changes() {
        let (store, _lock, ctl) = shell(ThemeId::light());
        store.set_theme(ThemeId::dark());
        let vm = ctl.view("/work");
        assert_eq!(vm.theme_class, "theme-dark");
        assert_eq!(vm.theme_toggle.map(|t| t.icon), Some(ThemeIcon::Sun));
    }

    #[test]
    fn toggle_locks_and_view_shows_overlay() {
        let (_store, lock, mut ctl) = shell(ThemeId::light());
        assert!(ctl.toggle_menu());
        assert!(lock.suspended.get());

        let vm = ctl.view("/about");
        assert!(vm.overlay_visible);
        assert_eq!(vm.menu_icon, MenuIcon::Close);

        ctl.close_menu();
        assert!(!lock.suspended.get());
        assert!(!ctl.view("/about").overlay_visible);
    }

    #[test]
    fn theme_listeners_pass_through() {
        let (store, _lock, ctl) = shell(ThemeId::light());
        let seen = Rc::new(std::cell::RefCell::new(Vec::new()));
        let id = {
            let seen = seen.clone();
            ctl.subscribe_theme(Box::new(move |t: &ThemeId| seen.borrow_mut().push(t.clone())))
        };
        ctl.cycle_theme().unwrap();
        ctl.unsubscribe_theme(id);
        ctl.cycle_theme().unwrap();
        assert_eq!(*seen.borrow(), vec![ThemeId::dark()]);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn teardown_while_open_restores_scroll() {
        let (_store, lock, mut ctl) = shell(ThemeId::dark());
        ctl.toggle_menu();
        drop(ctl);
        assert!(!lock.suspended.get());
    }

    #[test]
    fn navigation_away_closes_menu() {
        let (_store, lock, mut ctl) = shell(ThemeId::light());
        ctl.on_route_change("/work");
        ctl.toggle_menu();
        ctl.on_route_change("/blog");
        assert!(!ctl.menu_state().is_open);
        assert!(!ctl.scroll_suspended());
        assert!(!lock.suspended.get());
    }
}
