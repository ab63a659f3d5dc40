//! Mount and unmount of the `SiteHeader` component.

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;
use spectra_shell::components::SiteHeader;
use spectra_shell::{
    MemoryThemeStore, ScrollLock, ShellConfig, ShellController, ThemeId, ThemeStore,
};

#[derive(Default)]
struct CountingLock {
    suspended: Cell<bool>,
    restores: Cell<usize>,
}

impl ScrollLock for CountingLock {
    fn suspend(&self) {
        self.suspended.set(true);
    }

    fn restore(&self) {
        self.suspended.set(false);
        self.restores.set(self.restores.get() + 1);
    }
}

fn compose(store: &MemoryThemeStore, lock: &Rc<CountingLock>) -> ShellController {
    let shell = ShellConfig::default().validate().expect("default config is valid");
    ShellController::from_shell(&shell, Rc::new(store.clone()), lock.clone())
        .expect("store theme is in the default set")
}

#[test]
fn unmount_while_open_restores_scroll_and_drops_listener() {
    let store = MemoryThemeStore::new(ThemeId::light());
    let lock = Rc::new(CountingLock::default());
    let mut controller = compose(&store, &lock);
    assert!(controller.toggle_menu());
    assert!(lock.suspended.get());

    let owner = Owner::new_root(None);
    let _view = owner.with(|| {
        view! { <SiteHeader controller=controller current_path="/blog".to_string() /> }
    });
    assert_eq!(store.listener_count(), 1);
    assert!(lock.suspended.get(), "mounting must not release the lock");

    owner.cleanup();

    assert!(!lock.suspended.get());
    assert_eq!(lock.restores.get(), 1);
    assert_eq!(store.listener_count(), 0);
}

#[test]
fn unmount_while_closed_leaves_scroll_alone() {
    let store = MemoryThemeStore::new(ThemeId::dark());
    let lock = Rc::new(CountingLock::default());
    let controller = compose(&store, &lock);

    let owner = Owner::new_root(None);
    let _view = owner.with(|| {
        view! { <SiteHeader controller=controller current_path="/".to_string() /> }
    });
    owner.cleanup();

    assert!(!lock.suspended.get());
    assert_eq!(lock.restores.get(), 0);
    assert_eq!(store.listener_count(), 0);
}

#[test]
fn external_theme_change_keeps_menu_closed() {
    let store = MemoryThemeStore::new(ThemeId::light());
    let lock = Rc::new(CountingLock::default());
    let controller = compose(&store, &lock);

    let owner = Owner::new_root(None);
    let _view = owner.with(|| {
        view! { <SiteHeader controller=controller current_path="/".to_string() /> }
    });

    // Notifies the header's listener while mounted.
    store.set_theme(ThemeId::dark());
    assert_eq!(store.current(), ThemeId::dark());
    assert!(!lock.suspended.get());

    owner.cleanup();
    assert_eq!(store.listener_count(), 0);
}
