//! Browser implementations of the shell's collaborators.

use std::cell::RefCell;

use spectra_shell::theme::{ListenerId, ThemeListener, ThemeListeners};
use spectra_shell::{ScrollLock, ThemeId, ThemeSet, ThemeStore};
use web_sys::{CssStyleDeclaration, Storage};

/// `localStorage` key holding the chosen theme id.
const STORAGE_KEY: &str = "theme";

fn body_style() -> Option<CssStyleDeclaration> {
    web_sys::window()?.document()?.body().map(|body| body.style())
}

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Suspends page scrolling through `overflow` on `<body>`.
#[derive(Default)]
pub struct BodyScrollLock {
    prior: RefCell<Option<String>>,
}

impl ScrollLock for BodyScrollLock {
    fn suspend(&self) {
        let Some(style) = body_style() else {
            tracing::warn!("no document body, scroll lock skipped");
            return;
        };
        let prior = style.get_property_value("overflow").unwrap_or_default();
        *self.prior.borrow_mut() = Some(prior);
        if style.set_property("overflow", "hidden").is_err() {
            tracing::warn!("failed to set body overflow");
        }
    }

    fn restore(&self) {
        let prior = self.prior.borrow_mut().take().unwrap_or_default();
        let Some(style) = body_style() else {
            return;
        };
        let result = if prior.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", &prior)
        };
        if result.is_err() {
            tracing::warn!("failed to restore body overflow");
        }
    }
}

/// Theme store backed by `localStorage` and the `<html>` class list.
pub struct BrowserThemeStore {
    known: Vec<ThemeId>,
    current: RefCell<ThemeId>,
    listeners: RefCell<ThemeListeners>,
}

impl BrowserThemeStore {
    /// Restore the persisted theme, or `fallback` when none is stored.
    ///
    /// A stored id outside `themes` (left over from an older theme list) is
    /// ignored.
    pub fn load(themes: &ThemeSet, fallback: ThemeId) -> Self {
        let stored = local_storage()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .map(ThemeId::new);

        let current = match stored {
            Some(id) if themes.contains(&id) => id,
            Some(id) => {
                tracing::debug!(theme = %id, "ignoring stale stored theme");
                fallback
            }
            None => fallback,
        };

        let store = Self {
            known: themes.ids(),
            current: RefCell::new(current),
            listeners: RefCell::new(ThemeListeners::default()),
        };
        store.apply();
        store
    }

    /// Swap the `theme-*` class on the document root.
    fn apply(&self) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let classes = root.class_list();
        for id in &self.known {
            if classes.remove_1(&id.class_name()).is_err() {
                tracing::warn!(theme = %id, "failed to remove theme class");
            }
        }
        if classes.add_1(&self.current.borrow().class_name()).is_err() {
            tracing::warn!("failed to apply theme class");
        }
    }

    fn persist(&self) {
        if let Some(storage) = local_storage() {
            if storage
                .set_item(STORAGE_KEY, self.current.borrow().as_str())
                .is_err()
            {
                tracing::warn!("failed to persist theme");
            }
        }
    }
}

impl ThemeStore for BrowserThemeStore {
    fn current(&self) -> ThemeId {
        self.current.borrow().clone()
    }

    fn set_theme(&self, theme: ThemeId) {
        if *self.current.borrow() == theme {
            return;
        }
        *self.current.borrow_mut() = theme.clone();
        self.apply();
        self.persist();
        tracing::info!(theme = %theme, "theme applied");

        let callbacks = self.listeners.borrow().snapshot();
        for callback in callbacks {
            callback(&theme);
        }
    }

    fn subscribe(&self, listener: ThemeListener) -> ListenerId {
        self.listeners.borrow_mut().add(listener)
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.listeners.borrow_mut().remove(id);
    }
}
