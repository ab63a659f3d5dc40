//! Mobile menu state and the page scroll lock.
//!
//! While the navigation overlay is open the page behind it must not scroll.
//! The lock is held as a [`ScrollGuard`]: the controller owns a guard exactly
//! while the menu is open, and dropping the guard restores scrolling. Closing,
//! navigating away and tearing the controller down all go through that drop.

use std::fmt;
use std::rc::Rc;

/// Document-level scroll suppression.
///
/// Only the menu controller calls these, and only through a [`ScrollGuard`].
pub trait ScrollLock {
    /// Make background content non-scrollable.
    fn suspend(&self);
    /// Return scrolling to the state it had before [`ScrollLock::suspend`].
    fn restore(&self);
}

/// Lock for environments without a document (static rendering).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopScrollLock;

impl ScrollLock for NoopScrollLock {
    fn suspend(&self) {}
    fn restore(&self) {}
}

/// Held scroll suspension. Restores scrolling when dropped.
#[must_use = "scrolling is restored as soon as the guard is dropped"]
pub struct ScrollGuard {
    lock: Rc<dyn ScrollLock>,
}

impl ScrollGuard {
    pub fn acquire(lock: Rc<dyn ScrollLock>) -> Self {
        lock.suspend();
        Self { lock }
    }
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        self.lock.restore();
    }
}

impl fmt::Debug for ScrollGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ScrollGuard")
    }
}

/// Snapshot of the menu, as consumed by the view projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub is_open: bool,
}

/// Owner of the open/closed state of the navigation overlay.
pub struct MenuController {
    lock: Rc<dyn ScrollLock>,
    guard: Option<ScrollGuard>,
    last_path: Option<String>,
}

impl MenuController {
    /// Closed menu; nothing is suspended until the first open.
    pub fn new(lock: Rc<dyn ScrollLock>) -> Self {
        Self {
            lock,
            guard: None,
            last_path: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.guard.is_some()
    }

    /// True while this controller holds the scroll lock.
    ///
    /// Open state and the guard are the same field, so this always equals
    /// [`MenuController::is_open`].
    pub fn scroll_suspended(&self) -> bool {
        self.guard.is_some()
    }

    pub fn state(&self) -> MenuState {
        MenuState {
            is_open: self.is_open(),
        }
    }

    /// Flip the menu. Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        if self.guard.take().is_none() {
            self.guard = Some(ScrollGuard::acquire(self.lock.clone()));
        }
        tracing::debug!(open = self.is_open(), "menu toggled");
        self.is_open()
    }

    /// Close the menu if it is open. Safe to call repeatedly.
    pub fn close(&mut self) {
        if self.guard.take().is_some() {
            tracing::debug!("menu closed");
        }
    }

    /// Record a route change; the overlay closes when the path moves.
    ///
    /// The first path seen only primes the controller.
    pub fn on_route_change(&mut self, path: &str) {
        let moved = self.last_path.as_deref().is_some_and(|last| last != path);
        if moved {
            tracing::debug!(path, "route changed, closing menu");
            self.close();
        }
        self.last_path = Some(path.to_string());
    }
}

impl fmt::Debug for MenuController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuController")
            .field("is_open", &self.is_open())
            .field("last_path", &self.last_path)
            .finish()
    }
}
