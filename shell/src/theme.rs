//! Theme identifiers, the ordered theme set, and the theme store seam.
//!
//! The shell never owns the current theme. It reads it from a [`ThemeStore`],
//! computes the next id in cyclic order and asks the store to apply it.

use serde::Deserialize;
use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use crate::error::{Result, ShellError};

/// Identifier of a visual theme (`light`, `dark`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ThemeId(String);

impl ThemeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn light() -> Self {
        Self::new("light")
    }

    pub fn dark() -> Self {
        Self::new("dark")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Class applied to the document root while this theme is active.
    pub fn class_name(&self) -> String {
        format!("theme-{}", self.0)
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ThemeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Glyph shown on the theme button for the theme a click switches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeIcon {
    Sun,
    Moon,
}

impl ThemeIcon {
    pub fn as_label(&self) -> &'static str {
        match self {
            ThemeIcon::Sun => "sun",
            ThemeIcon::Moon => "moon",
        }
    }
}

/// One entry of the ordered theme set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThemeEntry {
    pub id: ThemeId,
    /// Human-readable name ("Light")
    pub label: String,
    /// Affordance glyph used when this theme is the next one
    pub icon: ThemeIcon,
}

impl ThemeEntry {
    pub fn new(id: impl Into<String>, label: impl Into<String>, icon: ThemeIcon) -> Self {
        Self {
            id: ThemeId::new(id),
            label: label.into(),
            icon,
        }
    }
}

/// Next theme after `current` in `ordered`, wrapping from last to first.
///
/// Returns `None` when `current` is not part of `ordered`; callers treat that
/// as a configuration error.
pub fn cycle_theme(current: &ThemeId, ordered: &[ThemeId]) -> Option<ThemeId> {
    let idx = ordered.iter().position(|id| id == current)?;
    Some(ordered[(idx + 1) % ordered.len()].clone())
}

/// Validated, ordered, duplicate-free list of themes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSet {
    entries: Vec<ThemeEntry>,
}

impl ThemeSet {
    pub fn new(entries: Vec<ThemeEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(ShellError::EmptyThemeSet);
        }
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(ShellError::DuplicateTheme(entry.id.to_string()));
            }
        }
        Ok(Self { entries })
    }

    /// Light then dark; light shows a sun, dark a moon.
    pub fn light_dark() -> Self {
        Self {
            entries: vec![
                ThemeEntry::new("light", "Light", ThemeIcon::Sun),
                ThemeEntry::new("dark", "Dark", ThemeIcon::Moon),
            ],
        }
    }

    pub fn entries(&self) -> &[ThemeEntry] {
        &self.entries
    }

    pub fn ids(&self) -> Vec<ThemeId> {
        self.entries.iter().map(|e| e.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a validated set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> &ThemeEntry {
        &self.entries[0]
    }

    pub fn contains(&self, id: &ThemeId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: &ThemeId) -> Option<&ThemeEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    /// Entry following `current`, wrapping around.
    pub fn next_entry(&self, current: &ThemeId) -> Option<&ThemeEntry> {
        let idx = self.entries.iter().position(|e| &e.id == current)?;
        Some(&self.entries[(idx + 1) % self.entries.len()])
    }

    /// Checked form of [`cycle_theme`].
    pub fn next(&self, current: &ThemeId) -> Result<ThemeId> {
        self.next_entry(current)
            .map(|e| e.id.clone())
            .ok_or_else(|| ShellError::UnknownTheme(current.to_string()))
    }

    /// Fail unless `id` belongs to the set.
    pub fn ensure_known(&self, id: &ThemeId) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(ShellError::UnknownTheme(id.to_string()))
        }
    }
}

/// Handle returned by [`ThemeStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Callback invoked with the new theme after every change.
pub type ThemeListener = Box<dyn Fn(&ThemeId)>;

/// Holder of the current theme.
///
/// Implementations decide how a theme is persisted and applied (document
/// class, local storage, nothing at all). Methods take `&self`; stores are
/// shared behind `Rc` on the UI thread.
pub trait ThemeStore {
    /// Theme currently applied.
    fn current(&self) -> ThemeId;

    /// Apply `theme` and notify listeners if it changed.
    fn set_theme(&self, theme: ThemeId);

    /// Register a change listener.
    fn subscribe(&self, listener: ThemeListener) -> ListenerId;

    /// Drop a listener registered with [`ThemeStore::subscribe`].
    fn unsubscribe(&self, id: ListenerId);
}

/// Listener bookkeeping shared by store implementations.
#[derive(Default)]
pub struct ThemeListeners {
    next_id: u64,
    listeners: Vec<(ListenerId, Rc<dyn Fn(&ThemeId)>)>,
}

impl ThemeListeners {
    pub fn add(&mut self, listener: ThemeListener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Rc::from(listener)));
        id
    }

    pub fn remove(&mut self, id: ListenerId) {
        self.listeners.retain(|(lid, _)| *lid != id);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Snapshot of the callbacks, so they can run without holding a borrow.
    pub fn snapshot(&self) -> Vec<Rc<dyn Fn(&ThemeId)>> {
        self.listeners.iter().map(|(_, f)| f.clone()).collect()
    }
}

struct MemoryInner {
    current: ThemeId,
    listeners: ThemeListeners,
}

/// In-process theme store. Used for static rendering and tests.
#[derive(Clone)]
pub struct MemoryThemeStore {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryThemeStore {
    pub fn new(initial: ThemeId) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryInner {
                current: initial,
                listeners: ThemeListeners::default(),
            })),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn current(&self) -> ThemeId {
        self.inner.borrow().current.clone()
    }

    fn set_theme(&self, theme: ThemeId) {
        let callbacks = {
            let mut inner = self.inner.borrow_mut();
            if inner.current == theme {
                return;
            }
            inner.current = theme.clone();
            inner.listeners.snapshot()
        };
        for callback in callbacks {
            callback(&theme);
        }
    }

    fn subscribe(&self, listener: ThemeListener) -> ListenerId {
        self.inner.borrow_mut().listeners.add(listener)
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.inner.borrow_mut().listeners.remove(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    fn ids(raw: &[&str]) -> Vec<ThemeId> {
        raw.iter().map(|s| ThemeId::from(*s)).collect()
    }

    #[test]
    fn light_cycles_to_dark_and_wraps() {
        let ordered = ids(&["light", "dark"]);
        assert_eq!(cycle_theme(&ThemeId::light(), &ordered), Some(ThemeId::dark()));
        assert_eq!(cycle_theme(&ThemeId::dark(), &ordered), Some(ThemeId::light()));
    }

    #[test]
    fn cycling_n_times_returns_to_start() {
        for raw in [
            &["light"][..],
            &["light", "dark"][..],
            &["light", "dark", "sepia", "contrast"][..],
        ] {
            let ordered = ids(raw);
            for start in &ordered {
                let mut current = start.clone();
                for _ in 0..ordered.len() {
                    current = cycle_theme(&current, &ordered).unwrap();
                }
                assert_eq!(&current, start);
            }
        }
    }

    #[test]
    fn cycle_is_a_bijection() {
        let ordered = ids(&["light", "dark", "sepia"]);
        let images: HashSet<ThemeId> = ordered
            .iter()
            .map(|id| cycle_theme(id, &ordered).unwrap())
            .collect();
        assert_eq!(images.len(), ordered.len());
    }

    #[test]
    fn unknown_theme_has_no_successor() {
        let ordered = ids(&["light", "dark"]);
        assert_eq!(cycle_theme(&ThemeId::new("sepia"), &ordered), None);
        assert_eq!(cycle_theme(&ThemeId::light(), &[]), None);
    }

    #[test]
    fn theme_set_validation() {
        assert!(matches!(ThemeSet::new(vec![]), Err(ShellError::EmptyThemeSet)));
        let dup = ThemeSet::new(vec![
            ThemeEntry::new("light", "Light", ThemeIcon::Sun),
            ThemeEntry::new("light", "Also light", ThemeIcon::Sun),
        ]);
        assert!(matches!(dup, Err(ShellError::DuplicateTheme(id)) if id == "light"));

        let set = ThemeSet::light_dark();
        assert!(!set.is_empty());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn theme_set_next_matches_free_function() {
        let set = ThemeSet::light_dark();
        for id in set.ids() {
            assert_eq!(set.next(&id).ok(), cycle_theme(&id, &set.ids()));
        }
        assert!(matches!(
            set.next(&ThemeId::new("sepia")),
            Err(ShellError::UnknownTheme(id)) if id == "sepia"
        ));
    }

    #[test]
    fn class_name_is_prefixed() {
        assert_eq!(ThemeId::dark().class_name(), "theme-dark");
    }

    #[test]
    fn memory_store_notifies_on_change_only() {
        let store = MemoryThemeStore::new(ThemeId::light());
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let id = {
            let calls = calls.clone();
            let seen = seen.clone();
            store.subscribe(Box::new(move |theme: &ThemeId| {
                calls.set(calls.get() + 1);
                seen.borrow_mut().push(theme.clone());
            }))
        };

        store.set_theme(ThemeId::light());
        assert_eq!(calls.get(), 0);

        store.set_theme(ThemeId::dark());
        assert_eq!(store.current(), ThemeId::dark());
        assert_eq!(*seen.borrow(), vec![ThemeId::dark()]);

        store.unsubscribe(id);
        assert_eq!(store.listener_count(), 0);
        store.set_theme(ThemeId::light());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn listener_may_read_store_during_notification() {
        let store = MemoryThemeStore::new(ThemeId::light());
        let observed = Rc::new(RefCell::new(None));
        {
            let observed = observed.clone();
            let reader = store.clone();
            store.subscribe(Box::new(move |_: &ThemeId| {
                *observed.borrow_mut() = Some(reader.current());
            }));
        }
        store.set_theme(ThemeId::dark());
        assert_eq!(*observed.borrow(), Some(ThemeId::dark()));
    }
}
