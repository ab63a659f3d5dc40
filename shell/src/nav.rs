//! Navigation entries and active-link derivation.

use serde::Deserialize;
use std::collections::HashSet;

use crate::error::{Result, ShellError};

/// A single entry of the site navigation.
///
/// `path` is a bare segment (`"work"`, not `"/work"`). It doubles as the
/// entry's identity key when rendering lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct NavItem {
    /// Path segment without the leading slash
    pub path: String,
    /// Text shown in the navigation bar
    pub label: String,
}

impl NavItem {
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }

    /// Absolute href for this entry (`/` + segment).
    pub fn href(&self) -> String {
        format!("/{}", self.path)
    }

    /// True when `current_path` points exactly at this entry.
    pub fn matches(&self, current_path: &str) -> bool {
        current_path
            .strip_prefix('/')
            .is_some_and(|rest| rest == self.path)
    }
}

/// The site's navigation: Work, Blog, About Me.
pub fn default_nav() -> Vec<NavItem> {
    vec![
        NavItem::new("work", "Work"),
        NavItem::new("blog", "Blog"),
        NavItem::new("about", "About Me"),
    ]
}

/// Index of the entry whose href equals `current_path`, if any.
///
/// Paths are disjoint by construction (see [`validate_nav`]), so at most one
/// entry can match. Trailing slashes and query strings are not normalized.
pub fn compute_active_link(current_path: &str, items: &[NavItem]) -> Option<usize> {
    items.iter().position(|item| item.matches(current_path))
}

/// Check that a navigation list can be rendered unambiguously.
pub fn validate_nav(items: &[NavItem]) -> Result<()> {
    if items.is_empty() {
        return Err(ShellError::EmptyNav);
    }

    let mut seen = HashSet::new();
    for item in items {
        if item.path.is_empty() || item.path.contains('/') {
            return Err(ShellError::InvalidNavPath(item.path.clone()));
        }
        if !seen.insert(item.path.as_str()) {
            return Err(ShellError::DuplicateNavPath(item.path.clone()));
        }
    }
    Ok(())
}
