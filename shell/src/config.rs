//! Configuration for the page shell.
//!
//! The shell is configured from a small TOML document (the site embeds
//! `shell.toml` at compile time). Missing keys fall back to the site defaults:
//! Work / Blog / About Me and a light/dark theme pair.

use serde::Deserialize;

use crate::error::Result;
use crate::nav::{NavItem, default_nav, validate_nav};
use crate::theme::{ThemeEntry, ThemeId, ThemeSet};

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Name shown next to the logo and used as its accessible label
    pub site_name: String,
    /// Theme applied when the store has nothing persisted
    pub default_theme: ThemeId,
    /// Max log level for the browser console subscriber
    pub log_level: String,
    /// Navigation entries, in display order
    pub nav: Vec<NavItem>,
    /// Ordered theme set; the toggle cycles through it
    pub themes: Vec<ThemeEntry>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            site_name: "Spectra Salon Suites".to_string(),
            default_theme: ThemeId::light(),
            log_level: "info".to_string(),
            nav: default_nav(),
            themes: ThemeSet::light_dark().entries().to_vec(),
        }
    }
}

/// Validated configuration, ready to compose the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    pub site_name: String,
    pub nav: Vec<NavItem>,
    pub themes: ThemeSet,
    pub default_theme: ThemeId,
}

impl ShellConfig {
    /// Parse a TOML document. Keys left out keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Check the configuration and build a [`Shell`].
    pub fn validate(self) -> Result<Shell> {
        validate_nav(&self.nav)?;
        let themes = ThemeSet::new(self.themes)?;
        themes.ensure_known(&self.default_theme)?;

        Ok(Shell {
            site_name: self.site_name,
            nav: self.nav,
            themes,
            default_theme: self.default_theme,
        })
    }

    /// Parse and validate in one step, logging the rejection reason.
    pub fn load_str(content: &str) -> Result<Shell> {
        Self::from_toml_str(content)
            .and_then(Self::validate)
            .inspect_err(|e| tracing::warn!(error = %e, "rejected shell config"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShellError;
    use crate::theme::ThemeIcon;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_gives_defaults() {
        let shell = ShellConfig::load_str("").unwrap();
        assert_eq!(shell.site_name, "Spectra Salon Suites");
        assert_eq!(shell.nav, default_nav());
        assert_eq!(shell.themes, ThemeSet::light_dark());
        assert_eq!(shell.default_theme, ThemeId::light());
    }

    #[test]
    fn parses_full_document() {
        let toml = r#"
site_name = "Studio"
default_theme = "dark"
log_level = "debug"

[[nav]]
path = "services"
label = "Services"

[[nav]]
path = "contact"
label = "Contact"

[[themes]]
id = "light"
label = "Light"
icon = "sun"

[[themes]]
id = "dark"
label = "Dark"
icon = "moon"

[[themes]]
id = "sepia"
label = "Sepia"
icon = "sun"
"#;
        let config = ShellConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.log_level, "debug");

        let shell = config.validate().unwrap();
        assert_eq!(shell.site_name, "Studio");
        assert_eq!(
            shell.nav,
            vec![
                NavItem::new("services", "Services"),
                NavItem::new("contact", "Contact"),
            ]
        );
        assert_eq!(shell.themes.len(), 3);
        assert_eq!(shell.themes.entries()[2].icon, ThemeIcon::Sun);
        assert_eq!(shell.default_theme, ThemeId::dark());
    }

    #[test]
    fn default_theme_must_be_in_set() {
        let err = ShellConfig::load_str(r#"default_theme = "neon""#).unwrap_err();
        assert!(matches!(err, ShellError::UnknownTheme(id) if id == "neon"));
    }

    #[test]
    fn empty_theme_list_is_rejected() {
        let config = ShellConfig {
            themes: vec![],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ShellError::EmptyThemeSet)));
    }

    #[test]
    fn unknown_icon_is_a_parse_error() {
        let toml = r#"
[[themes]]
id = "light"
label = "Light"
icon = "star"
"#;
        assert!(matches!(
            ShellConfig::from_toml_str(toml),
            Err(ShellError::Config(_))
        ));
    }

    #[test]
    fn duplicate_nav_is_rejected() {
        let toml = r#"
[[nav]]
path = "blog"
label = "Blog"

[[nav]]
path = "blog"
label = "Journal"
"#;
        assert!(matches!(
            ShellConfig::load_str(toml),
            Err(ShellError::DuplicateNavPath(_))
        ));
    }
}
