//! CSS for the page shell.
//!
//! Plain string constants; the site inlines them into a `<style>` element
//! (see [`full_css`]). Colors come from custom properties set by the
//! `theme-*` class on the document root.

/// Theme variables. One block per `theme-<id>` class.
pub const THEME_CSS: &str = r#"
:root {
    --headerHeight: 4.5rem;
    --zFixed: 100;
    --blurSmall: 0.75rem;
    --transitionFast: 0.15s ease-in-out;
}

.theme-light {
    --bg: #ffffff;
    --bgLight: rgba(0, 0, 0, 0.05);
    --bgTransparent: rgba(255, 255, 255, 0.8);
    --foreground: #111111;
    --foregroundMid: rgba(17, 17, 17, 0.7);
    --transparent50: rgba(17, 17, 17, 0.5);
}

.theme-dark {
    --bg: #0d0d0d;
    --bgLight: rgba(255, 255, 255, 0.08);
    --bgTransparent: rgba(13, 13, 13, 0.8);
    --foreground: #f5f5f5;
    --foregroundMid: rgba(245, 245, 245, 0.7);
    --transparent50: rgba(245, 245, 245, 0.5);
}

body {
    background: var(--bg);
    color: var(--foreground);
    margin: 0;
}
"#;

/// Header, navigation links, mobile overlay and icon buttons.
pub const SHELL_CSS: &str = r#"
.site-header {
    position: fixed;
    left: 0;
    top: 0;
    right: 0;
    padding: 1rem 1.5rem 1rem 1rem;
    border-bottom: 1px solid var(--bgLight);
    background: var(--bgTransparent);
    backdrop-filter: blur(var(--blurSmall));
    z-index: var(--zFixed);
}

.site-header nav {
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.site-header .leading,
.site-header .trailing {
    display: flex;
    align-items: center;
}

.site-header .logo {
    padding: 0.25rem;
    border-radius: 0.25rem;
}

.site-header .logo svg {
    width: 2rem;
    height: 2rem;
    fill: var(--transparent50);
    transition: fill var(--transitionFast), opacity var(--transitionFast);
}

.site-header .logo:hover svg {
    opacity: 0.75;
}

.button.tertiary {
    display: flex;
    padding: 0.5rem;
    border: none;
    border-radius: 0.5rem;
    background: transparent;
    color: var(--foregroundMid);
    cursor: pointer;
}

.button.tertiary:hover {
    color: var(--foreground);
    background: var(--bgLight);
}

.icon-swap {
    display: flex;
}

.hamburger-menu {
    display: none;
}

.nav-links {
    list-style-type: none;
    padding: unset;
    margin: unset;
    display: flex;
    align-items: center;
}

.nav-links li {
    margin-right: 1rem;
}

.nav-links a {
    color: var(--foregroundMid);
    padding: 0.5rem 0.75rem;
    border-radius: 0.5rem;
    text-decoration: none;
    transition: color var(--transitionFast), background var(--transitionFast);
}

.nav-links a:hover,
.nav-links a.active {
    color: var(--foreground);
    background: var(--bgLight);
}

.site-main {
    top: var(--headerHeight);
    position: relative;
}

@media screen and (max-width: 576px) {
    .site-header .trailing {
        position: relative;
    }

    .hamburger-menu {
        margin-left: 0.5rem;
        display: flex;
    }

    .nav-links {
        display: none;
        flex-direction: column;
        justify-content: center;
        z-index: var(--zFixed);
        position: fixed;
        top: calc(var(--headerHeight) + 1px);
        left: 0;
        right: 0;
        bottom: 0;
        width: 100vw;
        height: calc(100vh - var(--headerHeight));
        background: var(--bg);
        padding: 1rem 1rem 4.5rem 1rem;
    }

    .nav-links.open {
        display: flex;
    }

    .nav-links li {
        margin: unset;
        display: flex;
    }

    .nav-links li:not(:last-of-type) {
        margin-bottom: 0.75rem;
    }

    .nav-links a {
        font-size: 1.25rem;
        padding: 0.75rem 1rem;
    }
}
"#;

/// Type scale used by [`crate::components::Text`].
pub const TYPOGRAPHY_CSS: &str = r#"
.title-lg, .title-md, .title, .title-sm, .title-xs {
    font-weight: 500;
    line-height: 1.2;
    margin: 0;
    transition: font-size var(--transitionFast);
}

.title-lg.bold, .title-md.bold, .title.bold, .title-sm.bold, .title-xs.bold {
    font-weight: 600;
}

.title-lg { font-size: 4.5rem; letter-spacing: -0.135rem; }
.title-md { font-size: 3rem; letter-spacing: -0.09rem; }
.title { font-size: 2rem; }
.title-sm { font-size: 1.5rem; }
.title-xs { font-size: 1.25rem; }

.body-xl, .body-lg, .body, .caption {
    font-weight: 300;
    line-height: 1.35;
    margin: 0;
    transition: font-size var(--transitionFast);
}

.body-xl { font-size: 1.5rem; }
.body-lg { font-size: 1.125rem; }
.body { font-size: 1rem; }
.caption { font-size: 0.875rem; }

.label {
    font-weight: 600;
    line-height: 1.2;
}

.overline {
    font-weight: 600;
    line-height: 1.2;
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.036rem;
}

@media screen and (max-width: 996px) {
    .title-lg { font-size: 3.875rem; }
    .title-md { font-size: 2.25rem; }
    .body-xl { font-size: 1.25rem; }
    .body-lg { font-size: 1rem; }
}

@media screen and (max-width: 768px) {
    .title-lg { font-size: 3rem; }
    .title-md { font-size: 1.75rem; }
    .title { font-size: 1.5rem; }
    .title-sm { font-size: 1.25rem; }
    .title-xs { font-size: 1.125rem; }
    .body-xl { font-size: 1.125rem; }
}
"#;

/// All shell styles concatenated in cascade order.
pub fn full_css() -> String {
    [THEME_CSS, SHELL_CSS, TYPOGRAPHY_CSS].concat()
}
