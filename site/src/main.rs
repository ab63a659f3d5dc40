// Spectra Salon Suites site (Leptos 0.8, client-side rendered)

mod dom;
mod logging;
mod pages;

use std::rc::Rc;

use anyhow::Context;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;
use spectra_shell::components::Layout;
use spectra_shell::{Shell, ShellConfig, ShellController, styles};

use dom::{BodyScrollLock, BrowserThemeStore};
use pages::{AboutPage, BlogPage, HomePage, NotFound, WorkPage};

const SHELL_TOML: &str = include_str!("../shell.toml");

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = run() {
        web_sys::console::error_1(&format!("site failed to start: {e:#}").into());
    }
}

fn run() -> anyhow::Result<()> {
    let config = ShellConfig::from_toml_str(SHELL_TOML).context("parsing shell.toml")?;
    logging::init(&config.log_level);

    let shell = config.validate().context("validating shell.toml")?;
    tracing::info!(
        nav = shell.nav.len(),
        themes = shell.themes.len(),
        "mounting site"
    );

    leptos::mount::mount_to_body(move || view! { <App shell=shell /> });
    Ok(())
}

#[component]
fn App(shell: Shell) -> impl IntoView {
    view! {
        <style>{styles::full_css()}</style>
        <Router>
            <Frame shell=shell />
        </Router>
    }
}

/// Shell layout around the routed pages. Must sit inside `<Router>`.
///
/// Browser collaborators are not `Send`, so they are created here rather
/// than passed down through the router.
#[component]
fn Frame(shell: Shell) -> impl IntoView {
    let store = Rc::new(BrowserThemeStore::load(&shell.themes, shell.default_theme.clone()));
    let lock = Rc::new(BodyScrollLock::default());
    let controller = match ShellController::from_shell(&shell, store, lock) {
        Ok(controller) => controller,
        Err(e) => {
            tracing::error!(error = %e, "cannot compose page shell");
            return view! { <p class="shell-error">"Navigation is unavailable."</p> }.into_any();
        }
    };
    let current_path = use_location().pathname;

    view! {
        <Layout controller=controller current_path=current_path site_name=shell.site_name>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/work") view=WorkPage />
                <Route path=path!("/blog") view=BlogPage />
                <Route path=path!("/about") view=AboutPage />
            </Routes>
        </Layout>
    }
    .into_any()
}
