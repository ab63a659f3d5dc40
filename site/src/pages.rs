// Site routes
use leptos::prelude::*;
use spectra_shell::components::{Text, TypeScale};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="page">
            <Text scale=TypeScale::Overline>"Private salon suites"</Text>
            <Text scale=TypeScale::TitleLg bold=true>"Spectra Salon Suites"</Text>
            <Text scale=TypeScale::BodyXl>
                "Your own studio, your own hours, your own clients."
            </Text>
        </section>
    }
}

#[component]
pub fn WorkPage() -> impl IntoView {
    view! {
        <section class="page">
            <Text scale=TypeScale::TitleMd>"Work"</Text>
            <Text scale=TypeScale::Body>"Stylists and studios from our suites."</Text>
        </section>
    }
}

#[component]
pub fn BlogPage() -> impl IntoView {
    view! {
        <section class="page">
            <Text scale=TypeScale::TitleMd>"Blog"</Text>
            <Text scale=TypeScale::Body>"News from the suites."</Text>
        </section>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page">
            <Text scale=TypeScale::TitleMd>"About Me"</Text>
            <Text scale=TypeScale::BodyLg>
                "Spectra gives independent beauty professionals a place to grow."
            </Text>
        </section>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="page">
            <Text scale=TypeScale::Title>"Page not found"</Text>
            <Text scale=TypeScale::Caption>
                <a href="/">"Back to the start"</a>
            </Text>
        </section>
    }
}
