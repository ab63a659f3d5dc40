//! Typographic primitives.
//!
//! One component, [`Text`], picks the element and class for a [`TypeScale`].
//! Sizes and responsive steps live in [`crate::styles::TYPOGRAPHY_CSS`].

use leptos::prelude::*;

/// Type scale steps, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeScale {
    TitleLg,
    TitleMd,
    Title,
    TitleSm,
    TitleXs,
    BodyXl,
    BodyLg,
    Body,
    Label,
    Overline,
    Caption,
}

impl TypeScale {
    /// Element name used for this step.
    pub fn tag(&self) -> &'static str {
        match self {
            TypeScale::TitleLg => "h1",
            TypeScale::TitleMd => "h2",
            TypeScale::Title => "h3",
            TypeScale::TitleSm => "h4",
            TypeScale::TitleXs => "h5",
            TypeScale::BodyXl | TypeScale::BodyLg | TypeScale::Body => "p",
            TypeScale::Label | TypeScale::Overline => "div",
            TypeScale::Caption => "span",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            TypeScale::TitleLg => "title-lg",
            TypeScale::TitleMd => "title-md",
            TypeScale::Title => "title",
            TypeScale::TitleSm => "title-sm",
            TypeScale::TitleXs => "title-xs",
            TypeScale::BodyXl => "body-xl",
            TypeScale::BodyLg => "body-lg",
            TypeScale::Body => "body",
            TypeScale::Label => "label",
            TypeScale::Overline => "overline",
            TypeScale::Caption => "caption",
        }
    }

    /// Titles accept a bold weight; everything else has a fixed weight.
    pub fn is_title(&self) -> bool {
        matches!(
            self,
            TypeScale::TitleLg
                | TypeScale::TitleMd
                | TypeScale::Title
                | TypeScale::TitleSm
                | TypeScale::TitleXs
        )
    }
}

/// Class list for a scale step, e.g. `"title-md bold"`.
pub fn text_class(scale: TypeScale, bold: bool, extra: &str) -> String {
    let mut class = String::from(scale.class());
    if bold && scale.is_title() {
        class.push_str(" bold");
    }
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Text in one of the site's type scale steps.
#[component]
pub fn Text(
    scale: TypeScale,
    /// Heavier weight; titles only
    #[prop(optional)]
    bold: bool,
    /// Additional CSS class names
    #[prop(into, optional)]
    extra: String,
    children: Children,
) -> impl IntoView {
    let class = text_class(scale, bold, &extra);
    match scale {
        TypeScale::TitleLg => view! { <h1 class=class>{children()}</h1> }.into_any(),
        TypeScale::TitleMd => view! { <h2 class=class>{children()}</h2> }.into_any(),
        TypeScale::Title => view! { <h3 class=class>{children()}</h3> }.into_any(),
        TypeScale::TitleSm => view! { <h4 class=class>{children()}</h4> }.into_any(),
        TypeScale::TitleXs => view! { <h5 class=class>{children()}</h5> }.into_any(),
        TypeScale::BodyXl | TypeScale::BodyLg | TypeScale::Body => {
            view! { <p class=class>{children()}</p> }.into_any()
        }
        TypeScale::Label | TypeScale::Overline => {
            view! { <div class=class>{children()}</div> }.into_any()
        }
        TypeScale::Caption => view! { <span class=class>{children()}</span> }.into_any(),
    }
}
