use dioxus::prelude::*;

/// Promotional tile on the dashboard pointing at one area of the app.
///
/// The card itself does not navigate; callers wrap it in a router link when
/// it is enabled. A disabled card is inert and says why via `disabled_hint`.
#[component]
pub fn FeatureCard(
    title: String,
    description: String,
    #[props(default)] icon: Element,
    #[props(default = false)] disabled: bool,
    #[props(default)] disabled_hint: Option<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        FeatureCardBody { title, description, icon, disabled, disabled_hint }
    }
}

#[component]
fn FeatureCardBody(
    title: String,
    description: String,
    icon: Element,
    disabled: bool,
    disabled_hint: Option<String>,
) -> Element {
    rsx! {
        article {
            class: "feature-card",
            "data-disabled": if disabled { "true" } else { "false" },
            "aria-disabled": if disabled { "true" } else { "false" },
            div { class: "feature-card-icon", {icon} }
            h3 { class: "feature-card-title", "{title}" }
            p { class: "feature-card-description", "{description}" }
            if disabled {
                if let Some(hint) = disabled_hint {
                    p { class: "feature-card-hint", "{hint}" }
                }
            }
        }
    }
}
