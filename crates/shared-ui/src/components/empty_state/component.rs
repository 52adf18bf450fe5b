use dioxus::prelude::*;

/// Centered placeholder shown when a view has nothing to display.
///
/// Children render below the message, e.g. a call-to-action button.
#[component]
pub fn EmptyState(
    message: String,
    #[props(default)] hint: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        EmptyStateBody { message, hint, {children} }
    }
}

#[component]
fn EmptyStateBody(message: String, hint: Option<String>, children: Element) -> Element {
    rsx! {
        div { class: "empty-state", role: "status",
            p { class: "empty-state-message", "{message}" }
            if let Some(hint) = hint {
                p { class: "empty-state-hint", "{hint}" }
            }
            {children}
        }
    }
}
