use dioxus::prelude::*;

/// Top bar of the application shell: leading content, a title, then
/// trailing content pushed to the right edge.
#[component]
pub fn Navbar(
    title: String,
    #[props(default)] leading: Element,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "navbar",
            div { class: "navbar-leading", {leading} }
            h2 { class: "navbar-title", "{title}" }
            div { class: "navbar-spacer" }
            div { class: "navbar-trailing", {children} }
        }
    }
}
