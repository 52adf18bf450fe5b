use dioxus::prelude::*;

// ─── Context ───────────────────────────────────────────────────────────

/// Whether the sidebar is expanded. On narrow viewports a closed sidebar is
/// hidden entirely; on wide ones it stays docked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub open: bool,
}

/// Provides sidebar state context to children.
#[component]
pub fn SidebarProvider(#[props(default = true)] default_open: bool, children: Element) -> Element {
    let state = use_signal(|| SidebarState { open: default_open });
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-sidebar-open": if (state)().open { "true" } else { "false" },
            {children}
        }
    }
}

/// Sidebar state, if a [`SidebarProvider`] is mounted above.
fn use_sidebar() -> Option<Signal<SidebarState>> {
    try_use_context::<Signal<SidebarState>>()
}

fn close_sidebar(state: Option<Signal<SidebarState>>) {
    if let Some(mut state) = state {
        state.set(SidebarState { open: false });
    }
}

// ─── Layout ────────────────────────────────────────────────────────────

/// The sidebar container. Shows a backdrop on narrow viewports when open.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let state = use_sidebar();
    let is_open = state.map(|s| s().open).unwrap_or(true);

    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new(
            "data-state",
            if is_open { "open" } else { "closed" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        if is_open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| close_sidebar(state),
            }
        }
        aside {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-header", {children} }
    }
}

#[component]
pub fn SidebarContent(children: Element) -> Element {
    rsx! {
        nav { class: "sidebar-content", "aria-label": "Main", {children} }
    }
}

#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-footer", {children} }
    }
}

/// A labelled group of menu entries.
#[component]
pub fn SidebarGroup(#[props(default)] label: Option<String>, children: Element) -> Element {
    rsx! {
        div { class: "sidebar-group",
            if let Some(label) = label {
                div { class: "sidebar-group-label", "{label}" }
            }
            {children}
        }
    }
}

// ─── Menu ──────────────────────────────────────────────────────────────

#[component]
pub fn SidebarMenu(children: Element) -> Element {
    rsx! {
        ul { class: "sidebar-menu", {children} }
    }
}

#[component]
pub fn SidebarMenuItem(children: Element) -> Element {
    rsx! {
        li { class: "sidebar-menu-item", {children} }
    }
}

/// A menu entry. Callers wrap enabled entries in a router link.
///
/// A disabled entry is inert: it is skipped by keyboard focus, ignores
/// clicks and carries `aria-disabled`. An enabled one closes the sidebar
/// on click so overlay mode gets out of the way after navigation.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] title: Option<String>,
    children: Element,
) -> Element {
    let state = use_sidebar();

    rsx! {
        span {
            class: "sidebar-menu-button",
            role: "link",
            title: title,
            tabindex: if disabled { "-1" } else { "0" },
            "data-active": if active { "true" } else { "false" },
            "aria-current": if active { "page" } else { "false" },
            "aria-disabled": if disabled { "true" } else { "false" },
            onclick: move |evt| {
                if disabled {
                    evt.prevent_default();
                    evt.stop_propagation();
                } else {
                    close_sidebar(state);
                }
            },
            {children}
        }
    }
}

// ─── Utility ───────────────────────────────────────────────────────────

/// Toggle button that opens/closes the sidebar.
#[component]
pub fn SidebarTrigger(children: Element) -> Element {
    let state = use_sidebar();

    rsx! {
        button {
            class: "sidebar-trigger",
            r#type: "button",
            "aria-label": "Toggle sidebar",
            onclick: move |_| {
                if let Some(mut state) = state {
                    let current = state().open;
                    state.set(SidebarState { open: !current });
                }
            },
            {children}
        }
    }
}

/// The main content area beside the sidebar.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        main { class: "sidebar-inset", {children} }
    }
}
