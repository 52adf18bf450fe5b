pub mod cases;
pub mod dashboard;
pub mod not_found;
pub mod signin;

use crate::auth::use_auth;
use crate::MatterContext;
use cases::CaseTab;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBriefcase, LdClock, LdFileText, LdLayoutDashboard, LdScale, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::FeatureFlags;
use shared_ui::{
    InitialsAvatar, Navbar, Separator, Sidebar, SidebarContent, SidebarFooter, SidebarGroup,
    SidebarHeader, SidebarInset, SidebarMenu, SidebarMenuButton, SidebarMenuItem,
    SidebarProvider, SidebarTrigger,
};

use cases::detail::CaseDetail;
use cases::list::CaseList;
use cases::review::DocumentReview;
use dashboard::Dashboard;
use not_found::NotFound;
use signin::SignIn;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/signin?:redirect")]
    SignIn { redirect: Option<String> },
    #[route("/")]
    Home {},
    #[redirect("/cases/:id", |id: String| Route::CaseDetail { id, tab: CaseTab::Documents.slug().to_string() })]
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/dashboard")]
    Dashboard {},
    #[route("/cases")]
    CaseList {},
    #[route("/cases/:id/:tab")]
    CaseDetail { id: String, tab: String },
    #[route("/cases/:id/documents/:document_id/review")]
    DocumentReview { id: String, document_id: String },
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Route to one tab of a case.
    pub fn case_tab(id: impl Into<String>, tab: CaseTab) -> Self {
        Route::CaseDetail {
            id: id.into(),
            tab: tab.slug().to_string(),
        }
    }

    /// The matter a route is about, if any.
    pub fn matter_id(&self) -> Option<&str> {
        match self {
            Route::CaseDetail { id, .. } | Route::DocumentReview { id, .. } => Some(id),
            _ => None,
        }
    }
}

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ── Pure navigation rules ─────────────────────────────────

/// Title shown in the navbar for a route.
pub fn page_title(route: &Route) -> &'static str {
    match route {
        Route::SignIn { .. } => "Sign In",
        Route::Home {} | Route::Dashboard {} => "Dashboard",
        Route::CaseList {} => "Cases",
        Route::CaseDetail { tab, .. } => match CaseTab::from_slug(tab) {
            CaseTab::Documents => "Case Documents",
            CaseTab::Facts => "Case Facts",
            CaseTab::Entities => "Case Entities",
            CaseTab::Activity => "Case Activity",
        },
        Route::DocumentReview { .. } => "Document Review",
        Route::NotFound { .. } => "Not Found",
    }
}

/// The sidebar and navbar are drawn only for signed-in users, never on the
/// sign-in page.
pub fn shell_visible(authenticated: bool, route: &Route) -> bool {
    authenticated && !matches!(route, Route::SignIn { .. })
}

/// Where `/` sends a visitor.
pub fn home_target(authenticated: bool) -> Route {
    if authenticated {
        Route::Dashboard {}
    } else {
        Route::SignIn { redirect: None }
    }
}

/// Sign-in route that returns to `route` afterwards.
pub fn signin_redirect_for(route: &Route) -> Route {
    let redirect = match route {
        Route::SignIn { redirect } => redirect.clone(),
        Route::Home {} => None,
        other => Some(other.to_string()),
    };
    Route::SignIn { redirect }
}

/// Destination of a sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Dashboard,
    Cases,
    Case(CaseTab),
}

impl NavTarget {
    pub fn label(self) -> &'static str {
        match self {
            NavTarget::Dashboard => "Dashboard",
            NavTarget::Cases => "Cases",
            NavTarget::Case(tab) => tab.label(),
        }
    }

    /// Whether `route` is (inside) this entry's destination.
    pub fn is_active(self, route: &Route) -> bool {
        match (self, route) {
            (NavTarget::Dashboard, Route::Dashboard {}) => true,
            (NavTarget::Cases, Route::CaseList {}) => true,
            (NavTarget::Case(tab), Route::CaseDetail { tab: slug, .. }) => {
                CaseTab::from_slug(slug) == tab
            }
            (NavTarget::Case(CaseTab::Documents), Route::DocumentReview { .. }) => true,
            _ => false,
        }
    }
}

/// Sidebar entries for the workspace group.
pub const WORKSPACE_NAV: [NavTarget; 2] = [NavTarget::Dashboard, NavTarget::Cases];

/// Sidebar entries for the selected case, honouring feature flags.
pub fn case_nav(flags: &FeatureFlags) -> Vec<NavTarget> {
    CaseTab::visible(flags)
        .into_iter()
        .map(NavTarget::Case)
        .collect()
}

/// Resolve a sidebar entry to a route. `None` means the entry is disabled
/// because it needs a matter and none is selected.
pub fn nav_route(target: NavTarget, matter: Option<&str>) -> Option<Route> {
    match target {
        NavTarget::Dashboard => Some(Route::Dashboard {}),
        NavTarget::Cases => Some(Route::CaseList {}),
        NavTarget::Case(tab) => matter
            .filter(|id| !id.trim().is_empty())
            .map(|id| Route::case_tab(id, tab)),
    }
}

// ── Layouts ───────────────────────────────────────────────

/// Resolve the current session on the server before rendering `/`.
#[component]
fn Home() -> Element {
    let mut auth = use_auth();
    let resource =
        use_server_future(move || async move { server::api::get_current_user().await })?;

    let result = resource.read().as_ref().cloned();

    match result {
        Some(result) => {
            let user = result.unwrap_or_else(|e| {
                tracing::warn!(error = %e, "session check failed");
                None
            });
            let authenticated = user.is_some();
            match user {
                Some(user) if !auth.is_authenticated() => auth.set_user(user),
                None if auth.is_authenticated() => auth.clear_auth(),
                _ => {}
            }
            navigator().replace(home_target(authenticated));
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting..." }
                }
            }
        }
        None => rsx! {
            div { class: "auth-guard-loading",
                p { "Loading..." }
            }
        },
    }
}

/// Auth guard layout: sends visitors without a session to the sign-in page,
/// remembering where they were going.
///
/// `use_server_future` with `?` suspends during SSR until the session check
/// completes; the `SuspenseBoundary` in `App` shows the fallback meanwhile.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();
    let route: Route = use_route();

    let resource =
        use_server_future(move || async move { server::api::get_current_user().await })?;

    let result = resource.read().as_ref().cloned();

    match result {
        Some(Ok(Some(user))) => {
            if !auth.is_authenticated() {
                auth.set_user(user);
            }
            rsx! { Outlet::<Route> {} }
        }
        Some(Ok(None)) | Some(Err(_)) => {
            if let Some(Err(e)) = &result {
                tracing::warn!(error = %e, "session check failed");
            }
            if auth.is_authenticated() {
                auth.clear_auth();
            }
            navigator().replace(signin_redirect_for(&route));
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to sign in..." }
                }
            }
        }
        None => rsx! {
            div { class: "auth-guard-loading",
                p { "Loading..." }
            }
        },
    }
}

/// Main app layout with sidebar and top navbar.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let auth = use_auth();
    let flags: FeatureFlags = use_context();
    let mut matter: MatterContext = use_context();

    // Visiting a case page makes it the selected matter.
    let visited = route.matter_id().map(str::to_string);
    use_effect(use_reactive((&visited,), move |(visited,)| {
        if let Some(id) = visited {
            matter.select(&id);
        }
    }));

    if !shell_visible(auth.is_authenticated(), &route) {
        return rsx! { Outlet::<Route> {} };
    }

    let selected = matter.selected();
    let title = page_title(&route).to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: false,
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        Icon::<LdScale> { icon: LdScale, width: 20, height: 20 }
                        span { class: "sidebar-brand-name", "Casefold" }
                    }
                }

                SidebarContent {
                    SidebarGroup { label: "Workspace".to_string(),
                        SidebarMenu {
                            for (label, target) in WORKSPACE_NAV.into_iter().map(|t| (t.label(), t)) {
                                SidebarNavEntry {
                                    key: "{label}",
                                    target,
                                    route: route.clone(),
                                    matter: selected.clone(),
                                }
                            }
                        }
                    }

                    SidebarGroup { label: "Case".to_string(),
                        SidebarMenu {
                            for (label, target) in case_nav(&flags).into_iter().map(|t| (t.label(), t)) {
                                SidebarNavEntry {
                                    key: "{label}",
                                    target,
                                    route: route.clone(),
                                    matter: selected.clone(),
                                }
                            }
                        }
                        if selected.is_none() {
                            p { class: "sidebar-hint", "Pick a case on the dashboard to enable these links." }
                        }
                    }
                }

                SidebarFooter {
                    span { class: "sidebar-footer-label", "v{VERSION}" }
                }
            }

            SidebarInset {
                Navbar {
                    title,
                    leading: rsx! {
                        SidebarTrigger {
                            span { class: "navbar-trigger-icon", "\u{2630}" }
                        }
                        Separator { horizontal: false }
                    },
                    UserMenu {}
                }

                div { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn SidebarNavEntry(target: NavTarget, route: Route, matter: Option<String>) -> Element {
    let active = target.is_active(&route);
    let icon = nav_icon(target);
    let label = target.label();

    match nav_route(target, matter.as_deref()) {
        Some(to) => rsx! {
            SidebarMenuItem {
                Link { to,
                    SidebarMenuButton { active,
                        {icon}
                        "{label}"
                    }
                }
            }
        },
        None => rsx! {
            SidebarMenuItem {
                SidebarMenuButton {
                    disabled: true,
                    title: "Select a case first".to_string(),
                    {icon}
                    "{label}"
                }
            }
        },
    }
}

pub(crate) fn nav_icon(target: NavTarget) -> Element {
    match target {
        NavTarget::Dashboard => rsx! {
            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
        },
        NavTarget::Cases => rsx! {
            Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 }
        },
        NavTarget::Case(CaseTab::Documents) => rsx! {
            Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
        },
        NavTarget::Case(CaseTab::Facts) => rsx! {
            Icon::<LdScale> { icon: LdScale, width: 18, height: 18 }
        },
        NavTarget::Case(CaseTab::Entities) => rsx! {
            Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
        },
        NavTarget::Case(CaseTab::Activity) => rsx! {
            Icon::<LdClock> { icon: LdClock, width: 18, height: 18 }
        },
    }
}

/// Avatar, greeting and a click-toggled dropdown. Choosing any item closes it.
#[component]
fn UserMenu() -> Element {
    let auth = use_auth();
    let mut open = use_signal(|| false);

    let name = auth.greeting_name();
    let initials = auth.initials();
    let is_open = open();

    rsx! {
        div { class: "user-menu", "data-open": if is_open { "true" } else { "false" },
            button {
                class: "user-menu-trigger",
                r#type: "button",
                "aria-haspopup": "menu",
                "aria-expanded": if is_open { "true" } else { "false" },
                onclick: move |_| open.set(!open()),
                InitialsAvatar { initials, label: name.clone() }
                span { class: "user-menu-greeting", "Hi, {name}" }
            }

            if is_open {
                div { class: "user-menu-content", role: "menu",
                    button {
                        class: "user-menu-item",
                        r#type: "button",
                        role: "menuitem",
                        onclick: move |_| {
                            open.set(false);
                            navigator().push(Route::Dashboard {});
                        },
                        "Dashboard"
                    }
                    Separator {}
                    button {
                        class: "user-menu-item",
                        r#type: "button",
                        role: "menuitem",
                        onclick: move |_| {
                            open.set(false);
                            let nav = navigator();
                            spawn(async move {
                                crate::auth::sign_out(auth).await;
                                nav.push(Route::SignIn { redirect: None });
                            });
                        },
                        "Sign out"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    const MATTER: &str = "7f8c2e1a-0b4d-4c5e-9f6a-1b2c3d4e5f60";

    fn every_route() -> Vec<Route> {
        vec![
            Route::SignIn { redirect: None },
            Route::Home {},
            Route::Dashboard {},
            Route::CaseList {},
            Route::case_tab(MATTER, CaseTab::Documents),
            Route::case_tab(MATTER, CaseTab::Facts),
            Route::case_tab(MATTER, CaseTab::Entities),
            Route::case_tab(MATTER, CaseTab::Activity),
            Route::DocumentReview {
                id: MATTER.to_string(),
                document_id: "d1".to_string(),
            },
            Route::NotFound {
                route: vec!["nope".to_string()],
            },
        ]
    }

    #[test]
    fn every_route_has_a_title() {
        for route in every_route() {
            assert!(!page_title(&route).is_empty(), "{route:?}");
        }
    }

    #[test]
    fn case_titles_follow_tab() {
        assert_eq!(page_title(&Route::case_tab(MATTER, CaseTab::Facts)), "Case Facts");
        assert_eq!(page_title(&Route::case_tab(MATTER, CaseTab::Activity)), "Case Activity");
        let unknown = Route::CaseDetail {
            id: MATTER.to_string(),
            tab: "overview".to_string(),
        };
        assert_eq!(page_title(&unknown), "Case Documents");
        assert_eq!(page_title(&Route::SignIn { redirect: None }), "Sign In");
    }

    #[test]
    fn shell_hidden_when_signed_out_or_on_signin() {
        for route in every_route() {
            assert!(!shell_visible(false, &route));
        }
        assert!(!shell_visible(true, &Route::SignIn { redirect: None }));
        assert!(shell_visible(true, &Route::Dashboard {}));
        assert!(shell_visible(true, &Route::case_tab(MATTER, CaseTab::Entities)));
    }

    #[test]
    fn home_redirects_by_session() {
        assert_eq!(home_target(true), Route::Dashboard {});
        assert_eq!(home_target(false), Route::SignIn { redirect: None });
    }

    #[test]
    fn guard_remembers_requested_path() {
        let target = signin_redirect_for(&Route::case_tab(MATTER, CaseTab::Facts));
        assert_eq!(
            target,
            Route::SignIn {
                redirect: Some(format!("/cases/{MATTER}/facts"))
            }
        );
        assert_eq!(
            signin_redirect_for(&Route::Home {}),
            Route::SignIn { redirect: None }
        );
    }

    #[test]
    fn case_links_disabled_without_matter() {
        for tab in CaseTab::ALL {
            assert_eq!(nav_route(NavTarget::Case(tab), None), None);
            assert_eq!(nav_route(NavTarget::Case(tab), Some("  ")), None);
            assert_eq!(
                nav_route(NavTarget::Case(tab), Some(MATTER)),
                Some(Route::case_tab(MATTER, tab))
            );
        }
        assert_eq!(nav_route(NavTarget::Dashboard, None), Some(Route::Dashboard {}));
        assert_eq!(nav_route(NavTarget::Cases, None), Some(Route::CaseList {}));
    }

    #[test]
    fn case_nav_hides_activity_when_flag_off() {
        let off = FeatureFlags::default();
        assert!(!case_nav(&off).contains(&NavTarget::Case(CaseTab::Activity)));
        let on = FeatureFlags {
            activity_feed: true,
            ..Default::default()
        };
        assert_eq!(case_nav(&on).len(), 4);
    }

    #[test]
    fn active_entry_tracks_route() {
        let facts = Route::case_tab(MATTER, CaseTab::Facts);
        assert!(NavTarget::Case(CaseTab::Facts).is_active(&facts));
        assert!(!NavTarget::Case(CaseTab::Documents).is_active(&facts));
        let review = Route::DocumentReview {
            id: MATTER.to_string(),
            document_id: "d1".to_string(),
        };
        assert!(NavTarget::Case(CaseTab::Documents).is_active(&review));
        assert!(NavTarget::Cases.is_active(&Route::CaseList {}));
    }

    #[test]
    fn review_path_parses() {
        let route = Route::from_str(&format!("/cases/{MATTER}/documents/d1/review")).unwrap();
        assert_eq!(
            route,
            Route::DocumentReview {
                id: MATTER.to_string(),
                document_id: "d1".to_string()
            }
        );
        assert_eq!(route.matter_id(), Some(MATTER));
    }
}
