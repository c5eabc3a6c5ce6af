//! Navigation sidebar with active-route highlighting and logout.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use session::Navigation;

use crate::state::auth::Auth;
use crate::state::ui::UiState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub admin_only: bool,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { href: "/", label: "Dashboard", admin_only: false },
    NavItem { href: "/customers", label: "Clientes", admin_only: false },
    NavItem { href: "/processes", label: "Processos", admin_only: false },
    NavItem { href: "/fees", label: "Honorários", admin_only: false },
    NavItem { href: "/users", label: "Usuários", admin_only: true },
];

/// Entries visible to the current user.
pub fn visible_items(is_admin: bool) -> Vec<NavItem> {
    NAV_ITEMS.into_iter().filter(|item| is_admin || !item.admin_only).collect()
}

/// Whether `href` should be highlighted while the router is at `current`.
///
/// `/` only matches itself; other entries also match their sub-routes.
pub fn is_active(current: &str, href: &str) -> bool {
    if href == "/" {
        return current == "/";
    }
    current == href || current.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<Auth>();
    let ui = expect_context::<RwSignal<UiState>>();
    let state = auth.state();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let on_logout = move |_| {
        auth.logout();
        navigate(Navigation::Login.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
    };

    let display_name =
        move || state.with(|s| s.user.as_ref().map(|u| u.display_name().to_owned()).unwrap_or_default());
    let role_label = move || state.with(|s| s.user.as_ref().map(|u| u.role.label()).unwrap_or_default());

    view! {
        <aside class="sidebar" class:sidebar--open=move || ui.get().sidebar_open>
            <button
                class="sidebar__toggle"
                aria-label="Alternar menu"
                on:click=move |_| ui.update(|u| u.sidebar_open = !u.sidebar_open)
            >
                "☰"
            </button>
            <div class="sidebar__brand">"Back-office Jurídico"</div>
            <nav class="sidebar__nav">
                {move || {
                    visible_items(state.with(|s| s.is_admin()))
                        .into_iter()
                        .map(|item| {
                            let active = move || pathname.with(|p| is_active(p, item.href));
                            view! {
                                <a
                                    class="sidebar__link"
                                    class:sidebar__link--active=active
                                    href=item.href
                                    on:click=move |_| ui.update(|u| u.sidebar_open = false)
                                >
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </nav>
            <div class="sidebar__footer">
                <span class="sidebar__user">{display_name}</span>
                <span class="sidebar__role">{role_label}</span>
                <button class="btn sidebar__logout" on:click=on_logout>
                    "Sair"
                </button>
            </div>
        </aside>
    }
}
