//! Route guard wrapper for authenticated pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route except `/login` renders inside [`Protected`]. The guard waits
//! for startup to settle, then either shows the page inside the sidebar
//! layout or redirects exactly once (to `/login`, clearing stale session
//! data, or to `/` for a role mismatch).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::{Navigation, Role, RouteGuard};

use crate::components::sidebar::Sidebar;
use crate::state::auth::Auth;

#[component]
pub fn Protected(#[prop(optional)] required_role: Option<Role>, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<Auth>();
    let state = auth.state();
    let navigate = use_navigate();
    let guard = StoredValue::new(RouteGuard::new(required_role));

    Effect::new(move || {
        if state.with(|s| s.loading) {
            return;
        }
        let navigate = navigate.clone();
        let mut navigator = move |to: Navigation| {
            navigate(to.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        };
        guard.update_value(|g| {
            auth.evaluate(g, &mut navigator);
        });
    });

    let granted = move || state.with(|s| s.access(required_role).is_granted());

    view! {
        <Show when=granted fallback=|| view! { <div class="page-loading">"Carregando..."</div> }>
            <div class="app-shell">
                <Sidebar/>
                <main class="app-shell__content">{children()}</main>
            </div>
        </Show>
    }
}
