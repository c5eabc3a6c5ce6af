//! Root application component with routing and context providers.

use api::{ApiClient, ApiConfig};
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::{
    NavigateOptions, ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};
use session::{Credentials, Role};

use crate::components::protected::Protected;
use crate::pages::{
    customers::{CustomerFormPage, CustomersPage},
    fees::{FeeFormPage, FeesPage},
    home::HomePage,
    login::LoginPage,
    processes::{ProcessFormPage, ProcessesPage},
    users::{UserFormPage, UsersPage},
};
use crate::state::{auth::Auth, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth handle, the API client (sharing the auth context's
/// credentials), and UI state, then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let credentials = Credentials::new();
    let auth = Auth::new(credentials.clone());
    let client = ApiClient::new(ApiConfig::from_override(option_env!("BACKOFFICE_API_URL")), credentials);
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(client);
    provide_context(ui);

    // Stored preference is applied after hydration so SSR output stays unmasked.
    Effect::new(move || {
        let privacy_mode = crate::util::privacy::read_preference();
        ui.update(|u| u.privacy_mode = privacy_mode);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/backoffice.css"/>
        <Title text="Back-office Jurídico"/>

        <Router>
            <AuthProvider>
                <Routes fallback=|| "Página não encontrada.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("") view=|| view! { <Protected><HomePage/></Protected> }/>

                    <Route path=StaticSegment("customers") view=|| view! { <Protected><CustomersPage/></Protected> }/>
                    <Route
                        path=(StaticSegment("customers"), StaticSegment("create"))
                        view=|| view! { <Protected><CustomerFormPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("customers"), StaticSegment("edit"), ParamSegment("id"))
                        view=|| view! { <Protected><CustomerFormPage/></Protected> }
                    />

                    <Route path=StaticSegment("processes") view=|| view! { <Protected><ProcessesPage/></Protected> }/>
                    <Route
                        path=(StaticSegment("processes"), StaticSegment("create"))
                        view=|| view! { <Protected><ProcessFormPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("processes"), StaticSegment("edit"), ParamSegment("id"))
                        view=|| view! { <Protected><ProcessFormPage/></Protected> }
                    />

                    <Route path=StaticSegment("fees") view=|| view! { <Protected><FeesPage/></Protected> }/>
                    <Route
                        path=(StaticSegment("fees"), StaticSegment("create"))
                        view=|| view! { <Protected><FeeFormPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("fees"), StaticSegment("edit"), ParamSegment("id"))
                        view=|| view! { <Protected><FeeFormPage/></Protected> }
                    />

                    <Route
                        path=StaticSegment("users")
                        view=|| view! { <Protected required_role=Role::Admin><UsersPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("users"), StaticSegment("create"))
                        view=|| view! { <Protected required_role=Role::Admin><UserFormPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("users"), StaticSegment("edit"), ParamSegment("id"))
                        view=|| view! { <Protected required_role=Role::Admin><UserFormPage/></Protected> }
                    />
                </Routes>
            </AuthProvider>
        </Router>
    }
}

/// Recovers the persisted session once per load and holds routing until it settles.
///
/// A recovered session seen on `/login` redirects home, unless the user has
/// already navigated elsewhere by the time the redirect is computed.
#[component]
fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<Auth>();
    let state = auth.state();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    Effect::new(move || {
        let path = pathname.get_untracked();
        let Some(redirect) = auth.initialize(&path) else {
            return;
        };
        if pathname.with_untracked(|current| redirect.applies_to(current)) {
            navigate(redirect.to.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || !state.with(|s| s.loading)
            fallback=|| view! { <div class="page-loading">"Carregando..."</div> }
        >
            {children()}
        </Show>
    }
}
