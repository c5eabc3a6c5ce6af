//! User administration (admin only): list, create, edit.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use api::ApiClient;
use api::types::{UserInput, UserRecord};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::Role;

use crate::components::empty_state::EmptyState;
use crate::net::api::{send, send_empty, user_message};

const LIST_PATH: &str = "/users";
const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq)]
struct UserDraft {
    name: String,
    email: String,
    password: String,
    role: Role,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self { name: String::new(), email: String::new(), password: String::new(), role: Role::Member }
    }
}

impl From<&UserRecord> for UserDraft {
    fn from(user: &UserRecord) -> Self {
        Self { name: user.name.clone(), email: user.email.clone(), password: String::new(), role: user.role }
    }
}

/// Build the request body. A blank password on edit keeps the current one.
fn validate_user(draft: UserDraft, is_edit: bool) -> Result<UserInput, &'static str> {
    let name = draft.name.trim().to_owned();
    let email = draft.email.trim().to_owned();
    if name.is_empty() {
        return Err("Informe o nome.");
    }
    if !email.contains('@') {
        return Err("Informe um e-mail válido.");
    }
    let password = match (draft.password.is_empty(), is_edit) {
        (true, true) => None,
        (true, false) => return Err("Informe uma senha."),
        (false, _) if draft.password.chars().count() < MIN_PASSWORD_LEN => {
            return Err("A senha deve ter pelo menos 6 caracteres.");
        }
        (false, _) => Some(draft.password),
    };
    Ok(UserInput { name, email, password, role: draft.role })
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let users = RwSignal::new(Vec::<UserRecord>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let request = client.users();
        spawn_local(async move {
            match send::<Vec<UserRecord>>(request).await {
                Ok(list) => {
                    users.try_set(list);
                }
                Err(e) => {
                    error.try_set(Some(user_message(&e)));
                }
            }
            loading.try_set(false);
        });
    });

    view! {
        <section class="page">
            <header class="page__header">
                <h1>"Usuários"</h1>
                <span class="page__spacer"></span>
                <a class="btn btn--primary" href="/users/create">"Novo usuário"</a>
            </header>
            <Show when=move || error.with(Option::is_some)>
                <p class="page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Carregando usuários..."</p> }>
                <Show
                    when=move || users.with(|list| !list.is_empty())
                    fallback=|| view! { <EmptyState message="Nenhum usuário encontrado."/> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Nome"</th>
                                <th>"E-mail"</th>
                                <th>"Perfil"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                users
                                    .get()
                                    .into_iter()
                                    .map(|user| {
                                        let edit_href = format!("/users/edit/{}", user.id);
                                        view! {
                                            <tr>
                                                <td>{user.name}</td>
                                                <td>{user.email}</td>
                                                <td>{user.role.label()}</td>
                                                <td class="table__actions">
                                                    <a class="btn btn--small" href=edit_href>"Editar"</a>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </Show>
            </Show>
        </section>
    }
}

#[component]
pub fn UserFormPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();
    let edit_id = super::route_id();
    let is_edit = edit_id.is_some();

    let form = RwSignal::new(UserDraft::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let load = client.clone();
    let load_id = edit_id.clone();
    Effect::new(move || {
        let Some(id) = &load_id else {
            return;
        };
        let request = load.user(id);
        spawn_local(async move {
            match send::<UserRecord>(request).await {
                Ok(user) => {
                    form.try_set(UserDraft::from(&user));
                }
                Err(e) => {
                    error.try_set(Some(user_message(&e)));
                }
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input = match validate_user(form.get_untracked(), is_edit) {
            Ok(input) => input,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        let request = match &edit_id {
            Some(id) => client.update_user(id, &input),
            None => client.create_user(&input),
        };
        let request = match request {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(user_message(&e)));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        let navigate = navigate.clone();
        spawn_local(async move {
            match send_empty(request).await {
                Ok(()) => navigate(LIST_PATH, NavigateOptions::default()),
                Err(e) => {
                    error.try_set(Some(user_message(&e)));
                    busy.try_set(false);
                }
            }
        });
    };

    view! {
        <section class="page">
            <header class="page__header">
                <h1>{if is_edit { "Editar usuário" } else { "Novo usuário" }}</h1>
            </header>
            <form class="form" on:submit=on_submit>
                <label class="form__field">
                    "Nome"
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "E-mail"
                    <input
                        type="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    {if is_edit { "Nova senha (opcional)" } else { "Senha" }}
                    <input
                        type="password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Perfil"
                    <select
                        prop:value=move || form.with(|f| f.role.as_str().to_owned())
                        on:change=move |ev| {
                            if let Some(role) = Role::parse(&event_target_value(&ev)) {
                                form.update(|f| f.role = role);
                            }
                        }
                    >
                        <option value=Role::Member.as_str()>{Role::Member.label()}</option>
                        <option value=Role::Admin.as_str()>{Role::Admin.label()}</option>
                    </select>
                </label>
                <Show when=move || error.with(Option::is_some)>
                    <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="form__actions">
                    <a class="btn" href=LIST_PATH>"Cancelar"</a>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Salvando..." } else { "Salvar" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
