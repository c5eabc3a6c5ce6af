//! Customer list (paginated) and create/edit form.

#[cfg(test)]
#[path = "customers_test.rs"]
mod customers_test;

use api::pagination::CUSTOMER_PAGE_SIZE;
use api::types::{Customer, CustomerInput, Office};
use api::{ApiClient, Page, PageMeta};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::empty_state::EmptyState;
use crate::components::pagination::Pagination;
use crate::components::privacy_toggle::PrivacyToggle;
use crate::net::api::{send, send_empty, user_message};
use crate::state::ui::UiState;
use crate::util::confirm::{confirm, delete_prompt};
use crate::util::privacy::HIDDEN;

const LIST_PATH: &str = "/customers";

/// Trim fields and check what the backend requires.
fn validate_customer(input: CustomerInput) -> Result<CustomerInput, &'static str> {
    let input = CustomerInput {
        name: input.name.trim().to_owned(),
        email: input.email.trim().to_owned(),
        phone: input.phone.trim().to_owned(),
        office_id: input.office_id,
    };
    if input.name.is_empty() {
        return Err("Informe o nome do cliente.");
    }
    if !input.email.is_empty() && !input.email.contains('@') {
        return Err("Informe um e-mail válido.");
    }
    if input.office_id.is_empty() {
        return Err("Selecione o escritório.");
    }
    Ok(input)
}

/// Contact cell text: `-` when missing, masked in privacy mode.
fn contact_text(value: Option<&str>, hidden: bool) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => "-".to_owned(),
        Some(_) if hidden => HIDDEN.to_owned(),
        Some(v) => v.to_owned(),
    }
}

fn office_name(customer: &Customer, offices: &[Office]) -> String {
    if let Some(office) = &customer.office {
        return office.name.clone();
    }
    customer
        .office_id()
        .and_then(|id| offices.iter().find(|o| o.id == id))
        .map_or_else(|| "-".to_owned(), |o| o.name.clone())
}

#[component]
pub fn CustomersPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let ui = expect_context::<RwSignal<UiState>>();

    let page = RwSignal::new(Page::<Customer> { data: Vec::new(), meta: PageMeta::first(CUSTOMER_PAGE_SIZE) });
    let offices = RwSignal::new(Vec::<Office>::new());
    let current = RwSignal::new(1_u32);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let load = client.clone();
    Effect::new(move || {
        let request = load.customers(current.get(), CUSTOMER_PAGE_SIZE);
        loading.set(true);
        spawn_local(async move {
            match send::<Page<Customer>>(request).await {
                Ok(next) => {
                    page.try_set(next);
                    error.try_set(None);
                }
                Err(e) => {
                    error.try_set(Some(user_message(&e)));
                }
            }
            loading.try_set(false);
        });
    });

    let load_offices = client.clone();
    Effect::new(move || {
        let request = load_offices.offices();
        spawn_local(async move {
            if let Ok(list) = send::<Vec<Office>>(request).await {
                offices.try_set(list);
            }
        });
    });

    let on_delete = Callback::new(move |(id, name): (String, String)| {
        if !confirm(&delete_prompt(&name)) {
            return;
        }
        let request = client.delete_customer(&id);
        spawn_local(async move {
            match send_empty(request).await {
                Ok(()) => {
                    page.try_update(|p| p.remove_where(|c| c.id == id));
                }
                Err(e) => {
                    error.try_set(Some(user_message(&e)));
                }
            }
        });
    });

    let meta = Signal::derive(move || page.with(|p| p.meta));
    let on_page = Callback::new(move |target: u32| current.set(target));
    let hidden = move || ui.with(|u| u.privacy_mode);

    view! {
        <section class="page">
            <header class="page__header">
                <h1>"Clientes"</h1>
                <span class="page__spacer"></span>
                <PrivacyToggle/>
                <a class="btn btn--primary" href="/customers/create">"Novo cliente"</a>
            </header>
            <Show when=move || error.with(Option::is_some)>
                <p class="page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Carregando clientes..."</p> }>
                <Show
                    when=move || page.with(|p| !p.data.is_empty())
                    fallback=|| {
                        view! {
                            <EmptyState
                                message="Nenhum cliente cadastrado."
                                action_href="/customers/create"
                                action_label="Cadastrar cliente"
                            />
                        }
                    }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Nome"</th>
                                <th>"E-mail"</th>
                                <th>"Telefone"</th>
                                <th>"Escritório"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let office_list = offices.get();
                                page.get()
                                    .data
                                    .into_iter()
                                    .map(|customer| {
                                        let office = office_name(&customer, &office_list);
                                        let Customer { id, name, email, phone, .. } = customer;
                                        let edit_href = format!("/customers/edit/{id}");
                                        let delete_args = (id, name.clone());
                                        view! {
                                            <tr>
                                                <td>{name}</td>
                                                <td>{move || contact_text(email.as_deref(), hidden())}</td>
                                                <td>{move || contact_text(phone.as_deref(), hidden())}</td>
                                                <td>{office}</td>
                                                <td class="table__actions">
                                                    <a class="btn btn--small" href=edit_href>"Editar"</a>
                                                    <button
                                                        class="btn btn--small btn--danger"
                                                        on:click=move |_| on_delete.run(delete_args.clone())
                                                    >
                                                        "Excluir"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                    <Pagination meta=meta on_page=on_page/>
                </Show>
            </Show>
        </section>
    }
}

#[component]
pub fn CustomerFormPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();
    let edit_id = super::route_id();
    let is_edit = edit_id.is_some();

    let form = RwSignal::new(CustomerInput::default());
    let offices = RwSignal::new(Vec::<Office>::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let load = client.clone();
    let load_id = edit_id.clone();
    Effect::new(move || {
        let offices_request = load.offices();
        spawn_local(async move {
            match send::<Vec<Office>>(offices_request).await {
                Ok(list) => {
                    offices.try_set(list);
                }
                Err(e) => {
                    error.try_set(Some(user_message(&e)));
                }
            }
        });
        if let Some(id) = &load_id {
            let request = load.customer(id);
            spawn_local(async move {
                match send::<Customer>(request).await {
                    Ok(customer) => {
                        form.try_set(CustomerInput::from(&customer));
                    }
                    Err(e) => {
                        error.try_set(Some(user_message(&e)));
                    }
                }
            });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input = match validate_customer(form.get_untracked()) {
            Ok(input) => input,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        let request = match &edit_id {
            Some(id) => client.update_customer(id, &input),
            None => client.create_customer(&input),
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
                <h1>{if is_edit { "Editar cliente" } else { "Novo cliente" }}</h1>
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
                    "Telefone"
                    <input
                        type="tel"
                        prop:value=move || form.with(|f| f.phone.clone())
                        on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Escritório"
                    <select
                        prop:value=move || form.with(|f| f.office_id.clone())
                        on:change=move |ev| form.update(|f| f.office_id = event_target_value(&ev))
                    >
                        <option value="">"Selecione o escritório"</option>
                        {move || {
                            let selected = form.with_untracked(|f| f.office_id.clone());
                            offices
                                .get()
                                .into_iter()
                                .map(|o| {
                                    let is_selected = o.id == selected;
                                    view! { <option value=o.id selected=is_selected>{o.name}</option> }
                                })
                                .collect_view()
                        }}
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
