//! Process list (paginated) and create/edit form.
//!
//! The form pulls four reference lists (process types, lawyers, offices,
//! customers) before it can be submitted; each loads independently and a
//! failure shows one inline message without blocking the others.

#[cfg(test)]
#[path = "processes_test.rs"]
mod processes_test;

use api::pagination::PROCESS_PAGE_SIZE;
use api::types::{Customer, Office, Process, ProcessInput, ProcessStatus, ProcessType, UserRecord};
use api::{ApiClient, Page, PageMeta};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::Role;

use crate::components::empty_state::EmptyState;
use crate::components::pagination::Pagination;
use crate::net::api::{send, send_empty, user_message};
use crate::state::ui::UiState;
use crate::util::confirm::{confirm, delete_prompt};
use crate::util::format::{format_date_cell, parse_money_input};

const LIST_PATH: &str = "/processes";

/// Raw text of the numeric inputs, kept apart so typing `1.2` is not reformatted mid-edit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct NumericDraft {
    claim_value: String,
    participation: String,
}

impl NumericDraft {
    fn from_input(input: &ProcessInput) -> Self {
        Self {
            claim_value: format!("{:.2}", input.claim_value).replace('.', ","),
            participation: input.participation.to_string(),
        }
    }
}

fn validate_process(input: ProcessInput, numbers: &NumericDraft) -> Result<ProcessInput, &'static str> {
    let number = input.number.trim().to_owned();
    if number.is_empty() {
        return Err("Informe o número do processo.");
    }
    if input.type_id.is_empty() {
        return Err("Selecione o tipo do processo.");
    }
    if input.customer_id.is_empty() {
        return Err("Selecione o cliente.");
    }
    if input.lawyer_id.is_empty() {
        return Err("Selecione o advogado responsável.");
    }
    if input.office_id.is_empty() {
        return Err("Selecione o escritório.");
    }
    let claim_value = parse_money_input(&numbers.claim_value)
        .filter(|v| *v >= 0.0)
        .ok_or("Informe um valor da causa válido.")?;
    let participation = parse_money_input(&numbers.participation)
        .filter(|v| (0.0..=100.0).contains(v))
        .ok_or("A participação deve estar entre 0 e 100%.")?;
    if input.started_on.is_empty() {
        return Err("Informe a data de início.");
    }
    let closed_on = match input.status {
        ProcessStatus::InProgress => None,
        ProcessStatus::Closed => {
            let closed = input.closed_on.filter(|d| !d.is_empty()).ok_or("Informe a data de encerramento.")?;
            if closed < input.started_on {
                return Err("O encerramento não pode ser anterior ao início.");
            }
            Some(closed)
        }
    };
    Ok(ProcessInput {
        number,
        description: input.description.trim().to_owned(),
        claim_value,
        participation,
        closed_on,
        ..input
    })
}

fn lawyer_names(process: &Process) -> String {
    if process.lawyers.is_empty() {
        return "-".to_owned();
    }
    process.lawyers.iter().map(|l| l.name.as_str()).collect::<Vec<_>>().join(", ")
}

#[component]
pub fn ProcessesPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let ui = expect_context::<RwSignal<UiState>>();

    let page = RwSignal::new(Page::<Process> { data: Vec::new(), meta: PageMeta::first(PROCESS_PAGE_SIZE) });
    let current = RwSignal::new(1_u32);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let load = client.clone();
    Effect::new(move || {
        let request = load.processes(current.get(), PROCESS_PAGE_SIZE);
        loading.set(true);
        spawn_local(async move {
            match send::<Page<Process>>(request).await {
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

    let on_delete = Callback::new(move |(id, number): (String, String)| {
        if !confirm(&delete_prompt(&format!("o processo {number}"))) {
            return;
        }
        let request = client.delete_process(&id);
        spawn_local(async move {
            match send_empty(request).await {
                Ok(()) => {
                    page.try_update(|p| p.remove_where(|proc| proc.id == id));
                }
                Err(e) => {
                    error.try_set(Some(user_message(&e)));
                }
            }
        });
    });

    let meta = Signal::derive(move || page.with(|p| p.meta));
    let on_page = Callback::new(move |target: u32| current.set(target));

    view! {
        <section class="page">
            <header class="page__header">
                <h1>"Processos"</h1>
                <span class="page__spacer"></span>
                <a class="btn btn--primary" href="/processes/create">"Novo processo"</a>
            </header>
            <Show when=move || error.with(Option::is_some)>
                <p class="page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Carregando processos..."</p> }>
                <Show
                    when=move || page.with(|p| !p.data.is_empty())
                    fallback=|| {
                        view! {
                            <EmptyState
                                message="Nenhum processo cadastrado."
                                action_href="/processes/create"
                                action_label="Cadastrar processo"
                            />
                        }
                    }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Número"</th>
                                <th>"Cliente"</th>
                                <th>"Tipo"</th>
                                <th>"Advogados"</th>
                                <th>"Valor da causa"</th>
                                <th>"Status"</th>
                                <th>"Início"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                page.get()
                                    .data
                                    .into_iter()
                                    .map(|process| {
                                        let lawyers = lawyer_names(&process);
                                        let customer = process.customer.as_ref().map_or_else(|| "-".to_owned(), |c| c.name.clone());
                                        let kind = process.kind.as_ref().map_or_else(|| "-".to_owned(), |k| k.name.clone());
                                        let started = format_date_cell(process.started_on.as_deref());
                                        let claim_value = process.claim_value;
                                        let status = process.status;
                                        let edit_href = format!("/processes/edit/{}", process.id);
                                        let delete_args = (process.id, process.number.clone());
                                        view! {
                                            <tr>
                                                <td>{process.number}</td>
                                                <td>{customer}</td>
                                                <td>{kind}</td>
                                                <td>{lawyers}</td>
                                                <td>{move || ui.with(|u| u.money(claim_value))}</td>
                                                <td>
                                                    <span
                                                        class="badge"
                                                        class:badge--closed=status == ProcessStatus::Closed
                                                    >
                                                        {status.label()}
                                                    </span>
                                                </td>
                                                <td>{started}</td>
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
pub fn ProcessFormPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();
    let edit_id = super::route_id();
    let is_edit = edit_id.is_some();

    let form = RwSignal::new(ProcessInput::default());
    let numbers = RwSignal::new(NumericDraft { claim_value: String::new(), participation: "100".to_owned() });
    let types = RwSignal::new(Vec::<ProcessType>::new());
    let lawyers = RwSignal::new(Vec::<UserRecord>::new());
    let offices = RwSignal::new(Vec::<Office>::new());
    let customers = RwSignal::new(Vec::<Customer>::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let load = client.clone();
    let load_id = edit_id.clone();
    Effect::new(move || {
        let report = move |e: &api::ApiError| {
            error.try_set(Some(user_message(e)));
        };
        let request = load.process_types();
        spawn_local(async move {
            match send::<Vec<ProcessType>>(request).await {
                Ok(list) => {
                    types.try_set(list);
                }
                Err(e) => report(&e),
            }
        });
        let request = load.users_with_role(Role::Member);
        spawn_local(async move {
            match send::<Vec<UserRecord>>(request).await {
                Ok(list) => {
                    lawyers.try_set(list);
                }
                Err(e) => report(&e),
            }
        });
        let request = load.offices();
        spawn_local(async move {
            match send::<Vec<Office>>(request).await {
                Ok(list) => {
                    offices.try_set(list);
                }
                Err(e) => report(&e),
            }
        });
        let request = load.all_customers();
        spawn_local(async move {
            match send::<Page<Customer>>(request).await {
                Ok(list) => {
                    customers.try_set(list.data);
                }
                Err(e) => report(&e),
            }
        });
        if let Some(id) = &load_id {
            let request = load.process(id);
            spawn_local(async move {
                match send::<Process>(request).await {
                    Ok(process) => {
                        let input = ProcessInput::from(&process);
                        numbers.try_set(NumericDraft::from_input(&input));
                        form.try_set(input);
                    }
                    Err(e) => report(&e),
                }
            });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input = match validate_process(form.get_untracked(), &numbers.get_untracked()) {
            Ok(input) => input,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        let request = match &edit_id {
            Some(id) => client.update_process(id, &input),
            None => client.create_process(&input),
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

    let is_closed = move || form.with(|f| f.status == ProcessStatus::Closed);

    view! {
        <section class="page">
            <header class="page__header">
                <h1>{if is_edit { "Editar processo" } else { "Novo processo" }}</h1>
            </header>
            <form class="form" on:submit=on_submit>
                <label class="form__field">
                    "Número"
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.number.clone())
                        on:input=move |ev| form.update(|f| f.number = event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Tipo"
                    <select
                        prop:value=move || form.with(|f| f.type_id.clone())
                        on:change=move |ev| form.update(|f| f.type_id = event_target_value(&ev))
                    >
                        <option value="">"Selecione o tipo"</option>
                        {move || {
                            let selected = form.with_untracked(|f| f.type_id.clone());
                            types
                                .get()
                                .into_iter()
                                .map(|t| {
                                    let is_selected = t.id == selected;
                                    view! { <option value=t.id selected=is_selected>{t.name}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
                <label class="form__field">
                    "Cliente"
                    <select
                        prop:value=move || form.with(|f| f.customer_id.clone())
                        on:change=move |ev| form.update(|f| f.customer_id = event_target_value(&ev))
                    >
                        <option value="">"Selecione o cliente"</option>
                        {move || {
                            let selected = form.with_untracked(|f| f.customer_id.clone());
                            customers
                                .get()
                                .into_iter()
                                .map(|c| {
                                    let is_selected = c.id == selected;
                                    view! { <option value=c.id selected=is_selected>{c.name}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
                <label class="form__field">
                    "Advogado responsável"
                    <select
                        prop:value=move || form.with(|f| f.lawyer_id.clone())
                        on:change=move |ev| form.update(|f| f.lawyer_id = event_target_value(&ev))
                    >
                        <option value="">"Selecione o advogado"</option>
                        {move || {
                            let selected = form.with_untracked(|f| f.lawyer_id.clone());
                            lawyers
                                .get()
                                .into_iter()
                                .map(|l| {
                                    let is_selected = l.id == selected;
                                    view! { <option value=l.id selected=is_selected>{l.name}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
                <label class="form__field">
                    "Participação (%)"
                    <input
                        type="text"
                        inputmode="decimal"
                        prop:value=move || numbers.with(|n| n.participation.clone())
                        on:input=move |ev| numbers.update(|n| n.participation = event_target_value(&ev))
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
                <label class="form__field">
                    "Valor da causa (R$)"
                    <input
                        type="text"
                        inputmode="decimal"
                        placeholder="0,00"
                        prop:value=move || numbers.with(|n| n.claim_value.clone())
                        on:input=move |ev| numbers.update(|n| n.claim_value = event_target_value(&ev))
                    />
                </label>
                <label class="form__field form__field--wide">
                    "Descrição"
                    <textarea
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="form__field">
                    "Status"
                    <select
                        prop:value=move || form.with(|f| f.status.as_str().to_owned())
                        on:change=move |ev| {
                            let raw = event_target_value(&ev);
                            if let Some(status) = ProcessStatus::parse(&raw) {
                                form.update(|f| f.status = status);
                            }
                        }
                    >
                        {ProcessStatus::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="form__field">
                    "Data de início"
                    <input
                        type="date"
                        prop:value=move || form.with(|f| f.started_on.clone())
                        on:input=move |ev| form.update(|f| f.started_on = event_target_value(&ev))
                    />
                </label>
                <Show when=is_closed>
                    <label class="form__field">
                        "Data de encerramento"
                        <input
                            type="date"
                            prop:value=move || form.with(|f| f.closed_on.clone().unwrap_or_default())
                            on:input=move |ev| form.update(|f| f.closed_on = Some(event_target_value(&ev)))
                        />
                    </label>
                </Show>
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
