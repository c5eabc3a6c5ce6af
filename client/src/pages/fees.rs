//! Fee (`honorário`) list and create/edit form.

#[cfg(test)]
#[path = "fees_test.rs"]
mod fees_test;

use api::ApiClient;
use api::types::{Fee, FeeInput, ProcessRef};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::empty_state::EmptyState;
use crate::components::privacy_toggle::PrivacyToggle;
use crate::net::api::{send, send_empty, user_message};
use crate::state::ui::UiState;
use crate::util::confirm::{confirm, delete_prompt};
use crate::util::format::{format_date_cell, parse_money_input};

const LIST_PATH: &str = "/fees";
const MAX_INSTALLMENTS: u32 = 120;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct FeeDraft {
    amount: String,
    installments: String,
}

impl FeeDraft {
    fn from_input(input: &FeeInput) -> Self {
        Self {
            amount: format!("{:.2}", input.amount).replace('.', ","),
            installments: input.installment_count.map(|n| n.to_string()).unwrap_or_default(),
        }
    }
}

fn validate_fee(input: FeeInput, draft: &FeeDraft) -> Result<FeeInput, &'static str> {
    if input.process_id.is_empty() {
        return Err("Selecione o processo.");
    }
    let description = input.description.trim().to_owned();
    if description.is_empty() {
        return Err("Informe a descrição.");
    }
    let amount = parse_money_input(&draft.amount).filter(|v| *v > 0.0).ok_or("Informe um valor maior que zero.")?;
    if input.due_on.is_empty() {
        return Err("Informe a data prevista de recebimento.");
    }
    let received_on = if input.received {
        Some(input.received_on.filter(|d| !d.is_empty()).ok_or("Informe a data de recebimento.")?)
    } else {
        None
    };
    let installments = draft.installments.trim();
    let installment_count = if installments.is_empty() {
        None
    } else {
        Some(
            installments
                .parse::<u32>()
                .ok()
                .filter(|n| (1..=MAX_INSTALLMENTS).contains(n))
                .ok_or("Número de parcelas inválido.")?,
        )
    };
    Ok(FeeInput { description, amount, received_on, installment_count, ..input })
}

fn status_label(fee: &Fee) -> &'static str {
    if fee.received { "Recebido" } else { "Pendente" }
}

/// `paid/total` installments, or `-` for a single-payment fee.
fn installment_progress(fee: &Fee) -> String {
    if fee.installments.is_empty() {
        return "-".to_owned();
    }
    let paid = fee.installments.iter().filter(|i| i.paid).count();
    format!("{paid}/{}", fee.installments.len())
}

#[component]
pub fn FeesPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let ui = expect_context::<RwSignal<UiState>>();

    let fees = RwSignal::new(Vec::<Fee>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let load = client.clone();
    Effect::new(move || {
        let request = load.fees();
        spawn_local(async move {
            match send::<Vec<Fee>>(request).await {
                Ok(list) => {
                    fees.try_set(list);
                }
                Err(e) => {
                    error.try_set(Some(user_message(&e)));
                }
            }
            loading.try_set(false);
        });
    });

    let on_delete = Callback::new(move |id: String| {
        if !confirm(&delete_prompt("este honorário")) {
            return;
        }
        let request = client.delete_fee(&id);
        spawn_local(async move {
            match send_empty(request).await {
                Ok(()) => {
                    fees.try_update(|list| list.retain(|f| f.id != id));
                }
                Err(e) => {
                    error.try_set(Some(user_message(&e)));
                }
            }
        });
    });

    view! {
        <section class="page">
            <header class="page__header">
                <h1>"Honorários"</h1>
                <span class="page__spacer"></span>
                <PrivacyToggle/>
                <a class="btn btn--primary" href="/fees/create">"Novo honorário"</a>
            </header>
            <Show when=move || error.with(Option::is_some)>
                <p class="page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Carregando honorários..."</p> }>
                <Show
                    when=move || fees.with(|list| !list.is_empty())
                    fallback=|| {
                        view! {
                            <EmptyState
                                message="Nenhum honorário cadastrado."
                                action_href="/fees/create"
                                action_label="Cadastrar honorário"
                            />
                        }
                    }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Processo"</th>
                                <th>"Descrição"</th>
                                <th>"Valor"</th>
                                <th>"Previsto"</th>
                                <th>"Recebido em"</th>
                                <th>"Parcelas"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                fees.get()
                                    .into_iter()
                                    .map(|fee| {
                                        let process = fee.process_number().to_owned();
                                        let due = format_date_cell(fee.due_on.as_deref());
                                        let received_on = format_date_cell(fee.received_on.as_deref());
                                        let progress = installment_progress(&fee);
                                        let status = status_label(&fee);
                                        let amount = fee.amount;
                                        let edit_href = format!("/fees/edit/{}", fee.id);
                                        let id = fee.id;
                                        view! {
                                            <tr>
                                                <td>{if process.is_empty() { "-".to_owned() } else { process }}</td>
                                                <td>{fee.description}</td>
                                                <td>{move || ui.with(|u| u.money(amount))}</td>
                                                <td>{due}</td>
                                                <td>{received_on}</td>
                                                <td>{progress}</td>
                                                <td>
                                                    <span class="badge" class:badge--ok=fee.received>{status}</span>
                                                </td>
                                                <td class="table__actions">
                                                    <a class="btn btn--small" href=edit_href>"Editar"</a>
                                                    <button
                                                        class="btn btn--small btn--danger"
                                                        on:click=move |_| on_delete.run(id.clone())
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
                </Show>
            </Show>
        </section>
    }
}

#[component]
pub fn FeeFormPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();
    let edit_id = super::route_id();
    let is_edit = edit_id.is_some();

    let form = RwSignal::new(FeeInput::default());
    let draft = RwSignal::new(FeeDraft::default());
    let processes = RwSignal::new(Vec::<ProcessRef>::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let load = client.clone();
    let load_id = edit_id.clone();
    Effect::new(move || {
        let request = load.process_options();
        spawn_local(async move {
            match send::<Vec<ProcessRef>>(request).await {
                Ok(list) => {
                    processes.try_set(list);
                }
                Err(e) => {
                    error.try_set(Some(user_message(&e)));
                }
            }
        });
        if let Some(id) = &load_id {
            let request = load.fee(id);
            spawn_local(async move {
                match send::<Fee>(request).await {
                    Ok(fee) => {
                        let input = FeeInput::from(&fee);
                        draft.try_set(FeeDraft::from_input(&input));
                        form.try_set(input);
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
        let input = match validate_fee(form.get_untracked(), &draft.get_untracked()) {
            Ok(input) => input,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        let request = match &edit_id {
            Some(id) => client.update_fee(id, &input),
            None => client.create_fee(&input),
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

    let received = move || form.with(|f| f.received);

    view! {
        <section class="page">
            <header class="page__header">
                <h1>{if is_edit { "Editar honorário" } else { "Novo honorário" }}</h1>
            </header>
            <form class="form" on:submit=on_submit>
                <label class="form__field">
                    "Processo"
                    <select
                        prop:value=move || form.with(|f| f.process_id.clone())
                        on:change=move |ev| form.update(|f| f.process_id = event_target_value(&ev))
                    >
                        <option value="">"Selecione o processo"</option>
                        {move || {
                            let selected = form.with_untracked(|f| f.process_id.clone());
                            processes
                                .get()
                                .into_iter()
                                .map(|p| {
                                    let is_selected = p.id == selected;
                                    view! { <option value=p.id selected=is_selected>{p.number}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
                <label class="form__field form__field--wide">
                    "Descrição"
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Valor (R$)"
                    <input
                        type="text"
                        inputmode="decimal"
                        placeholder="0,00"
                        prop:value=move || draft.with(|d| d.amount.clone())
                        on:input=move |ev| draft.update(|d| d.amount = event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Data prevista de recebimento"
                    <input
                        type="date"
                        prop:value=move || form.with(|f| f.due_on.clone())
                        on:input=move |ev| form.update(|f| f.due_on = event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Parcelas"
                    <input
                        type="number"
                        min="1"
                        max=MAX_INSTALLMENTS.to_string()
                        placeholder="À vista"
                        prop:value=move || draft.with(|d| d.installments.clone())
                        on:input=move |ev| draft.update(|d| d.installments = event_target_value(&ev))
                    />
                </label>
                <label class="form__field form__field--checkbox">
                    <input
                        type="checkbox"
                        prop:checked=received
                        on:change=move |ev| form.update(|f| f.received = event_target_checked(&ev))
                    />
                    "Recebido"
                </label>
                <Show when=received>
                    <label class="form__field">
                        "Data de recebimento"
                        <input
                            type="date"
                            prop:value=move || form.with(|f| f.received_on.clone().unwrap_or_default())
                            on:input=move |ev| form.update(|f| f.received_on = Some(event_target_value(&ev)))
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
