//! Financial dashboard: monthly fee totals and pending installments.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It loads `dashboard/financeiro`
//! for the selected month and year, lets the user mark a pending installment
//! as received today, and honors privacy mode for every monetary value.
//!
//! DESIGN
//! ======
//! Each summary request carries a sequence number; a response is applied only
//! if no newer period was requested meanwhile, so switching months quickly
//! never shows totals for the wrong month.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use api::ApiClient;
use api::types::FinancialSummary;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::empty_state::EmptyState;
use crate::components::privacy_toggle::PrivacyToggle;
use crate::net::api::{send, send_empty, user_message};
use crate::state::auth::Auth;
use crate::state::ui::UiState;
use crate::util::format::{current_period, format_date_cell, iso_date, month_name, today, valid_period, year_options};
use crate::util::storage::BrowserStorage;
use crate::util::ui_persistence::{load_period, save_period};

/// Month and year selected in the filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardPeriod {
    pub month: u32,
    pub year: i32,
}

impl DashboardPeriod {
    fn current() -> Self {
        let (month, year) = current_period();
        Self { month, year }
    }

    /// A saved period if it is still valid, else `fallback`.
    fn restore(saved: Option<Self>, fallback: Self) -> Self {
        saved.filter(|p| valid_period(p.month, p.year)).unwrap_or(fallback)
    }

    fn label(self) -> String {
        format!("{} de {}", month_name(self.month), self.year)
    }
}

/// Expected minus received, never negative.
fn outstanding(summary: &FinancialSummary) -> f64 {
    (summary.expected_total - summary.received_total).max(0.0)
}

/// Reflect a successful mark-paid locally: drop the row and move its amount to received.
fn apply_payment(summary: &mut FinancialSummary, installment_id: &str) {
    let Some(index) = summary.pending.iter().position(|p| p.id.as_deref() == Some(installment_id)) else {
        return;
    };
    let paid = summary.pending.remove(index);
    summary.received_total += paid.amount;
}

#[component]
pub fn HomePage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = expect_context::<Auth>();
    let state = auth.state();

    let period = RwSignal::new(DashboardPeriod::current());
    let restored = RwSignal::new(false);
    let summary = RwSignal::new(None::<FinancialSummary>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let paying = RwSignal::new(None::<String>);
    let seq = StoredValue::new(0_u64);

    // Restore the saved filter after hydration, before the first load.
    Effect::new(move || {
        let saved = load_period(&BrowserStorage).map(|(month, year)| DashboardPeriod { month, year });
        period.set(DashboardPeriod::restore(saved, period.get_untracked()));
        restored.set(true);
    });

    let load = client.clone();
    Effect::new(move || {
        if !restored.get() {
            return;
        }
        let selected = period.get();
        save_period(&BrowserStorage, selected.month, selected.year);
        let request = load.financial_summary(selected.month, selected.year);
        let ticket = seq.try_update_value(|n| {
            *n += 1;
            *n
        });
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let result = send::<FinancialSummary>(request).await;
            if ticket != seq.try_get_value() {
                return;
            }
            match result {
                Ok(data) => {
                    summary.try_set(Some(data));
                }
                Err(e) => {
                    summary.try_set(None);
                    error.try_set(Some(user_message(&e)));
                }
            }
            loading.try_set(false);
        });
    });

    let on_mark_paid = Callback::new(move |installment_id: String| {
        if paying.get_untracked().is_some() {
            return;
        }
        let request = match client.mark_installment_paid(&installment_id, &iso_date(today())) {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(user_message(&e)));
                return;
            }
        };
        paying.set(Some(installment_id.clone()));
        spawn_local(async move {
            match send_empty(request).await {
                Ok(()) => {
                    summary.try_update(|s| {
                        if let Some(s) = s {
                            apply_payment(s, &installment_id);
                        }
                    });
                }
                Err(e) => {
                    error.try_set(Some(user_message(&e)));
                }
            }
            paying.try_set(None);
        });
    });

    let greeting = move || {
        state.with(|s| format!("Olá, {}", s.user.as_ref().map_or("Usuário", |u| u.display_name())))
    };
    let money = move |pick: fn(&FinancialSummary) -> f64| {
        move || {
            let value = summary.with(|s| s.as_ref().map_or(0.0, pick));
            ui.with(|u| u.money(value))
        }
    };
    let current_year = DashboardPeriod::current().year;

    view! {
        <section class="page dashboard">
            <header class="page__header">
                <div>
                    <h1>"Dashboard"</h1>
                    <p class="page__subtitle">{greeting}</p>
                </div>
                <span class="page__spacer"></span>
                <PrivacyToggle/>
            </header>

            <div class="dashboard__filters">
                <label>
                    "Mês"
                    <select
                        prop:value=move || period.get().month.to_string()
                        on:change=move |ev| {
                            if let Ok(month) = event_target_value(&ev).parse::<u32>() {
                                period.update(|p| p.month = month);
                            }
                        }
                    >
                        {(1..=12_u32)
                            .map(|m| view! { <option value=m.to_string()>{month_name(m)}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label>
                    "Ano"
                    <select
                        prop:value=move || period.get().year.to_string()
                        on:change=move |ev| {
                            if let Ok(year) = event_target_value(&ev).parse::<i32>() {
                                period.update(|p| p.year = year);
                            }
                        }
                    >
                        {year_options(current_year)
                            .into_iter()
                            .map(|y| view! { <option value=y.to_string()>{y}</option> })
                            .collect_view()}
                    </select>
                </label>
                <span class="dashboard__period">{move || period.get().label()}</span>
            </div>

            <Show when=move || error.with(Option::is_some)>
                <p class="page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <div class="dashboard__cards">
                <div class="stat-card">
                    <span class="stat-card__label">"Previsto no mês"</span>
                    <span class="stat-card__value">{money(|s| s.expected_total)}</span>
                </div>
                <div class="stat-card stat-card--ok">
                    <span class="stat-card__label">"Recebido"</span>
                    <span class="stat-card__value">{money(|s| s.received_total)}</span>
                </div>
                <div class="stat-card stat-card--warn">
                    <span class="stat-card__label">"A receber"</span>
                    <span class="stat-card__value">{money(outstanding)}</span>
                </div>
            </div>

            <h2>"Parcelas pendentes"</h2>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Carregando resumo..."</p> }>
                <Show
                    when=move || summary.with(|s| s.as_ref().is_some_and(|s| !s.pending.is_empty()))
                    fallback=|| view! { <EmptyState message="Nenhuma parcela pendente neste período."/> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Processo"</th>
                                <th>"Descrição"</th>
                                <th>"Vencimento"</th>
                                <th>"Valor"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                summary
                                    .get()
                                    .map(|s| s.pending)
                                    .unwrap_or_default()
                                    .into_iter()
                                    .map(|item| {
                                        let amount = item.amount;
                                        let due = format_date_cell(item.due_on.as_deref());
                                        let action = item.id.clone().map(|id| {
                                            let busy_id = id.clone();
                                            view! {
                                                <button
                                                    class="btn btn--small btn--primary"
                                                    disabled=move || paying.get().is_some()
                                                    on:click=move |_| on_mark_paid.run(id.clone())
                                                >
                                                    {move || {
                                                        if paying.with(|p| p.as_deref() == Some(busy_id.as_str())) {
                                                            "Salvando..."
                                                        } else {
                                                            "Marcar como pago"
                                                        }
                                                    }}
                                                </button>
                                            }
                                        });
                                        view! {
                                            <tr>
                                                <td>{item.process_number}</td>
                                                <td>{item.description}</td>
                                                <td>{due}</td>
                                                <td>{move || ui.with(|u| u.money(amount))}</td>
                                                <td class="table__actions">{action}</td>
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
