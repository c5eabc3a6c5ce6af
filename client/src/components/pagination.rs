//! Previous/next pager for `{data, meta}` lists.
//!
//! DESIGN
//! ======
//! The component only reports the requested page; targets outside
//! `1..=total_pages` are filtered by [`PageMeta::target`] before the callback
//! runs, so an out-of-range click is ignored.

use api::PageMeta;
use leptos::prelude::*;

#[component]
pub fn Pagination(#[prop(into)] meta: Signal<PageMeta>, on_page: Callback<u32>) -> impl IntoView {
    let go = move |page: u32| {
        if let Some(target) = meta.get_untracked().target(page) {
            on_page.run(target);
        }
    };

    view! {
        <Show when=move || { meta.get().total_pages > 1 }>
            <nav class="pagination">
                <button
                    class="btn pagination__prev"
                    disabled=move || !meta.get().has_previous()
                    on:click=move |_| go(meta.get_untracked().page.saturating_sub(1))
                >
                    "Anterior"
                </button>
                <span class="pagination__status">
                    {move || {
                        let m = meta.get();
                        format!("Página {} de {} ({} registros)", m.page, m.total_pages, m.total)
                    }}
                </span>
                <button
                    class="btn pagination__next"
                    disabled=move || !meta.get().has_next()
                    on:click=move |_| go(meta.get_untracked().page.saturating_add(1))
                >
                    "Próxima"
                </button>
            </nav>
        </Show>
    }
}
