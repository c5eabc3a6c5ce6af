//! Button that flips privacy mode and persists the choice.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::privacy;

#[component]
pub fn PrivacyToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let hidden = move || ui.with(|u| u.privacy_mode);

    view! {
        <button
            class="btn privacy-toggle"
            class:privacy-toggle--on=hidden
            title="Modo privacidade"
            on:click=move |_| {
                let next = privacy::toggle(ui.get_untracked().privacy_mode);
                ui.update(|u| u.privacy_mode = next);
            }
        >
            {move || if hidden() { "Mostrar valores" } else { "Ocultar valores" }}
        </button>
    }
}
