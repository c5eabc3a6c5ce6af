//! Placeholder for lists with nothing to show.

use leptos::prelude::*;

#[component]
pub fn EmptyState(
    message: &'static str,
    #[prop(optional)] action_href: Option<&'static str>,
    #[prop(optional)] action_label: Option<&'static str>,
) -> impl IntoView {
    let action = action_href.zip(action_label);
    view! {
        <div class="empty-state">
            <p class="empty-state__message">{message}</p>
            {action.map(|(href, label)| view! { <a class="btn empty-state__action" href=href>{label}</a> })}
        </div>
    }
}
