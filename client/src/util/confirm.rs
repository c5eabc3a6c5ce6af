//! Blocking confirmation prompt for destructive actions.

/// Ask the user to confirm `message`; `false` outside the browser.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.confirm_with_message(message).ok()).unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Prompt text for deleting the record called `label`.
pub fn delete_prompt(label: &str) -> String {
    format!("Tem certeza que deseja excluir {label}?")
}
