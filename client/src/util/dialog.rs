//! Browser confirmation prompt. Requires a browser environment.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

/// Ask the user to confirm a destructive action.
///
/// Returns `false` when the prompt is dismissed or unavailable (server side).
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Prompt text shown before deleting one record.
pub fn delete_prompt(noun: &str) -> String {
    format!("Delete this {noun}? This cannot be undone.")
}
