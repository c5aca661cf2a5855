//! Blocking browser dialogs.

/// Ask the user to confirm a destructive action. Outside the browser there
/// is nobody to ask, so the answer is yes.
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
        true
    }
}
