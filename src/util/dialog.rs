//! Native browser dialogs (`alert`, `confirm`).
//!
//! Outside the browser build `alert` only logs and `confirm` declines, so
//! nothing destructive runs without a user answering yes.

/// Show a blocking notice.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        let shown = web_sys::window().is_some_and(|w| w.alert_with_message(message).is_ok());
        if !shown {
            log::warn!("alert unavailable: {message}");
        }
    }
    #[cfg(not(feature = "csr"))]
    log::info!("{message}");
}

/// Ask a yes/no question. Declines when no dialog can be shown.
pub fn confirm(question: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(question).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        log::info!("declining confirmation outside the browser: {question}");
        false
    }
}
