//! Modal-style user notifications.

/// Show `message` to the user via the browser alert dialog.
///
/// Without a window (headless build) the message goes to the log instead,
/// so callers never have to handle a failure here.
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if window.alert_with_message(message).is_err() {
                log::warn!("alert suppressed: {}", message);
            }
        }
        None => log::warn!("no window for alert: {}", message),
    }
}
