use notify_rust::{Notification, Timeout};

// Display interval matching Android's LENGTH_SHORT.
const SHORT_TOAST_MS: u32 = 2000;

pub(crate) fn show_short_toast(text: &str) {
    let result = Notification::new()
        .summary(text)
        .timeout(Timeout::Milliseconds(SHORT_TOAST_MS))
        .show();

    if let Err(err) = result {
        log::error!("failed to show toast: {err}");
    }
}
