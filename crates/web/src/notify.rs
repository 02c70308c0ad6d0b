//! Browser notices.

use storefront_app::notifications::{Notice, Notifier};

/// Shows notices with the browser's blocking `alert`.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, notice: &Notice) {
        if let Some(window) = web_sys::window() {
            _ = window.alert_with_message(&notice.message);
        }
    }
}

pub(crate) fn show(notice: Option<Notice>) {
    if let Some(notice) = notice {
        AlertNotifier.notify(&notice);
    }
}
