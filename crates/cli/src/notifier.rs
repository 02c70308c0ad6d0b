//! Terminal notices.

use std::io::{self, Write};

use storefront_app::notifications::{Notice, Notifier};

/// Prints successes to stdout and failures to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: &Notice) {
        if notice.is_failure() {
            _ = writeln!(io::stderr().lock(), "{}", notice.message);
        } else {
            _ = writeln!(io::stdout().lock(), "{}", notice.message);
        }
    }
}
