//! OSC 8 hyperlink handlers.

use tracing::trace;

use super::super::types::Hyperlink;
use super::super::Window;

impl Window {
    /// Start attaching a hyperlink to printed text.
    pub(crate) fn handle_hyperlink_start(&mut self, params: Vec<String>, url: String) {
        self.hyperlink = Some(Hyperlink { url, params });
    }

    /// Stop attaching the hyperlink. No-op when none is active.
    pub(crate) fn handle_hyperlink_end(&mut self) {
        if self.hyperlink.take().is_none() {
            trace!("Hyperlink end without active hyperlink");
        }
    }
}
