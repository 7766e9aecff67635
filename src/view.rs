//! View handles
//!
//! Text regions the components render into. Regions are injected at
//! construction so components never look up output targets themselves.

use std::sync::{Arc, Mutex};

/// A shared text sink holding the most recently written text.
///
/// Clones share the same buffer. Each `set_text` replaces the whole content
/// atomically; when several in-flight operations target the same region, the
/// last write to land wins.
#[derive(Debug, Clone, Default)]
pub struct Region {
    buf: Arc<Mutex<String>>,
}

impl Region {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the region content.
    pub fn set_text(&self, text: impl Into<String>) {
        let mut buf = self.buf.lock().expect("region lock poisoned");
        *buf = text.into();
    }

    /// Returns a copy of the current content.
    pub fn text(&self) -> String {
        self.buf.lock().expect("region lock poisoned").clone()
    }
}

/// Output targets of the question loader.
#[derive(Debug, Clone, Default)]
pub struct QuestionView {
    /// Grade / performance / level summary line.
    pub summary: Region,
    /// The question text, or the fetch-failure message.
    pub question: Region,
}

impl QuestionView {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Output target of the dashboard: one region shared by all three actions.
#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    pub output: Region,
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_buffer() {
        let region = Region::new();
        let alias = region.clone();
        region.set_text("first");
        alias.set_text("second");
        assert_eq!(region.text(), "second");
    }

    #[test]
    fn set_text_replaces_rather_than_appends() {
        let region = Region::new();
        region.set_text("a long amount of text");
        region.set_text("short");
        assert_eq!(region.text(), "short");
    }
}
