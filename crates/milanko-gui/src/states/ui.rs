use crate::i18n::Language;

/// Shell-level UI state: locale, sidebar visibility, status log.
#[derive(Default)]
pub struct UiState {
    pub language: Language,
    pub sidebar_collapsed: bool,
    pub log_messages: Vec<String>,
}

impl UiState {
    pub fn add_log(&mut self, msg: impl Into<String>) {
        self.log_messages.push(msg.into());
    }
}
