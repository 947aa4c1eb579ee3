use thiserror::Error;

/// Error reported by the mail host when a body read or write does not succeed.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{message}")]
pub struct HostError {
    pub message: String,
}

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Which application loaded the add-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostType {
    Outlook,
    Word,
    Excel,
    Other,
}

/// What the host passes to the readiness callback.
#[derive(Debug, Clone, Copy)]
pub struct HostInfo {
    pub host: HostType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// A message in compose mode; the body can be written.
    Message,
    /// Anything opened read-only, e.g. a received mail.
    ReadOnly,
}

/// The currently open mail item, as seen through the host.
#[async_trait::async_trait]
pub trait MailHost: Send + Sync {
    /// Never fails; empty when the item has no subject.
    fn subject(&self) -> String;

    fn item_kind(&self) -> ItemKind;

    async fn body_text(&self) -> Result<String, HostError>;

    async fn set_body_html(&self, html: &str) -> Result<(), HostError>;

    async fn copy_to_clipboard(&self, text: &str) -> Result<(), HostError>;
}

/// Escapes text and turns newlines into `<br>` for writing into an HTML body.
pub fn text_to_body_html(text: &str) -> String {
    super::render::escape_html(text).replace('\n', "<br>")
}
