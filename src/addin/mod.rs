//! Mail add-in client.
//!
//! Reads the open message through a [`MailHost`], calls the proxy with a
//! [`ProxyClient`] and renders into a [`Panel`]. The open item is captured once
//! in [`on_ready`] and handed to every action through [`AddinContext`].

use std::{fmt, str::FromStr, sync::Arc};

use thiserror::Error;

pub mod actions;
pub mod host;
pub mod proxy;
pub mod render;

pub use host::{HostError, HostInfo, HostType, ItemKind, MailHost};
pub use proxy::{ClientError, ProxyClient, API_BASE_URL};
pub use render::{InsertAction, Panel, Region, ResultView};

#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Host(#[from] HostError),
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Everything an action needs, captured when the host signals readiness.
#[derive(Clone)]
pub struct AddinContext {
    pub item: Arc<dyn MailHost>,
    pub proxy: ProxyClient,
}

/// Readiness callback. Only the mail host gets a context; other hosts leave the
/// add-in unwired.
pub fn on_ready(info: HostInfo, item: Arc<dyn MailHost>, proxy: ProxyClient) -> Option<AddinContext> {
    if info.host != HostType::Outlook {
        tracing::debug!(host = ?info.host, "not a mail host, add-in stays idle");
        return None;
    }

    tracing::info!("AI Email Assistant loaded successfully");
    Some(AddinContext { item, proxy })
}

/// Tones offered in the draft form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Formal,
    Casual,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Professional, Tone::Friendly, Tone::Formal, Tone::Casual];

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Friendly => "friendly",
            Tone::Formal => "formal",
            Tone::Casual => "casual",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|tone| tone.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow::anyhow!("unknown tone: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{self, AppState};
    use crate::inference::TextGenerator;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    };
    use tokio::net::TcpListener;

    struct EchoGenerator {
        answer: Option<String>,
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl TextGenerator for EchoGenerator {
        async fn generate(&self, _system: &str, _prompt: &str) -> anyhow::Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.answer
                .clone()
                .ok_or_else(|| anyhow::anyhow!("GEMINI_API_KEY is not configured"))
        }
    }

    struct MemoryHost {
        subject: String,
        body: Result<String, HostError>,
        kind: ItemKind,
        written: Mutex<Option<String>>,
        clipboard: Mutex<Option<String>>,
    }

    impl MemoryHost {
        fn with_body(body: &str, kind: ItemKind) -> Arc<Self> {
            Arc::new(Self {
                subject: "Q3 plan".into(),
                body: Ok(body.into()),
                kind,
                written: Mutex::new(None),
                clipboard: Mutex::new(None),
            })
        }
    }

    #[async_trait::async_trait]
    impl MailHost for MemoryHost {
        fn subject(&self) -> String {
            self.subject.clone()
        }

        fn item_kind(&self) -> ItemKind {
            self.kind
        }

        async fn body_text(&self) -> Result<String, HostError> {
            self.body.clone()
        }

        async fn set_body_html(&self, html: &str) -> Result<(), HostError> {
            *self.written.lock().unwrap() = Some(html.to_string());
            Ok(())
        }

        async fn copy_to_clipboard(&self, text: &str) -> Result<(), HostError> {
            *self.clipboard.lock().unwrap() = Some(text.to_string());
            Ok(())
        }
    }

    async fn spawn_proxy(answer: Option<&str>) -> (ProxyClient, Arc<EchoGenerator>) {
        let generator = Arc::new(EchoGenerator {
            answer: answer.map(str::to_string),
            calls: AtomicUsize::new(0),
        });
        let app = api::app(AppState {
            generator: generator.clone(),
            api_key_configured: answer.is_some(),
        });

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (ProxyClient::new(format!("http://{addr}/api")), generator)
    }

    fn context(item: Arc<MemoryHost>, proxy: ProxyClient) -> AddinContext {
        on_ready(HostInfo { host: HostType::Outlook }, item, proxy).expect("outlook host")
    }

    #[test]
    fn only_outlook_gets_a_context() {
        let item = MemoryHost::with_body("", ItemKind::Message);
        assert!(on_ready(HostInfo { host: HostType::Word }, item.clone(), ProxyClient::default()).is_none());
        assert!(on_ready(HostInfo { host: HostType::Outlook }, item, ProxyClient::default()).is_some());
    }

    #[test]
    fn tone_parsing() {
        assert_eq!("Formal".parse::<Tone>().unwrap(), Tone::Formal);
        assert_eq!(Tone::default().to_string(), "professional");
        assert!("grumpy".parse::<Tone>().is_err());
    }

    #[tokio::test]
    async fn health_reports_key_state() {
        let (proxy, generator) = spawn_proxy(None).await;
        let health = proxy.health().await.unwrap();
        assert_eq!(health.status, "ok");
        assert!(!health.api_key_configured);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);

        let (proxy, _) = spawn_proxy(Some("unused")).await;
        assert!(proxy.health().await.unwrap().api_key_configured);
    }

    #[tokio::test]
    async fn summarize_renders_into_summary_region() {
        let (proxy, _) = spawn_proxy(Some("Short summary.")).await;
        let ctx = context(MemoryHost::with_body("Numbers are up.", ItemKind::ReadOnly), proxy);
        let mut panel = Panel::new();

        actions::summarize_email(&ctx, &mut panel).await;

        assert!(!panel.is_loading());
        assert_eq!(panel.error(), None);
        assert_eq!(
            panel.region_html(Region::Summary),
            Some("<strong>Summary:</strong><br>Short summary.")
        );
    }

    #[tokio::test]
    async fn sentinel_renders_as_no_items_message() {
        let (proxy, _) = spawn_proxy(Some("No action items found.")).await;
        let ctx = context(MemoryHost::with_body("FYI only", ItemKind::ReadOnly), proxy);
        let mut panel = Panel::new();

        actions::extract_actions(&ctx, &mut panel).await;

        assert_eq!(
            panel.region_html(Region::Summary),
            Some("<strong>Action Items:</strong><br>No action items found.")
        );
    }

    #[tokio::test]
    async fn empty_draft_instructions_never_reach_the_service() {
        let (proxy, generator) = spawn_proxy(Some("unused")).await;
        let ctx = context(MemoryHost::with_body("", ItemKind::Message), proxy);
        let mut panel = Panel::new();

        actions::draft_email(&ctx, &mut panel, "", Tone::Formal).await;

        assert_eq!(panel.error(), Some("Please enter what you want to say"));
        assert!(!panel.is_loading());
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn blank_body_is_not_sent_for_improvement() {
        let (proxy, generator) = spawn_proxy(Some("unused")).await;
        let ctx = context(MemoryHost::with_body("  \n ", ItemKind::Message), proxy);
        let mut panel = Panel::new();

        actions::improve_email(&ctx, &mut panel).await;

        assert_eq!(
            panel.error(),
            Some("No email content to improve. Please write a draft first.")
        );
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn service_failure_shows_banner() {
        let (proxy, _) = spawn_proxy(None).await;
        let ctx = context(MemoryHost::with_body("body", ItemKind::ReadOnly), proxy);
        let mut panel = Panel::new();

        actions::quick_reply(&ctx, &mut panel).await;

        assert_eq!(
            panel.error(),
            Some("Error generating reply: Failed to generate reply")
        );
        assert!(!panel.is_visible(Region::Reply));
    }

    #[tokio::test]
    async fn host_failure_shows_banner_without_calling_proxy() {
        let (proxy, generator) = spawn_proxy(Some("unused")).await;
        let item = Arc::new(MemoryHost {
            subject: String::new(),
            body: Err(HostError::new("Body is not accessible")),
            kind: ItemKind::ReadOnly,
            written: Mutex::new(None),
            clipboard: Mutex::new(None),
        });
        let ctx = context(item, proxy);
        let mut panel = Panel::new();

        actions::summarize_email(&ctx, &mut panel).await;

        assert_eq!(
            panel.error(),
            Some("Error summarizing email: Body is not accessible")
        );
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn draft_then_insert_writes_html_body() {
        let (proxy, _) = spawn_proxy(Some("Hi Bob,\nSee attached.\nAnna")).await;
        let item = MemoryHost::with_body("", ItemKind::Message);
        let ctx = context(item.clone(), proxy);
        let mut panel = Panel::new();

        actions::draft_email(&ctx, &mut panel, "send Bob the file", Tone::Friendly).await;
        let Some(InsertAction::Draft(content)) = panel.pending_insert(Region::Draft).cloned() else {
            panic!("draft region should offer an insert");
        };

        actions::insert_draft(&ctx, &mut panel, &content).await;

        assert_eq!(
            item.written.lock().unwrap().as_deref(),
            Some("Hi Bob,<br>See attached.<br>Anna")
        );
        assert_eq!(
            panel.region_html(Region::Draft),
            Some("<strong>✓ Inserted into email!</strong>")
        );
    }

    #[tokio::test]
    async fn reply_is_copied_for_read_items_and_written_for_compose() {
        let read_item = MemoryHost::with_body("", ItemKind::ReadOnly);
        let ctx = context(read_item.clone(), ProxyClient::default());
        let mut panel = Panel::new();
        actions::insert_reply(&ctx, &mut panel, "Sounds good").await;
        assert_eq!(read_item.clipboard.lock().unwrap().as_deref(), Some("Sounds good"));
        assert!(read_item.written.lock().unwrap().is_none());

        let compose_item = MemoryHost::with_body("", ItemKind::Message);
        let ctx = context(compose_item.clone(), ProxyClient::default());
        actions::insert_reply(&ctx, &mut panel, "Sounds\ngood").await;
        assert_eq!(
            compose_item.written.lock().unwrap().as_deref(),
            Some("Sounds<br>good")
        );
        assert_eq!(
            panel.region_html(Region::Reply),
            Some("<strong>✓ Reply inserted!</strong>")
        );
    }
}
