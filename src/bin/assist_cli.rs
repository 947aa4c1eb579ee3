use std::{
    env,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{bail, Context, Result};
use mail_assist::addin::{
    actions, on_ready, HostError, HostInfo, HostType, InsertAction, ItemKind,
    MailHost, Panel, ProxyClient, Region, Tone, API_BASE_URL,
};

const USAGE: &str = "usage: assist_cli <summarize|actions|reply|improve|draft|health> <email-file> [--compose] [--insert] [instructions] [tone]";

/// A message stored in a plain text file: an optional `Subject:` line, a blank
/// line, then the body. Writes go next to it as `<file>.html`.
struct FileMailHost {
    path: PathBuf,
    subject: String,
    body: String,
    kind: ItemKind,
}

impl FileMailHost {
    async fn load(path: &Path, kind: ItemKind) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read message file {}", path.display()))?;
        let (subject, body) = split_message(&raw);
        Ok(Self {
            path: path.to_path_buf(),
            subject,
            body,
            kind,
        })
    }

    fn output_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".html");
        PathBuf::from(name)
    }
}

fn split_message(raw: &str) -> (String, String) {
    match raw.split_once('\n') {
        Some((first, rest)) if first.starts_with("Subject:") => {
            let subject = first["Subject:".len()..].trim().to_string();
            let body = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n')).unwrap_or(rest);
            (subject, body.to_string())
        }
        None if raw.starts_with("Subject:") => (raw["Subject:".len()..].trim().to_string(), String::new()),
        _ => (String::new(), raw.to_string()),
    }
}

#[async_trait::async_trait]
impl MailHost for FileMailHost {
    fn subject(&self) -> String {
        self.subject.clone()
    }

    fn item_kind(&self) -> ItemKind {
        self.kind
    }

    async fn body_text(&self) -> Result<String, HostError> {
        Ok(self.body.clone())
    }

    async fn set_body_html(&self, html: &str) -> Result<(), HostError> {
        tokio::fs::write(self.output_path(), html)
            .await
            .map_err(|e| HostError::new(e.to_string()))
    }

    async fn copy_to_clipboard(&self, text: &str) -> Result<(), HostError> {
        println!("{text}");
        Ok(())
    }
}

fn print_panel(panel: &Panel) {
    for (region, html) in panel.visible_regions() {
        println!("[{}]\n{}\n", region.id(), html);
    }
    if let Some(error) = panel.error() {
        eprintln!("[error] {error}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let compose = take_flag(&mut args, "--compose");
    let insert = take_flag(&mut args, "--insert");

    let base_url = dotenvy::var("MAIL_ASSIST_PROXY_URL").unwrap_or_else(|_| API_BASE_URL.to_string());
    let proxy = ProxyClient::new(base_url);

    let Some(action) = args.first().cloned() else {
        bail!(USAGE);
    };

    if action == "health" {
        let health = proxy.health().await?;
        println!(
            "status={} apiKeyConfigured={}",
            health.status, health.api_key_configured
        );
        return Ok(());
    }

    let Some(file) = args.get(1) else {
        bail!(USAGE);
    };
    let kind = if compose { ItemKind::Message } else { ItemKind::ReadOnly };
    let item = Arc::new(FileMailHost::load(Path::new(file), kind).await?);

    let Some(ctx) = on_ready(HostInfo { host: HostType::Outlook }, item, proxy) else {
        bail!("host is not a mail client");
    };

    let mut panel = Panel::new();
    match action.as_str() {
        "summarize" => actions::summarize_email(&ctx, &mut panel).await,
        "actions" => actions::extract_actions(&ctx, &mut panel).await,
        "reply" => actions::quick_reply(&ctx, &mut panel).await,
        "improve" => actions::improve_email(&ctx, &mut panel).await,
        "draft" => {
            let instructions = args.get(2).map(String::as_str).unwrap_or_default();
            let tone = match args.get(3) {
                Some(raw) => raw.parse::<Tone>()?,
                None => Tone::default(),
            };
            actions::draft_email(&ctx, &mut panel, instructions, tone).await
        }
        other => bail!("unknown action {other:?}\n{USAGE}"),
    }

    if insert {
        let pending = [Region::Draft, Region::Reply]
            .into_iter()
            .find_map(|region| panel.pending_insert(region).cloned());
        match pending {
            Some(InsertAction::Draft(content)) => actions::insert_draft(&ctx, &mut panel, &content).await,
            Some(InsertAction::Reply(content)) => actions::insert_reply(&ctx, &mut panel, &content).await,
            None => {}
        }
    }

    print_panel(&panel);

    if panel.error().is_some() {
        std::process::exit(1);
    }
    Ok(())
}

fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    let before = args.len();
    args.retain(|a| a != flag);
    args.len() != before
}
