use std::collections::BTreeMap;

use crate::actions::{is_no_actions, NO_ACTIONS_SENTINEL};

/// Result regions of the task pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Region {
    Summary,
    Draft,
    Reply,
}

impl Region {
    pub fn id(self) -> &'static str {
        match self {
            Region::Summary => "summaryResult",
            Region::Draft => "draftResult",
            Region::Reply => "replyResult",
        }
    }
}

/// What a region's button writes back into the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertAction {
    Draft(String),
    Reply(String),
}

/// A typed result, rendered with every piece of model output escaped.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    Summary(String),
    Actions(Vec<String>),
    Draft(String),
    Improved(String),
    Reply(String),
    Notice(&'static str),
}

impl ResultView {
    pub fn to_html(&self) -> String {
        match self {
            ResultView::Summary(text) => {
                format!("<strong>Summary:</strong><br>{}", text_html(text))
            }
            ResultView::Actions(items) => {
                let list = if is_no_actions(items) {
                    NO_ACTIONS_SENTINEL.to_string()
                } else {
                    items
                        .iter()
                        .map(|item| format!("• {}", escape_html(item)))
                        .collect::<Vec<_>>()
                        .join("<br>")
                };
                format!("<strong>Action Items:</strong><br>{list}")
            }
            ResultView::Draft(text) => {
                generated_block("Generated Email:", text, "Insert into Email")
            }
            ResultView::Improved(text) => {
                generated_block("Improved Version:", text, "Replace Email with This")
            }
            ResultView::Reply(text) => generated_block("Suggested Reply:", text, "Use This Reply"),
            ResultView::Notice(message) => format!("<strong>{}</strong>", escape_html(message)),
        }
    }

    /// Content the region's button should write back, if the view has a button.
    pub fn insert_action(&self) -> Option<InsertAction> {
        match self {
            ResultView::Draft(text) | ResultView::Improved(text) => {
                Some(InsertAction::Draft(text.clone()))
            }
            ResultView::Reply(text) => Some(InsertAction::Reply(text.clone())),
            _ => None,
        }
    }
}

fn generated_block(title: &str, text: &str, button: &str) -> String {
    format!(
        "<strong>{title}</strong><br><br>\
         <div class=\"generated\">{}</div><br>\
         <button class=\"insert\">{button}</button>",
        text_html(text)
    )
}

fn text_html(text: &str) -> String {
    escape_html(text).replace('\n', "<br>")
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Visible state of the task pane. Writes are last-one-wins.
#[derive(Debug, Default)]
pub struct Panel {
    loading: bool,
    error: Option<String>,
    regions: BTreeMap<Region, String>,
    pending: BTreeMap<Region, InsertAction>,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn hide_loading(&mut self) {
        self.loading = false;
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.hide_loading();
    }

    pub fn show_result(&mut self, region: Region, view: ResultView) {
        self.regions.insert(region, view.to_html());
        match view.insert_action() {
            Some(action) => {
                self.pending.insert(region, action);
            }
            None => {
                self.pending.remove(&region);
            }
        }
        self.error = None;
        self.hide_loading();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_visible(&self, region: Region) -> bool {
        self.regions.contains_key(&region)
    }

    pub fn region_html(&self, region: Region) -> Option<&str> {
        self.regions.get(&region).map(String::as_str)
    }

    /// What the region's insert button would write, if it shows one.
    pub fn pending_insert(&self, region: Region) -> Option<&InsertAction> {
        self.pending.get(&region)
    }

    pub fn visible_regions(&self) -> impl Iterator<Item = (Region, &str)> {
        self.regions.iter().map(|(r, html)| (*r, html.as_str()))
    }
}
