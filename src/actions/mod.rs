use once_cell::sync::Lazy;
use regex::Regex;

/// Literal text the model is told to answer with when an email has no action items.
pub const NO_ACTIONS_SENTINEL: &str = "No action items found.";

// One bullet marker at the very start of the line, plus any whitespace after it.
static LEADING_BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[•\-*]\s*").expect("invalid bullet pattern"));

/// Turns the model's free-form bullet list into action items.
///
/// Blank lines are dropped, a single leading `•`, `-` or `*` is stripped, and
/// order and duplicates are kept. The sentinel is left alone here and comes back
/// as a one-element list; use [`is_no_actions`] to interpret it.
pub fn parse_action_items(raw: &str) -> Vec<String> {
    raw.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| LEADING_BULLET.replace(line, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// True when a parsed list means "nothing to do": either empty or just the sentinel.
pub fn is_no_actions(actions: &[String]) -> bool {
    match actions {
        [] => true,
        [only] => only == NO_ACTIONS_SENTINEL,
        _ => false,
    }
}
