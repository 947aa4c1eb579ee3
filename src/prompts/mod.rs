// NOTE:
// Templates are plain interpolation. Email text goes to the model verbatim,
// nothing is escaped or truncated.

use crate::api::types::{
    ActionsRequest, DraftRequest, ImproveRequest, ReplyRequest, SummarizeRequest,
};

pub const SUMMARIZE_SYSTEM: &str =
    "You are an expert email assistant. Provide clear, concise summaries of emails.";

pub const EXTRACT_ACTIONS_SYSTEM: &str =
    "You are an expert at identifying action items and tasks in emails. Be specific and actionable.";

pub const DRAFT_SYSTEM: &str = "You are an expert email writer. Write clear, professional emails in the specified tone. Keep emails concise but complete.";

pub const IMPROVE_SYSTEM: &str = "You are an expert editor. Improve emails for clarity, professionalism, and conciseness. Fix grammar and style issues.";

pub const QUICK_REPLY_SYSTEM: &str =
    "You are an expert at writing professional email replies. Keep responses concise and appropriate.";

/// A request that can be turned into one model call.
pub trait PromptRequest {
    fn system_instruction(&self) -> &'static str;
    fn prompt(&self) -> String;
}

impl PromptRequest for SummarizeRequest {
    fn system_instruction(&self) -> &'static str {
        SUMMARIZE_SYSTEM
    }

    fn prompt(&self) -> String {
        format!(
            "Please provide a concise summary of this email:\n\n\
             Subject: {}\n\n\
             Body:\n{}\n\n\
             Provide a 2-3 sentence summary highlighting the key points.",
            self.subject, self.body
        )
    }
}

impl PromptRequest for ActionsRequest {
    fn system_instruction(&self) -> &'static str {
        EXTRACT_ACTIONS_SYSTEM
    }

    fn prompt(&self) -> String {
        format!(
            "Extract all action items from this email:\n\n\
             Subject: {}\n\n\
             Body:\n{}\n\n\
             List each action item as a separate bullet point. If there are no clear action items, respond with \"{}\"",
            self.subject,
            self.body,
            crate::actions::NO_ACTIONS_SENTINEL
        )
    }
}

impl PromptRequest for DraftRequest {
    fn system_instruction(&self) -> &'static str {
        DRAFT_SYSTEM
    }

    fn prompt(&self) -> String {
        format!(
            "Write an email with a {} tone based on these instructions:\n\n\
             {}\n\n\
             Write a complete email including appropriate greeting and sign-off.",
            self.tone, self.instructions
        )
    }
}

impl PromptRequest for ImproveRequest {
    fn system_instruction(&self) -> &'static str {
        IMPROVE_SYSTEM
    }

    fn prompt(&self) -> String {
        format!(
            "Improve this email draft by making it clearer, more concise, and more professional while maintaining the original intent:\n\n\
             {}\n\n\
             Provide the improved version.",
            self.content
        )
    }
}

impl PromptRequest for ReplyRequest {
    fn system_instruction(&self) -> &'static str {
        QUICK_REPLY_SYSTEM
    }

    fn prompt(&self) -> String {
        format!(
            "Generate a professional reply to this email:\n\n\
             Subject: {}\n\n\
             Body:\n{}\n\n\
             Write a brief, appropriate reply.",
            self.subject, self.body
        )
    }
}
