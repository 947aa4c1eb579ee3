use super::{
    host::{text_to_body_html, ItemKind},
    render::{Panel, Region, ResultView},
    ActionError, AddinContext, Tone,
};

async fn read_subject_and_body(ctx: &AddinContext) -> Result<(String, String), ActionError> {
    let body = ctx.item.body_text().await?;
    Ok((ctx.item.subject(), body))
}

pub async fn summarize_email(ctx: &AddinContext, panel: &mut Panel) {
    panel.show_loading();
    let result = async {
        let (subject, body) = read_subject_and_body(ctx).await?;
        Ok::<_, ActionError>(ctx.proxy.summarize(&subject, &body).await?)
    }
    .await;

    match result {
        Ok(summary) => panel.show_result(Region::Summary, ResultView::Summary(summary)),
        Err(e) => panel.show_error(format!("Error summarizing email: {e}")),
    }
}

pub async fn extract_actions(ctx: &AddinContext, panel: &mut Panel) {
    panel.show_loading();
    let result = async {
        let (subject, body) = read_subject_and_body(ctx).await?;
        Ok::<_, ActionError>(ctx.proxy.extract_actions(&subject, &body).await?)
    }
    .await;

    match result {
        Ok(actions) => panel.show_result(Region::Summary, ResultView::Actions(actions)),
        Err(e) => panel.show_error(format!("Error extracting actions: {e}")),
    }
}

pub async fn draft_email(ctx: &AddinContext, panel: &mut Panel, instructions: &str, tone: Tone) {
    panel.show_loading();
    if instructions.is_empty() {
        panel.show_error("Please enter what you want to say");
        return;
    }

    match ctx.proxy.draft(instructions, tone.as_str()).await {
        Ok(draft) => panel.show_result(Region::Draft, ResultView::Draft(draft)),
        Err(e) => panel.show_error(format!("Error drafting email: {e}")),
    }
}

pub async fn improve_email(ctx: &AddinContext, panel: &mut Panel) {
    panel.show_loading();
    let body = match ctx.item.body_text().await {
        Ok(body) => body,
        Err(e) => {
            panel.show_error(format!("Error improving email: {e}"));
            return;
        }
    };

    if body.trim().is_empty() {
        panel.show_error("No email content to improve. Please write a draft first.");
        return;
    }

    match ctx.proxy.improve(&body).await {
        Ok(improved) => panel.show_result(Region::Draft, ResultView::Improved(improved)),
        Err(e) => panel.show_error(format!("Error improving email: {e}")),
    }
}

pub async fn quick_reply(ctx: &AddinContext, panel: &mut Panel) {
    panel.show_loading();
    let result = async {
        let (subject, body) = read_subject_and_body(ctx).await?;
        Ok::<_, ActionError>(ctx.proxy.quick_reply(&subject, &body).await?)
    }
    .await;

    match result {
        Ok(reply) => panel.show_result(Region::Reply, ResultView::Reply(reply)),
        Err(e) => panel.show_error(format!("Error generating reply: {e}")),
    }
}

/// Replaces the message body with `content`.
pub async fn insert_draft(ctx: &AddinContext, panel: &mut Panel, content: &str) {
    match ctx.item.set_body_html(&text_to_body_html(content)).await {
        Ok(()) => panel.show_result(Region::Draft, ResultView::Notice("✓ Inserted into email!")),
        Err(e) => panel.show_error(format!("Error inserting content: {e}")),
    }
}

/// Writes the reply into a compose item, or copies it when the item is read-only.
pub async fn insert_reply(ctx: &AddinContext, panel: &mut Panel, content: &str) {
    let result = match ctx.item.item_kind() {
        ItemKind::Message => ctx
            .item
            .set_body_html(&text_to_body_html(content))
            .await
            .map(|()| "✓ Reply inserted!"),
        ItemKind::ReadOnly => ctx
            .item
            .copy_to_clipboard(content)
            .await
            .map(|()| "✓ Reply copied to clipboard! Click Reply in Outlook and paste."),
    };

    match result {
        Ok(notice) => panel.show_result(Region::Reply, ResultView::Notice(notice)),
        Err(e) => panel.show_error(format!("Error inserting reply: {e}")),
    }
}
