use crate::models::Submission;

pub fn render_proposal_notification(proposal: &Submission) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h2>New Training Proposal Request</h2>
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Email:</strong> {email}</p>
    <p><strong>Company:</strong> {company}</p>
    <p><strong>Message:</strong> {message}</p>
    <p style="color: #666; font-size: 14px;">Source: {source}</p>
</body>
</html>"#,
        name = proposal.name,
        email = proposal.email,
        company = proposal.company.as_deref().unwrap_or(""),
        message = proposal.message.as_deref().unwrap_or(""),
        source = proposal.source_page.as_deref().unwrap_or(""),
    )
}
