//! Renders the two outbound messages for an accepted submission. Plain
//! string interpolation, no template engine; every user-supplied value is
//! HTML-escaped before it reaches an HTML body.

use clenica_email_contracts::Email;
use clenica_models::contact::NormalizedSubmission;

pub const ACKNOWLEDGEMENT_SUBJECT: &str = "Thank you for contacting ClenicaCare";

/// The enquiry notification sent to the operator mailbox. Replies go
/// straight to the submitter.
pub fn operator_notification(submission: &NormalizedSubmission, forward_to: &str) -> Email {
    let NormalizedSubmission {
        name,
        email,
        phone,
        subject,
        message,
    } = submission;

    let text = format!(
        "New enquiry submitted on the ClenicaCare website.\n\
         \n\
         Name: {name}\n\
         Email: {email}\n\
         Phone: {phone}\n\
         Subject: {subject}\n\
         \n\
         Message:\n\
         {message}"
    );

    let html = format!(
        "<div style=\"font-family: Arial, sans-serif; line-height: 1.6;\">\
         <p>New enquiry submitted on the ClenicaCare website.</p>\
         <ul>\
         <li><strong>Name:</strong> {}</li>\
         <li><strong>Email:</strong> {}</li>\
         <li><strong>Phone:</strong> {}</li>\
         <li><strong>Subject:</strong> {}</li>\
         </ul>\
         <p><strong>Message:</strong></p>\
         <p style=\"white-space: pre-line;\">{}</p>\
         </div>",
        escape_html(name),
        escape_html(email),
        escape_html(phone),
        escape_html(subject),
        escape_html(message),
    );

    Email {
        recipient: forward_to.to_owned(),
        subject: format!("New website enquiry from {name}"),
        reply_to: Some(email.clone()),
        text,
        html,
    }
}

/// The automatic thank-you sent back to the submitter. `reply_to` is left
/// unset so that replies go to the sender identity.
pub fn acknowledgement(submission: &NormalizedSubmission) -> Email {
    let name = &submission.name;

    let text = format!(
        "Dear {name},\n\
         \n\
         Thank you for contacting ClenicaCare. We have received your message \
         and a member of the team will respond within one working day.\n\
         \n\
         Warm regards,\n\
         Dave\n\
         ClenicaCare"
    );

    let html = format!(
        "<div style=\"font-family: Arial, sans-serif; line-height: 1.7;\">\
         <p>Dear {},</p>\
         <p>Thank you for contacting ClenicaCare. We have received your message \
         and a member of the team will respond within one working day.</p>\
         <p>Warm regards,<br/>Dave<br/>ClenicaCare</p>\
         </div>",
        escape_html(name),
    );

    Email {
        recipient: submission.email.clone(),
        subject: ACKNOWLEDGEMENT_SUBJECT.into(),
        reply_to: None,
        text,
        html,
    }
}

/// Escapes `&`, `<`, `>`, `"` and `'` to their entity equivalents.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use clenica_models::contact::PHONE_PLACEHOLDER;
    use pretty_assertions::assert_eq;

    use super::*;

    fn submission() -> NormalizedSubmission {
        NormalizedSubmission {
            name: "Jane <Smith>".into(),
            email: "jane@example.com".into(),
            phone: PHONE_PLACEHOLDER.into(),
            subject: "Enquiry & more".into(),
            message: "Hello there".into(),
        }
    }

    #[test]
    fn escape_html_is_a_noop_without_specials() {
        assert_eq!(escape_html("hello world"), "hello world");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn escape_html_maps_all_specials() {
        assert_eq!(escape_html("<b>"), "&lt;b&gt;");
        assert_eq!(
            escape_html(r#"Tom & "Jerry" <'>"#),
            "Tom &amp; &quot;Jerry&quot; &lt;&#39;&gt;"
        );
    }

    #[test]
    fn notification_addresses_and_subject() {
        let email = operator_notification(&submission(), "enquiries@clenicacare.com");

        assert_eq!(email.recipient, "enquiries@clenicacare.com");
        assert_eq!(email.reply_to.as_deref(), Some("jane@example.com"));
        assert_eq!(email.subject, "New website enquiry from Jane <Smith>");
    }

    #[test]
    fn notification_escapes_html_but_not_text() {
        let email = operator_notification(&submission(), "enquiries@clenicacare.com");

        assert!(email.text.contains("Name: Jane <Smith>"));
        assert!(email.text.contains("Subject: Enquiry & more"));
        assert!(email.text.contains("Phone: Not provided"));
        assert!(email.html.contains("Jane &lt;Smith&gt;"));
        assert!(email.html.contains("Enquiry &amp; more"));
        assert!(!email.html.contains("Jane <Smith>"));
    }

    #[test]
    fn acknowledgement_goes_back_to_the_submitter() {
        let email = acknowledgement(&submission());

        assert_eq!(email.recipient, "jane@example.com");
        assert_eq!(email.reply_to, None);
        assert_eq!(email.subject, ACKNOWLEDGEMENT_SUBJECT);
        assert!(email.text.contains("Dear Jane <Smith>,"));
        assert!(email.text.contains("one working day"));
        assert!(email.html.contains("Dear Jane &lt;Smith&gt;,"));
    }
}
