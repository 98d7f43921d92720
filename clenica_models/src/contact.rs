use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

/// Deliberately permissive: anything of the shape `local@domain.tld` where
/// no part contains whitespace or another `@`. Tightening this changes
/// which submissions are accepted.
pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Shown in notifications when the submitter left the phone field blank.
pub const PHONE_PLACEHOLDER: &str = "Not provided";

pub const MESSAGE_MIN_CHARS: usize = 6;

/// A contact form submission exactly as received from the client.
///
/// Missing string fields deserialize to empty strings and fail the
/// required-field rule rather than JSON parsing. `consent` is kept as a raw
/// JSON value so that non-boolean values (`"yes"`, `1`, ...) reach the
/// consent rule instead of being rejected as a malformed body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub consent: serde_json::Value,
}

/// A submission that passed all validation rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedSubmission {
    pub name: String,
    /// Trimmed and lower-cased.
    pub email: String,
    /// Trimmed, or [`PHONE_PLACEHOLDER`] when blank.
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// Why a submission was rejected. The `Display` strings are the exact
/// client-facing error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmissionRejection {
    #[error("Please complete all required fields.")]
    MissingRequiredField,
    #[error("Please provide a valid email address.")]
    InvalidEmailFormat,
    #[error("Message should be at least 6 characters long.")]
    MessageTooShort,
    #[error("Consent is required.")]
    ConsentNotGiven,
}

impl ContactSubmission {
    /// Validates the submission, first failing rule wins.
    pub fn normalize(self) -> Result<NormalizedSubmission, SubmissionRejection> {
        let name = self.name.trim().to_owned();
        let email = self.email.trim().to_lowercase();
        let phone = match self.phone.as_deref().map(str::trim) {
            Some(phone) if !phone.is_empty() => phone.to_owned(),
            _ => PHONE_PLACEHOLDER.to_owned(),
        };
        let subject = self.subject.trim().to_owned();
        let message = self.message.trim().to_owned();

        if name.is_empty() || email.is_empty() || subject.is_empty() || message.is_empty() {
            return Err(SubmissionRejection::MissingRequiredField);
        }

        if !EMAIL_REGEX.is_match(&email) {
            return Err(SubmissionRejection::InvalidEmailFormat);
        }

        if message.chars().count() < MESSAGE_MIN_CHARS {
            return Err(SubmissionRejection::MessageTooShort);
        }

        if self.consent != serde_json::Value::Bool(true) {
            return Err(SubmissionRejection::ConsentNotGiven);
        }

        Ok(NormalizedSubmission {
            name,
            email,
            phone,
            subject,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Jane Smith".into(),
            email: "JANE@Example.com ".into(),
            phone: Some(String::new()),
            subject: "Enquiry".into(),
            message: "Hello there".into(),
            consent: json!(true),
        }
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        let result = submission().normalize().unwrap();

        assert_eq!(
            result,
            NormalizedSubmission {
                name: "Jane Smith".into(),
                email: "jane@example.com".into(),
                phone: PHONE_PLACEHOLDER.into(),
                subject: "Enquiry".into(),
                message: "Hello there".into(),
            }
        );
    }

    #[test]
    fn normalize_keeps_provided_phone() {
        let mut submission = submission();
        submission.phone = Some(" 01234 567890 ".into());

        let result = submission.normalize().unwrap();

        assert_eq!(result.phone, "01234 567890");
    }

    #[test]
    fn missing_required_fields() {
        let patches: [fn(&mut ContactSubmission); 5] = [
            |s| s.name = String::new(),
            |s| s.name = "   ".into(),
            |s| s.email = String::new(),
            |s| s.subject = "\t".into(),
            |s| s.message = String::new(),
        ];
        for patch in patches {
            let mut submission = submission();
            patch(&mut submission);
            assert_eq!(
                submission.normalize(),
                Err(SubmissionRejection::MissingRequiredField)
            );
        }
    }

    #[test]
    fn email_format() {
        for (email, ok) in [
            ("jane@domain.co.uk", true),
            ("a@b.c", true),
            ("weird!#$%@still.fine", true),
            (" jane@example.com ", true),
            ("not-an-email", false),
            ("a@b", false),
            ("a@ b.c", false),
            ("a@@b.c", false),
            ("@b.c", false),
            ("a@b.", false),
        ] {
            let mut submission = submission();
            submission.email = email.into();
            assert_eq!(submission.normalize().is_ok(), ok, "email: {email:?}");
        }
    }

    #[test]
    fn message_length_is_counted_after_trimming() {
        for (message, expected) in [
            ("hi", Err(SubmissionRejection::MessageTooShort)),
            (" abcde ", Err(SubmissionRejection::MessageTooShort)),
            ("abcdef", Ok(())),
        ] {
            let mut submission = submission();
            submission.message = message.into();
            assert_eq!(submission.normalize().map(|_| ()), expected, "message: {message:?}");
        }
    }

    #[test]
    fn consent_must_be_exactly_true() {
        for consent in [
            json!(null),
            json!(false),
            json!("yes"),
            json!("true"),
            json!(1),
        ] {
            let mut submission = submission();
            submission.consent = consent.clone();
            assert_eq!(
                submission.normalize(),
                Err(SubmissionRejection::ConsentNotGiven),
                "consent: {consent}"
            );
        }
    }

    #[test]
    fn first_failing_rule_wins() {
        // empty name beats a bad email
        {
            let mut submission = submission();
            submission.name = String::new();
            submission.email = "nope".into();
            assert_eq!(
                submission.normalize(),
                Err(SubmissionRejection::MissingRequiredField)
            );
        }

        // bad email beats a short message
        {
            let mut submission = submission();
            submission.email = "nope".into();
            submission.message = "hi".into();
            assert_eq!(
                submission.normalize(),
                Err(SubmissionRejection::InvalidEmailFormat)
            );
        }

        // short message beats missing consent
        {
            let mut submission = submission();
            submission.message = "hi".into();
            submission.consent = json!(false);
            assert_eq!(
                submission.normalize(),
                Err(SubmissionRejection::MessageTooShort)
            );
        }
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let submission: ContactSubmission = serde_json::from_str("{}").unwrap();

        assert_eq!(submission, ContactSubmission::default());
        assert_eq!(
            submission.normalize(),
            Err(SubmissionRejection::MissingRequiredField)
        );
    }

    #[test]
    fn deserializes_non_boolean_consent() {
        let submission: ContactSubmission =
            serde_json::from_value(json!({ "consent": "yes" })).unwrap();

        assert_eq!(submission.consent, json!("yes"));
    }
}
