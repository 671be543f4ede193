//! Submission records for the contact, newsletter and comment forms

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

use super::error::ValidationErrors;

/// Which form a submission came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Contact,
    Newsletter,
    Comment,
}

impl FormKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FormKind::Contact => "contact",
            FormKind::Newsletter => "newsletter",
            FormKind::Comment => "comment",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contact page message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsletterSignup {
    pub email: String,
}

/// A comment, or a reply when `reply_to` names a comment id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentDraft {
    /// Slug of the post being discussed
    pub post: String,
    pub name: String,
    pub email: String,
    pub comment: String,
    #[serde(deserialize_with = "optional_id", skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<u32>,
}

/// A form submission of any kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Submission {
    Contact(ContactMessage),
    Newsletter(NewsletterSignup),
    Comment(CommentDraft),
}

impl Submission {
    pub fn kind(&self) -> FormKind {
        match self {
            Submission::Contact(_) => FormKind::Contact,
            Submission::Newsletter(_) => FormKind::Newsletter,
            Submission::Comment(_) => FormKind::Comment,
        }
    }

    /// Check required fields and email shape, collecting every problem
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        match self {
            Submission::Contact(m) => {
                require(&mut errors, "name", "Name", &m.name);
                require_email(&mut errors, &m.email);
                require(&mut errors, "subject", "Subject", &m.subject);
                require(&mut errors, "message", "Message", &m.message);
            }
            Submission::Newsletter(s) => require_email(&mut errors, &s.email),
            Submission::Comment(c) => {
                require(&mut errors, "post", "Post", &c.post);
                require(&mut errors, "name", "Name", &c.name);
                require_email(&mut errors, &c.email);
                require(&mut errors, "comment", "Comment", &c.comment);
            }
        }

        errors.into_result()
    }
}

fn require(errors: &mut ValidationErrors, field: &str, label: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, &format!("{} is required", label));
    }
}

fn require_email(errors: &mut ValidationErrors, value: &str) {
    if value.trim().is_empty() {
        errors.add("email", "Email is required");
    } else if !is_valid_email(value.trim()) {
        errors.add("email", "Please enter a valid email address");
    }
}

/// One `@`, a non-empty local part, and a dotted domain
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Accepts a number, a numeric string, or a blank string for a missing id.
/// HTML forms post the empty hidden field as `reply_to=`.
fn optional_id<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u32),
        Text(String),
    }

    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Number(id)) => Ok(Some(id)),
        Some(RawId::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(RawId::Text(text)) => text.trim().parse().map(Some).map_err(de::Error::custom),
    }
}
