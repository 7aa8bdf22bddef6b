//! Types exchanged with the acknowledgement letter renderer and sender.

use serde::Serialize;

use crate::value_objects::EmailAddress;

/// Rendered HTML body of an acknowledgement letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HtmlString(String);

impl HtmlString {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// What gets handed to the sender: recipient and letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderAcknowledgment {
    pub email_address: EmailAddress,
    pub letter: HtmlString,
}

/// Outcome reported by the sender. There is no third case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendResult {
    Sent,
    NotSent,
}

impl SendResult {
    pub fn is_sent(&self) -> bool {
        matches!(self, SendResult::Sent)
    }
}
