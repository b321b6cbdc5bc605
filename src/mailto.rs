//! Contact delivery is a `mailto:` URI handed to the user's mail client; the
//! site never sends anything itself. Subject and body are percent-encoded so
//! the composed message survives the trip through the URI.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// Everything except RFC 3986 unreserved characters gets encoded.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Body text as it appears in the composed mail.
pub fn body_text(message: &ContactMessage) -> String {
    format!("Hi, my name is {}. {}", message.name, message.message)
}

/// Build the `mailto:` URI for a submitted contact form.
pub fn mailto_uri(to: &str, message: &ContactMessage) -> String {
    let subject = utf8_percent_encode(&message.subject, COMPONENT);
    let body_text = body_text(message);
    let body = utf8_percent_encode(&body_text, COMPONENT);
    format!("mailto:{to}?subject={subject}&body={body}")
}
