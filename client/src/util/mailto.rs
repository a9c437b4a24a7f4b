//! `mailto:` and `tel:` link builders.

#[cfg(test)]
#[path = "mailto_test.rs"]
mod mailto_test;

pub const SUPPORT_TICKET_SUBJECT: &str = "Support Ticket Request";
pub const SUPPORT_TICKET_BODY: &str = "I would like to create a support ticket for the following issue:\n\n";

/// `mailto:` link with percent-encoded subject and body.
#[must_use]
pub fn mailto_href(to: &str, subject: &str, body: &str) -> String {
    let mut href = format!("mailto:{to}");
    let mut sep = '?';
    for (key, value) in [("subject", subject), ("body", body)] {
        if value.is_empty() {
            continue;
        }
        href.push_str(&format!("{sep}{key}={}", urlencoding::encode(value)));
        sep = '&';
    }
    href
}

/// Prefilled support ticket mail.
#[must_use]
pub fn support_ticket_href(to: &str) -> String {
    mailto_href(to, SUPPORT_TICKET_SUBJECT, SUPPORT_TICKET_BODY)
}

/// Google Maps search link for a street address.
#[must_use]
pub fn maps_href(address: &str) -> String {
    format!("https://maps.google.com/?q={}", urlencoding::encode(address))
}
