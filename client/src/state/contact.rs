//! Contact form model and mailto construction.
//!
//! The site has no backend, so "sending" the form means opening the user's
//! mail client on a prefilled `mailto:` link.

use crate::util::mailto::mailto_href;

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Shown when a required field is blank.
pub const INCOMPLETE_MESSAGE: &str = "Please fill in all required fields.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    /// Selected app id; empty for a general enquiry.
    pub app_id: String,
    /// Display name of the selected app.
    pub app_name: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Name, email, subject and message are all present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    /// Plain-text mail body.
    #[must_use]
    pub fn body(&self) -> String {
        let mut body = format!("Name: {}\nEmail: {}\n", self.name, self.email);
        if !self.app_id.is_empty() {
            body.push_str(&format!("App: {}\n", self.app_name));
        }
        body.push_str(&format!("Subject: {}\n\n", self.subject));
        body.push_str(&self.message);
        body
    }

    #[must_use]
    pub fn mailto(&self, to: &str) -> String {
        mailto_href(to, &self.subject, &self.body())
    }

    /// Toast text shown after the mail client is opened.
    #[must_use]
    pub fn confirmation(&self, to: &str) -> String {
        if self.app_id.is_empty() {
            format!("Thank you for your message! Your email client should open to send this message to {to}.")
        } else {
            format!(
                "Thank you for your message about {}! Your email client should open to send this message to {to}.",
                self.app_name
            )
        }
    }
}
