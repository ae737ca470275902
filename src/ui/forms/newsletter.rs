// SPDX-License-Identifier: MPL-2.0
//! Newsletter signup form.

use crate::ui::notifications::{Kind, Notification};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    EmailChanged(String),
    Submit,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterForm {
    pub email: String,
}

impl NewsletterForm {
    /// Applies a message; a successful submit returns the confirmation.
    ///
    /// Submitting an empty email does nothing.
    pub fn update(&mut self, message: Message) -> Option<Notification> {
        match message {
            Message::EmailChanged(value) => {
                self.email = value;
                None
            }
            Message::Submit => {
                if self.email.is_empty() {
                    return None;
                }
                self.email.clear();
                Some(Notification::new(
                    Kind::Success,
                    "notification-newsletter-subscribed",
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_with_email_confirms_and_resets() {
        let mut form = NewsletterForm::default();
        form.update(Message::EmailChanged("a@b.com".into()));

        let notification = form.update(Message::Submit).expect("confirmation");
        assert_eq!(notification.kind(), Kind::Success);
        assert!(form.email.is_empty());
    }

    #[test]
    fn empty_submit_is_silent() {
        let mut form = NewsletterForm::default();
        assert!(form.update(Message::Submit).is_none());
    }
}
