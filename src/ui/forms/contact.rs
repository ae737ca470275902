// SPDX-License-Identifier: MPL-2.0
//! Contact form.
//!
//! Submitting with every field filled produces a `mailto:` link and clears
//! the form. Submitting with any field empty is rejected and the typed
//! values stay in place.

use crate::ui::notifications::{Kind, Notification};
use url::Url;

/// Messages emitted by the contact form widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    BodyChanged(String),
    Submit,
}

/// Outcome of a submit.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Form accepted. `mailto` is `None` only when the recipient is not a valid address.
    Sent {
        mailto: Option<Url>,
        notification: Notification,
    },
    Rejected { notification: Notification },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub body: String,
}

impl ContactForm {
    /// Every required field has a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.body.is_empty()
    }

    pub fn update(&mut self, message: Message, recipient: &str) -> Event {
        match message {
            Message::NameChanged(value) => {
                self.name = value;
                Event::None
            }
            Message::EmailChanged(value) => {
                self.email = value;
                Event::None
            }
            Message::BodyChanged(value) => {
                self.body = value;
                Event::None
            }
            Message::Submit => self.submit(recipient),
        }
    }

    fn submit(&mut self, recipient: &str) -> Event {
        if !self.is_complete() {
            return Event::Rejected {
                notification: Notification::new(Kind::Error, "notification-contact-missing-fields"),
            };
        }

        let mailto = match mailto_link(recipient, self) {
            Ok(url) => Some(url),
            Err(err) => {
                tracing::warn!(recipient, %err, "cannot build mail link");
                None
            }
        };
        *self = Self::default();

        Event::Sent {
            mailto,
            notification: Notification::new(Kind::Success, "notification-contact-sent"),
        }
    }
}

/// Builds the `mailto:` link carrying the form as subject and body.
pub fn mailto_link(recipient: &str, form: &ContactForm) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(&format!("mailto:{recipient}"))?;
    url.query_pairs_mut()
        .append_pair("subject", &format!("Message from {}", form.name))
        .append_pair("body", &format!("{}\n\nReply to: {}", form.body, form.email));
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "a@b.com".into(),
            body: "hi".into(),
        }
    }

    #[test]
    fn empty_name_is_rejected_and_form_preserved() {
        let mut form = ContactForm {
            name: String::new(),
            ..filled()
        };
        let before = form.clone();

        let event = form.update(Message::Submit, "me@example.com");

        match event {
            Event::Rejected { notification } => {
                assert_eq!(notification.kind(), Kind::Error);
                assert_eq!(notification.message_key(), "notification-contact-missing-fields");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert_eq!(form, before);
    }

    #[test]
    fn each_missing_field_is_rejected() {
        for mut form in [
            ContactForm { email: String::new(), ..filled() },
            ContactForm { body: String::new(), ..filled() },
            ContactForm::default(),
        ] {
            assert!(matches!(
                form.update(Message::Submit, "me@example.com"),
                Event::Rejected { .. }
            ));
        }
    }

    #[test]
    fn complete_form_produces_mail_link_and_resets() {
        let mut form = filled();
        let event = form.update(Message::Submit, "me@example.com");

        match event {
            Event::Sent {
                mailto: Some(url),
                notification,
            } => {
                assert_eq!(url.scheme(), "mailto");
                assert_eq!(url.path(), "me@example.com");
                let pairs: Vec<_> = url.query_pairs().collect();
                assert_eq!(pairs[0].1, "Message from Ada");
                assert!(pairs[1].1.contains("Reply to: a@b.com"));
                assert_eq!(notification.kind(), Kind::Success);
            }
            other => panic!("expected sent, got {other:?}"),
        }
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn field_messages_update_values() {
        let mut form = ContactForm::default();
        form.update(Message::NameChanged("Ada".into()), "x@y.z");
        form.update(Message::EmailChanged("a@b.com".into()), "x@y.z");
        form.update(Message::BodyChanged("hello".into()), "x@y.z");
        assert!(form.is_complete());
    }
}
