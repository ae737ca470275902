// SPDX-License-Identifier: MPL-2.0
//! Form state for the contact and newsletter sections.

pub mod contact;
pub mod newsletter;

pub use contact::ContactForm;
pub use newsletter::NewsletterForm;
