//! Outbound URIs. The site never sends anything itself: inquiries are handed to
//! the visitor's mail client through a `mailto:` link, chats to WhatsApp.

use log::{info, warn};
use thiserror::Error;

use crate::config;
use crate::contact::form::{ContactError, ContactFields};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandOffError {
    #[error("no browser window available")]
    NoWindow,
    #[error("browser refused to open {uri}: {reason}")]
    Navigation { uri: String, reason: String },
}

pub fn inquiry_subject(fields: &ContactFields) -> String {
    format!("Coffee Inquiry from {}", fields.name)
}

pub fn inquiry_body(fields: &ContactFields) -> String {
    format!(
        "Name: {}\nEmail: {}\nPhone: {}\n\nMessage:\n{}",
        fields.name, fields.email, fields.phone, fields.message
    )
}

/// `mailto:` link with subject and body percent-encoded. Field values go in
/// verbatim; encoding is the only transformation.
pub fn inquiry_uri(recipient: &str, fields: &ContactFields) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(&inquiry_subject(fields)),
        urlencoding::encode(&inquiry_body(fields)),
    )
}

pub fn whatsapp_uri(number: &str, greeting: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(greeting))
}

/// Points the current window at `uri`. Completion is not observable.
pub fn navigate(uri: &str) -> Result<(), HandOffError> {
    let window = web_sys::window().ok_or(HandOffError::NoWindow)?;
    window
        .location()
        .set_href(uri)
        .map_err(|e| HandOffError::Navigation {
            uri: uri.to_string(),
            reason: format!("{:?}", e),
        })
}

pub fn open_in_new_tab(uri: &str) -> Result<(), HandOffError> {
    let window = web_sys::window().ok_or(HandOffError::NoWindow)?;
    match window.open_with_url_and_target(uri, "_blank") {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(HandOffError::Navigation {
            uri: uri.to_string(),
            reason: "popup blocked".to_string(),
        }),
        Err(e) => Err(HandOffError::Navigation {
            uri: uri.to_string(),
            reason: format!("{:?}", e),
        }),
    }
}

/// Validates `fields` and hands the inquiry to the mail client.
pub fn send_inquiry(fields: &ContactFields) -> Result<(), ContactError> {
    fields.validate().map_err(ContactError::Validation)?;
    let uri = inquiry_uri(config::CONTACT_EMAIL, fields);
    navigate(&uri)?;
    info!("Opened mail client for inquiry from {}", fields.name);
    Ok(())
}

pub fn open_whatsapp_chat() {
    let uri = whatsapp_uri(config::WHATSAPP_NUMBER, config::WHATSAPP_GREETING);
    if let Err(e) = open_in_new_tab(&uri) {
        warn!("Could not open WhatsApp chat: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> ContactFields {
        ContactFields {
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            phone: String::new(),
            message: "Hello".to_string(),
        }
    }

    fn query_param<'a>(uri: &'a str, key: &str) -> &'a str {
        let (_, query) = uri.split_once('?').unwrap();
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix(key).and_then(|rest| rest.strip_prefix('=')))
            .unwrap()
    }

    #[test]
    fn inquiry_uri_decodes_to_the_expected_mail() {
        let uri = inquiry_uri("seandiallo@gmail.com", &alice());
        assert!(uri.starts_with("mailto:seandiallo@gmail.com?subject="));

        let subject = urlencoding::decode(query_param(&uri, "subject")).unwrap();
        let body = urlencoding::decode(query_param(&uri, "body")).unwrap();
        assert_eq!(subject, "Coffee Inquiry from Alice");
        assert_eq!(body, "Name: Alice\nEmail: a@x.com\nPhone: \n\nMessage:\nHello");
    }

    #[test]
    fn reserved_characters_are_encoded() {
        let mut fields = alice();
        fields.name = "Tom & Jerry".to_string();
        fields.message = "50% off? a=b #1".to_string();
        let uri = inquiry_uri("x@y.z", &fields);

        let (_, query) = uri.split_once('?').unwrap();
        assert_eq!(query.matches('&').count(), 1);
        assert!(!query.contains('#'));
        assert!(!query.contains(' '));
        let body = urlencoding::decode(query_param(&uri, "body")).unwrap();
        assert!(body.ends_with("Message:\n50% off? a=b #1"));
    }

    #[test]
    fn whatsapp_uri_carries_the_greeting() {
        let uri = whatsapp_uri("+250788503455", "Hello there!");
        assert_eq!(uri, "https://wa.me/+250788503455?text=Hello%20there%21");
    }

    #[test]
    fn send_inquiry_rejects_missing_fields_before_navigating() {
        let mut fields = alice();
        fields.name.clear();
        match send_inquiry(&fields) {
            Err(ContactError::Validation(missing)) => {
                assert_eq!(missing.fields(), &[crate::contact::form::Field::Name]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
