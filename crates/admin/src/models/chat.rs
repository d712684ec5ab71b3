//! WhatsApp conversations, automation templates and the website widget.
//!
//! Nothing here talks to WhatsApp: conversations are a recorded snapshot and
//! templates are only previewed.

use serde::{Deserialize, Serialize};

use miss_accessories_core::{ChatId, ChatStatus, Phone, Recorded, placeholder};

/// The latest message of a customer conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: ChatId,
    pub customer: String,
    pub last_message: String,
    /// Relative time label as recorded ("2 min ago").
    pub time_label: String,
    pub status: Recorded<ChatStatus>,
    pub phone: Phone,
}

impl Chat {
    /// Fields matched by the conversation search box: customer name, phone.
    #[must_use]
    pub fn search_fields(&self) -> [&str; 2] {
        [&self.customer, self.phone.as_str()]
    }
}

/// An automation message template with `{placeholder}` tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTemplate {
    pub name: String,
    /// Event label shown on the card ("Order Placed").
    pub trigger: String,
    pub message: String,
}

impl MessageTemplate {
    /// Token names used by this template, in order of first use.
    #[must_use]
    pub fn placeholders(&self) -> Vec<&str> {
        placeholder::placeholders(&self.message)
    }

    /// Fill in the template; tokens without a value stay as `{name}`.
    #[must_use]
    pub fn render(&self, values: &[(&str, &str)]) -> String {
        placeholder::render(&self.message, values)
    }
}

/// Settings for the embeddable "Chat with Us" widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatWidget {
    pub script_url: String,
    pub phone: Phone,
    pub greeting: String,
}

impl ChatWidget {
    /// HTML snippet a shop owner pastes into their website.
    ///
    /// Values are attribute-escaped, so a greeting may contain quotes.
    #[must_use]
    pub fn snippet(&self) -> String {
        format!(
            "<script src=\"{}\"></script>\n<div id=\"whatsapp-widget\" data-phone=\"{}\" data-message=\"{}\"></div>",
            escape_attribute(&self.script_url),
            escape_attribute(self.phone.as_str()),
            escape_attribute(&self.greeting)
        )
    }
}

/// Escape a value for a double-quoted HTML attribute.
fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_placeholders_and_render() {
        let template = MessageTemplate {
            name: "Order Confirmation".to_string(),
            trigger: "Order Placed".to_string(),
            message: "Hi {customer_name}! Thank you for your order #{order_id}.".to_string(),
        };

        assert_eq!(template.placeholders(), vec!["customer_name", "order_id"]);
        assert_eq!(
            template.render(&[("customer_name", "Maria Garcia")]),
            "Hi Maria Garcia! Thank you for your order #{order_id}."
        );
    }

    #[test]
    fn test_widget_snippet() {
        let widget = ChatWidget {
            script_url: "https://widget.missaccessories.com/whatsapp.js".to_string(),
            phone: Phone::parse("+1234567890").expect("valid phone"),
            greeting: "Hi! I'm interested in your accessories.".to_string(),
        };

        let snippet = widget.snippet();
        assert!(snippet.starts_with(
            "<script src=\"https://widget.missaccessories.com/whatsapp.js\"></script>"
        ));
        assert!(snippet.contains("data-phone=\"+1234567890\""));
    }

    #[test]
    fn test_widget_snippet_escapes_greeting() {
        let widget = ChatWidget {
            script_url: "https://widget.missaccessories.com/whatsapp.js".to_string(),
            phone: Phone::parse("+1234567890").expect("valid phone"),
            greeting: "Hi! I'd like the \"Rose Gold\" set & earrings".to_string(),
        };

        let snippet = widget.snippet();
        assert!(snippet.ends_with(
            "data-message=\"Hi! I'd like the &quot;Rose Gold&quot; set &amp; earrings\"></div>"
        ));
    }
}
