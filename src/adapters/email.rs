//! Email channel adapter.
//!
//! Folds `(header, body)` into the single pre-formatted payload string the
//! legacy email routine expects.

use tracing::debug;

use crate::config::EmailChannelConfig;
use crate::legacy::LegacyEmailService;

use super::MessageSender;

/// Adapts [`LegacyEmailService`] to the [`MessageSender`] contract.
///
/// The destination is fixed at construction from
/// [`EmailChannelConfig::default_recipient`] and never overridden.
pub struct EmailAdapter {
    service: LegacyEmailService,
    recipient: String,
}

impl EmailAdapter {
    /// Wrap a legacy email service with the configured default recipient.
    pub fn new(service: LegacyEmailService, config: &EmailChannelConfig) -> Self {
        Self {
            service,
            recipient: config.default_recipient.clone(),
        }
    }

    /// Build the single payload string the legacy routine expects.
    ///
    /// The shape is `Кому: {recipient}Тема: {header} {body}` — there is no
    /// separator between the recipient and the subject marker. The legacy
    /// routine parses exactly this shape, so it is preserved verbatim.
    /// Empty header or body pass through unchanged; nothing is validated.
    pub fn format_payload(&self, header: &str, body: &str) -> String {
        format!("Кому: {}Тема: {header} {body}", self.recipient)
    }
}

impl MessageSender for EmailAdapter {
    fn send(&self, header: &str, body: &str) {
        let payload = self.format_payload(header, body);
        debug!(recipient = %self.recipient, payload_len = payload.len(), "email payload formatted");
        self.service.send_email(&payload);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter(recipient: &str) -> EmailAdapter {
        EmailAdapter::new(
            LegacyEmailService::new(),
            &EmailChannelConfig {
                default_recipient: recipient.to_owned(),
            },
        )
    }

    #[test]
    fn payload_contains_recipient_header_body_in_order() {
        let adapter = adapter("ops@example.net");
        let payload = adapter.format_payload("Alert", "disk full");
        let recipient_at = payload.find("ops@example.net").expect("recipient present");
        let header_at = payload.find("Alert").expect("header present");
        let body_at = payload.find("disk full").expect("body present");
        assert!(recipient_at < header_at);
        assert!(header_at < body_at);
    }

    #[test]
    fn payload_matches_legacy_shape_exactly() {
        let adapter = adapter("admin@company.com");
        let payload = adapter.format_payload("Важное обновление", "Вышла новая версия приложения!");
        assert_eq!(
            payload,
            "Кому: admin@company.comТема: Важное обновление Вышла новая версия приложения!"
        );
    }

    #[test]
    fn empty_header_and_body_pass_through() {
        let adapter = adapter("admin@company.com");
        assert_eq!(adapter.format_payload("", ""), "Кому: admin@company.comТема:  ");
    }

    #[test]
    fn send_does_not_panic() {
        adapter("admin@company.com").send("subject", "body");
    }
}
