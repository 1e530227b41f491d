//! Legacy delivery services with incompatible call shapes.
//!
//! These stand in for pre-existing routines that cannot be modified: each
//! exposes its own signature, none of which matches the uniform
//! [`MessageSender`](crate::adapters::MessageSender) contract. Adapters wrap
//! them; nothing else calls them directly. Delivery is simulated — the only
//! side effect is a log line.

use tracing::info;

/// Gateway label the email stub reports in its delivery log.
const EMAIL_GATEWAY: &str = "smtp.legacy.local";

/// Gateway label the SMS stub reports in its delivery log.
const SMS_GATEWAY: &str = "smsc.legacy.local";

/// Legacy email routine. Takes one pre-formatted payload string that
/// already contains the recipient, subject, and body.
#[derive(Debug, Default)]
pub struct LegacyEmailService;

impl LegacyEmailService {
    /// Create the service.
    pub fn new() -> Self {
        Self
    }

    /// Simulate sending a pre-formatted email payload.
    pub fn send_email(&self, payload: &str) {
        info!(gateway = EMAIL_GATEWAY, %payload, "legacy email delivered");
    }
}

/// Legacy SMS routine. Takes the destination number and message text as
/// separate positional arguments.
#[derive(Debug, Default)]
pub struct LegacySmsGateway;

impl LegacySmsGateway {
    /// Create the gateway.
    pub fn new() -> Self {
        Self
    }

    /// Simulate dispatching an SMS to `number`.
    pub fn deliver(&self, number: &str, text: &str) {
        info!(gateway = SMS_GATEWAY, %number, %text, "legacy sms dispatched");
    }
}
