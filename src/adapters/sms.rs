//! SMS channel adapter.
//!
//! Resolves the destination number, enforces the 160-character SMS limit,
//! and hands both to the legacy gateway's two-argument signature.

use tracing::debug;

use crate::config::SmsChannelConfig;
use crate::legacy::LegacySmsGateway;

use super::MessageSender;

/// Maximum SMS length in characters.
const SMS_MAX_CHARS: usize = 160;

/// Truncation marker appended to over-limit bodies.
const ELLIPSIS: &str = "...";

/// Character budget left for the body once the marker is appended.
const TRUNCATED_CHARS: usize = 157;

/// Adapts [`LegacySmsGateway`] to the [`MessageSender`] contract.
///
/// The header is semantically overloaded on this channel: a non-empty
/// header beginning with `+` is taken as a destination override instead of
/// a subject. This mirrors the email adapter's signature at the cost of a
/// confusing double meaning; the behavior is kept as-is rather than
/// guessed at. See `DESIGN.md`.
pub struct SmsAdapter {
    gateway: LegacySmsGateway,
    default_number: String,
}

impl SmsAdapter {
    /// Wrap a legacy SMS gateway with the configured default number.
    pub fn new(gateway: LegacySmsGateway, config: &SmsChannelConfig) -> Self {
        Self {
            gateway,
            default_number: config.default_number.clone(),
        }
    }

    /// Pick the destination for this send.
    ///
    /// A header starting with `+` is used verbatim as the number; any other
    /// header (including empty) falls back to the configured default.
    pub fn resolve_destination<'a>(&'a self, header: &'a str) -> &'a str {
        if header.starts_with('+') {
            header
        } else {
            &self.default_number
        }
    }
}

/// Enforce the SMS length limit.
///
/// Bodies of at most 160 characters pass through unchanged. Longer bodies
/// are cut to their first 157 characters plus the `...` marker, yielding
/// exactly 160. Lengths are counted in characters, not bytes, so multibyte
/// text truncates on character boundaries.
pub fn truncate_body(body: &str) -> String {
    if body.chars().count() <= SMS_MAX_CHARS {
        return body.to_owned();
    }
    let mut truncated: String = body.chars().take(TRUNCATED_CHARS).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

impl MessageSender for SmsAdapter {
    fn send(&self, header: &str, body: &str) {
        let destination = self.resolve_destination(header);
        let text = truncate_body(body);
        debug!(
            %destination,
            overridden = destination != self.default_number,
            truncated = text.len() != body.len(),
            "sms translated"
        );
        self.gateway.deliver(destination, &text);
    }
}
