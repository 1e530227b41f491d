//! Adapters — translate the uniform sender contract into legacy call shapes.
//!
//! [`MessageSender`] is the single coupling point between the notification
//! service and the delivery channels. Each adapter owns exactly one legacy
//! service instance for its lifetime and translates `(header, body)` into
//! that service's specific signature.

pub mod dynamic;
pub mod email;
pub mod sms;

pub use dynamic::{DynamicAdapter, HandlerTable};
pub use email::EmailAdapter;
pub use sms::SmsAdapter;

/// The uniform sender contract.
///
/// No error channel: implementations handle and report failures internally.
/// Callers must not assume anything beyond "the send was attempted".
pub trait MessageSender {
    /// Send a message with a header (subject-like label) and a body.
    fn send(&self, header: &str, body: &str);
}

/// Errors from the adapter layer.
///
/// Only the dynamic adapter produces these, and it consumes them itself —
/// they never cross the [`MessageSender`] boundary.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// No handler is registered under the bound name.
    #[error("handler not found: {0}")]
    HandlerNotFound(String),

    /// The bound handler rejected the invocation.
    #[error("invocation failed: {0}")]
    InvocationFailed(String),
}
