//! Dynamic adapter — adapts a legacy call shape unknown to this crate.
//!
//! Instead of reflective method lookup, the binding is explicit: the owner
//! of the legacy object registers named closures in a [`HandlerTable`] at
//! construction time, and the adapter holds the name it will invoke plus an
//! argument builder that maps `(header, body)` onto the handler's positional
//! parameters. Lookup failures and handler errors are consumed here and
//! reported as log events; they never reach the caller.

use std::collections::HashMap;

use tracing::{debug, error, warn};

use super::{AdapterError, MessageSender};

/// A registered legacy call shape: positional string arguments in, unit or
/// an [`AdapterError`] out.
pub type Handler = Box<dyn Fn(&[String]) -> Result<(), AdapterError>>;

/// Maps `(header, body)` onto the argument list a handler expects.
pub type ArgBuilder = Box<dyn Fn(&str, &str) -> Vec<String>>;

/// Named closures over some legacy object, registered at construction.
///
/// One table can expose several call shapes of the same object, so several
/// [`DynamicAdapter`]s may share a binding style without sharing a name.
#[derive(Default)]
pub struct HandlerTable {
    handlers: HashMap<String, Handler>,
}

impl HandlerTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under `name`, replacing any previous entry.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: impl Fn(&[String]) -> Result<(), AdapterError> + 'static,
    ) {
        self.handlers.insert(name.into(), Box::new(handler));
    }

    /// Look up a handler by name.
    pub fn get(&self, name: &str) -> Option<&Handler> {
        self.handlers.get(name)
    }
}

/// Adapts an arbitrary legacy object to the [`MessageSender`] contract via
/// a named handler bound at construction.
///
/// Best-effort by design: an unregistered name or a failing handler is
/// logged and swallowed, matching the no-error-channel contract.
pub struct DynamicAdapter {
    table: HandlerTable,
    handler_name: String,
    arg_builder: ArgBuilder,
}

impl DynamicAdapter {
    /// Bind `handler_name` in `table`, with `arg_builder` supplying the
    /// positional arguments for each send.
    ///
    /// The name is not validated here; a missing handler is reported on the
    /// first `send` instead, preserving the fire-and-forget contract.
    pub fn new(
        table: HandlerTable,
        handler_name: impl Into<String>,
        arg_builder: impl Fn(&str, &str) -> Vec<String> + 'static,
    ) -> Self {
        Self {
            table,
            handler_name: handler_name.into(),
            arg_builder: Box::new(arg_builder),
        }
    }
}

impl MessageSender for DynamicAdapter {
    fn send(&self, header: &str, body: &str) {
        let Some(handler) = self.table.get(&self.handler_name) else {
            let err = AdapterError::HandlerNotFound(self.handler_name.clone());
            warn!(handler = %self.handler_name, %err, "message dropped");
            return;
        };
        let args = (self.arg_builder)(header, body);
        match handler(&args) {
            Ok(()) => {
                debug!(handler = %self.handler_name, arg_count = args.len(), "handler invoked");
            }
            Err(err) => {
                error!(handler = %self.handler_name, %err, "handler failed; message dropped");
            }
        }
    }
}
