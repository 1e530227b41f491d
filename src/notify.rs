//! Notification service — the client side of the adapter seam.
//!
//! Depends only on the [`MessageSender`](crate::adapters::MessageSender)
//! contract; which channel actually carries the message is decided by
//! whoever constructed the service.

use tracing::info;

use crate::adapters::MessageSender;

/// Forwards subject/message pairs to one sender fixed for its lifetime.
///
/// No buffering, no retry, no batching: each call is a single synchronous
/// forward to the held sender.
pub struct NotificationService {
    sender: Box<dyn MessageSender>,
}

impl NotificationService {
    /// Bind the service to a sender.
    pub fn new(sender: Box<dyn MessageSender>) -> Self {
        Self { sender }
    }

    /// Notify the user: log the intent, then hand off to the sender.
    pub fn notify_user(&self, subject: &str, message: &str) {
        info!(%subject, message_chars = message.chars().count(), "notifying user");
        self.sender.send(subject, message);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    struct RecordingSender {
        sent: Rc<RefCell<Vec<(String, String)>>>,
    }

    impl MessageSender for RecordingSender {
        fn send(&self, header: &str, body: &str) {
            self.sent
                .borrow_mut()
                .push((header.to_owned(), body.to_owned()));
        }
    }

    #[test]
    fn forwards_subject_and_message_unchanged() {
        let sent = Rc::new(RefCell::new(Vec::new()));
        let service = NotificationService::new(Box::new(RecordingSender {
            sent: Rc::clone(&sent),
        }));

        service.notify_user("Maintenance", "Back at 09:00 UTC");

        let sent = sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "Maintenance");
        assert_eq!(sent[0].1, "Back at 09:00 UTC");
    }

    #[test]
    fn each_call_forwards_exactly_once() {
        let sent = Rc::new(RefCell::new(Vec::new()));
        let service = NotificationService::new(Box::new(RecordingSender {
            sent: Rc::clone(&sent),
        }));

        service.notify_user("a", "1");
        service.notify_user("b", "2");
        assert_eq!(sent.borrow().len(), 2);
    }
}
