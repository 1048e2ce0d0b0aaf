//! Task-queue seam for asynchronous email dispatch.

use crate::domain::value_objects::EmailMessage;

/// Enqueue primitive for asynchronous email delivery
///
/// Same contract as the SMS queue: synchronous, non-blocking enqueue; the
/// SMTP call happens on a worker and failures are absorbed and logged
/// there.
pub trait EmailDispatchQueue: Send + Sync {
    /// Schedule one email for delivery
    fn delay(&self, message: EmailMessage);
}
