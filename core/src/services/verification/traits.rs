//! Task-queue seam for asynchronous SMS dispatch.

/// Enqueue primitive for asynchronous SMS delivery
///
/// The semantics mirror a task queue's `delay` call: the enqueue itself is
/// synchronous and non-blocking, and returns before anything is sent. The
/// actual provider call happens on a worker, decoupled from the caller.
/// There is no ordering guarantee between this returning and the message
/// leaving the system; delivery failures are absorbed and logged on the
/// worker side, never surfaced to the enqueuing request.
pub trait SmsDispatchQueue: Send + Sync {
    /// Schedule one SMS for delivery
    fn delay(&self, body: &str, sms_from: &str, sms_to: &str);
}
