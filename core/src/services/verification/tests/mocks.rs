//! Mock implementations for testing the verification service

use std::sync::{Arc, Mutex};

use crate::services::verification::SmsDispatchQueue;

/// One enqueued SMS, captured for assertions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedSms {
    pub body: String,
    pub sms_from: String,
    pub sms_to: String,
}

/// Queue double that records every enqueue instead of dispatching
pub struct RecordingSmsQueue {
    pub sent: Arc<Mutex<Vec<QueuedSms>>>,
}

impl RecordingSmsQueue {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn messages(&self) -> Vec<QueuedSms> {
        self.sent.lock().unwrap().clone()
    }
}

impl SmsDispatchQueue for RecordingSmsQueue {
    fn delay(&self, body: &str, sms_from: &str, sms_to: &str) {
        self.sent.lock().unwrap().push(QueuedSms {
            body: body.to_string(),
            sms_from: sms_from.to_string(),
            sms_to: sms_to.to_string(),
        });
    }
}
