//! Lead capture port
//!
//! The side effect fired once a conversation yields a complete [`Lead`].

use autostream_domain::Lead;

/// Port for handing a lead to the ingestion backend.
///
/// Fire-and-forget: nothing is returned and nothing is retried.
pub trait LeadCapturePort: Send + Sync {
    fn capture(&self, lead: &Lead);
}

/// No-op implementation for tests and dry runs.
pub struct NoLeadCapture;

impl LeadCapturePort for NoLeadCapture {
    fn capture(&self, _lead: &Lead) {}
}
