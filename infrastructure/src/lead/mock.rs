//! Stand-in for the lead ingestion backend.
//!
//! Records every lead in memory and logs it. The console banner is printed
//! by the presentation layer.

use autostream_application::LeadCapturePort;
use autostream_domain::Lead;
use std::sync::Mutex;
use tracing::info;

#[derive(Default)]
pub struct MockLeadCapture {
    captured: Mutex<Vec<Lead>>,
}

impl MockLeadCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leads captured so far, oldest first.
    pub fn captured(&self) -> Vec<Lead> {
        self.captured
            .lock()
            .map(|leads| leads.clone())
            .unwrap_or_default()
    }
}

impl LeadCapturePort for MockLeadCapture {
    fn capture(&self, lead: &Lead) {
        info!(
            name = %lead.name,
            email = %lead.email,
            platform = %lead.platform,
            "Lead captured"
        );
        if let Ok(mut leads) = self.captured.lock() {
            leads.push(lead.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_leads_in_order() {
        let capture = MockLeadCapture::new();
        capture.capture(&Lead::new("Jane Doe", "jane@x.com", "YouTube"));
        capture.capture(&Lead::new("Raj", "raj@y.io", "Instagram"));

        let leads = capture.captured();
        assert_eq!(leads.len(), 2);
        assert_eq!(leads[0].name, "Jane Doe");
        assert_eq!(leads[1].platform, "Instagram");
    }
}
