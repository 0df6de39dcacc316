//! Lead capture adapters

mod mock;

pub use mock::MockLeadCapture;
