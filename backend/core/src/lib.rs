pub mod alert;
pub mod types;

pub use alert::{Alert, AlertSink, MemorySink, NullSink};
pub use types::{
    DocumentImage, VerificationOutcome, VerificationRequest, VerificationStatus,
};
