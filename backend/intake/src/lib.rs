//! Headless loan-application intake flow.
//!
//! The three screens of the mobile app as plain state machines: login,
//! the personal/loan-detail application form, and the existing-loan
//! disclosure with document upload and verification triggers. No UI here;
//! a frontend (or the CLI) drives these and renders whatever they return.

pub mod application;
pub mod catalog;
pub mod existing_loans;
pub mod session;

pub use application::ApplicationForm;
pub use existing_loans::{Bill, ExistingLoanForm, SubmitOutcome};
pub use session::{AuthMode, Credentials, IntakeSession, IntakeStep};
