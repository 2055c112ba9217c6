//! Existing-loan disclosure: the screen that owns document verification.
//!
//! Three triggers run the check: attaching a freshly picked document
//! (alerts on), pressing Next (alerts on), and editing the total amount
//! while a document is attached (debounced, alerts off). Triggers outside
//! the debounce window are not coordinated; the verifier's last writer
//! wins.

use tracing::debug;
use uuid::Uuid;

use lendforge_core::{DocumentImage, VerificationOutcome, VerificationRequest};
use lendforge_verify::{Debouncer, DocumentVerifier};

use crate::application::MSG_FILL_ALL_FIELDS;

pub const MSG_ADD_BILL: &str = "Please add at least one bill with name and amount";
pub const MSG_NAME_MISSING: &str = "Applicant name is missing. Please go back and fill it.";
pub const MSG_UPLOAD_DOCUMENT: &str = "Please upload a valid document.";
pub const MSG_BLACKLISTED: &str =
    "You are marked under blacklist due to pending EMI payments. You cannot proceed with the loan application.";

/// A bill entry added on the disclosure screen.
#[derive(Debug, Clone)]
pub struct Bill {
    pub id: Uuid,
    pub name: String,
    pub amount: String,
}

impl Bill {
    fn is_incomplete(&self) -> bool {
        self.name.is_empty() || self.amount.is_empty()
    }
}

/// What pressing Next decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All checks passed (or the applicant has no existing loan).
    Advance,
    /// The yes/no existing-loan question was never answered.
    SelectionRequired,
    /// A field-level rule failed; the message is user-facing.
    Invalid(&'static str),
    /// Document verification failed; the verifier outcome has details.
    VerificationFailed,
    /// Pending EMIs put the applicant on the blacklist.
    Blacklisted,
}

pub struct ExistingLoanForm {
    applicant_name: String,
    pub has_existing_loan: Option<bool>,
    pub loan_type: String,
    total_loan_amount: String,
    pub monthly_emi: String,
    pub remaining_tenure: String,
    /// "yes" | "no", empty until chosen.
    pub pending_emi: String,
    bills: Vec<Bill>,
    document: Option<DocumentImage>,
    verifier: DocumentVerifier,
    debouncer: Debouncer,
}

impl ExistingLoanForm {
    pub fn new(
        applicant_name: impl Into<String>,
        verifier: DocumentVerifier,
        debouncer: Debouncer,
    ) -> Self {
        Self {
            applicant_name: applicant_name.into(),
            has_existing_loan: None,
            loan_type: String::new(),
            total_loan_amount: String::new(),
            monthly_emi: String::new(),
            remaining_tenure: String::new(),
            pending_emi: String::new(),
            bills: Vec::new(),
            document: None,
            verifier,
            debouncer,
        }
    }

    pub fn total_loan_amount(&self) -> &str {
        &self.total_loan_amount
    }

    pub fn document(&self) -> Option<&DocumentImage> {
        self.document.as_ref()
    }

    pub fn bills(&self) -> &[Bill] {
        &self.bills
    }

    pub fn verification_outcome(&self) -> VerificationOutcome {
        self.verifier.outcome()
    }

    fn build_request(&self) -> VerificationRequest {
        VerificationRequest {
            applicant_name: self.applicant_name.clone(),
            claimed_amount: self.total_loan_amount.clone(),
            document: self.document.clone(),
        }
    }

    /// A freshly picked document verifies immediately, alerts on.
    pub async fn attach_document(&mut self, image: DocumentImage) -> bool {
        self.document = Some(image);
        let request = self.build_request();
        self.verifier.verify(&request, true).await
    }

    /// Update the claimed amount. While a document is attached, schedule a
    /// debounced background re-verification; every keystroke resets the
    /// timer, so only the final state is checked.
    pub fn set_total_amount(&mut self, value: impl Into<String>) {
        self.total_loan_amount = value.into();

        if self.document.is_none() || self.total_loan_amount.is_empty() {
            return;
        }

        let verifier = self.verifier.clone();
        let request = self.build_request();
        debug!("Scheduling debounced document re-verification");
        self.debouncer.call(async move {
            verifier.verify(&request, false).await;
        });
    }

    pub fn add_bill(&mut self) -> Uuid {
        let bill = Bill {
            id: Uuid::new_v4(),
            name: String::new(),
            amount: String::new(),
        };
        let id = bill.id;
        self.bills.push(bill);
        id
    }

    pub fn remove_bill(&mut self, id: Uuid) {
        self.bills.retain(|bill| bill.id != id);
    }

    pub fn set_bill_name(&mut self, id: Uuid, name: impl Into<String>) {
        if let Some(bill) = self.bills.iter_mut().find(|b| b.id == id) {
            bill.name = name.into();
        }
    }

    pub fn set_bill_amount(&mut self, id: Uuid, amount: impl Into<String>) {
        if let Some(bill) = self.bills.iter_mut().find(|b| b.id == id) {
            bill.amount = amount.into();
        }
    }

    /// The Next button. Checks run in the original order; the first
    /// failure stops the pipeline.
    pub async fn next(&mut self) -> SubmitOutcome {
        let has_existing_loan = match self.has_existing_loan {
            Some(answer) => answer,
            None => return SubmitOutcome::SelectionRequired,
        };

        // Nothing to disclose: proceed straight through.
        if !has_existing_loan {
            return SubmitOutcome::Advance;
        }

        let required = [
            &self.loan_type,
            &self.total_loan_amount,
            &self.monthly_emi,
            &self.remaining_tenure,
            &self.pending_emi,
        ];
        if required.iter().any(|field| field.is_empty()) {
            return SubmitOutcome::Invalid(MSG_FILL_ALL_FIELDS);
        }

        if self.bills.is_empty() || self.bills.iter().any(Bill::is_incomplete) {
            return SubmitOutcome::Invalid(MSG_ADD_BILL);
        }

        if self.applicant_name.is_empty() {
            return SubmitOutcome::Invalid(MSG_NAME_MISSING);
        }

        if self.document.is_none() {
            return SubmitOutcome::Invalid(MSG_UPLOAD_DOCUMENT);
        }

        let request = self.build_request();
        if !self.verifier.verify(&request, true).await {
            return SubmitOutcome::VerificationFailed;
        }

        if self.pending_emi == "yes" {
            return SubmitOutcome::Blacklisted;
        }

        SubmitOutcome::Advance
    }
}
