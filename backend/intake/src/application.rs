//! The loan-details application form.

use serde::{Deserialize, Serialize};

pub const MSG_FILL_ALL_FIELDS: &str = "Please fill all required fields";

/// Second screen: personal and loan details.
///
/// `monthly_income` is derived from the annual figure until the applicant
/// edits it by hand, after which auto-calculation disengages for the rest
/// of the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationForm {
    pub full_name: String,
    pub job_type: String,
    pub annual_income: String,
    pub monthly_income: String,
    pub cibil_score: String,
    pub loan_type: String,
    pub loan_amount: String,
    #[serde(skip)]
    auto_calculate: bool,
}

impl ApplicationForm {
    pub fn new() -> Self {
        Self {
            auto_calculate: true,
            ..Self::default()
        }
    }

    /// Update the annual income, deriving monthly income (annual / 12,
    /// two decimals) while auto-calculation is engaged.
    pub fn set_annual_income(&mut self, value: impl Into<String>) {
        let value = value.into();
        if self.auto_calculate {
            self.monthly_income = match value.parse::<f64>() {
                Ok(annual) => format!("{:.2}", annual / 12.0),
                Err(_) => String::new(),
            };
        }
        self.annual_income = value;
    }

    /// A manual monthly-income edit wins and stops future auto-derivation.
    pub fn set_monthly_income(&mut self, value: impl Into<String>) {
        self.monthly_income = value.into();
        self.auto_calculate = false;
    }

    pub fn auto_calculate(&self) -> bool {
        self.auto_calculate
    }

    /// Every field is required before the flow may advance.
    pub fn validate(&self) -> Result<(), &'static str> {
        let required = [
            &self.full_name,
            &self.job_type,
            &self.annual_income,
            &self.cibil_score,
            &self.loan_type,
            &self.loan_amount,
        ];
        if required.iter().any(|field| field.is_empty()) {
            return Err(MSG_FILL_ALL_FIELDS);
        }
        Ok(())
    }
}
