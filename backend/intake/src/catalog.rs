//! Fixed option lists for the intake forms.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub label: &'static str,
    pub value: &'static str,
}

pub const JOB_TYPES: &[Choice] = &[
    Choice { label: "Government", value: "govt" },
    Choice { label: "Private", value: "private" },
    Choice { label: "Self-Employed", value: "self-employed" },
    Choice { label: "Student", value: "student" },
];

/// Loan types offered on the application form.
pub const LOAN_TYPES: &[Choice] = &[
    Choice { label: "Personal Loan", value: "personal" },
    Choice { label: "Education Loan", value: "education" },
    Choice { label: "Home Loan", value: "home" },
    Choice { label: "Vehicle Loan", value: "vehicle" },
    Choice { label: "Business Loan", value: "business" },
    Choice { label: "Gold Loan", value: "gold" },
];

/// The disclosure screen additionally lists mobile loans.
pub const EXISTING_LOAN_TYPES: &[Choice] = &[
    Choice { label: "Personal Loan", value: "personal" },
    Choice { label: "Education Loan", value: "education" },
    Choice { label: "Home Loan", value: "home" },
    Choice { label: "Mobile Loan", value: "mobile" },
    Choice { label: "Vehicle Loan", value: "vehicle" },
    Choice { label: "Business Loan", value: "business" },
    Choice { label: "Gold Loan", value: "gold" },
];

pub const PENDING_EMI_OPTIONS: &[Choice] = &[
    Choice { label: "Yes", value: "yes" },
    Choice { label: "No", value: "no" },
];

/// Display label for a stored value, or `None` when nothing is selected.
pub fn label_for(choices: &[Choice], value: &str) -> Option<&'static str> {
    choices.iter().find(|c| c.value == value).map(|c| c.label)
}
