//! Intake session step machine.
//!
//! Login → Application → ExistingLoans → Complete, in that order only.
//! The session owns the applicant's submitted application so the
//! disclosure step can source the name from it.

use tracing::info;

use crate::application::ApplicationForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeStep {
    Login,
    Application,
    ExistingLoans,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub mode: AuthMode,
    /// Email or phone.
    pub identifier: String,
    pub password: String,
    /// Signup only.
    pub full_name: String,
    pub confirm_password: String,
}

#[derive(Debug)]
pub struct IntakeSession {
    step: IntakeStep,
    application: Option<ApplicationForm>,
}

impl IntakeSession {
    pub fn new() -> Self {
        Self {
            step: IntakeStep::Login,
            application: None,
        }
    }

    pub fn step(&self) -> IntakeStep {
        self.step
    }

    /// Name captured on the application step, empty until then.
    pub fn applicant_name(&self) -> &str {
        self.application
            .as_ref()
            .map(|form| form.full_name.as_str())
            .unwrap_or("")
    }

    pub fn login(&mut self, credentials: &Credentials) -> Result<(), &'static str> {
        if self.step != IntakeStep::Login {
            return Err("Already logged in");
        }
        if credentials.identifier.is_empty() || credentials.password.is_empty() {
            return Err("Please enter email/phone and password");
        }
        if credentials.mode == AuthMode::Signup {
            if credentials.full_name.is_empty() {
                return Err("Please enter your full name");
            }
            if credentials.confirm_password != credentials.password {
                return Err("Passwords do not match");
            }
        }
        info!("Applicant authenticated");
        self.step = IntakeStep::Application;
        Ok(())
    }

    /// Store the validated application and advance to the disclosure step.
    pub fn submit_application(&mut self, form: ApplicationForm) -> Result<(), &'static str> {
        if self.step != IntakeStep::Application {
            return Err("Not on the application step");
        }
        form.validate()?;
        self.application = Some(form);
        self.step = IntakeStep::ExistingLoans;
        Ok(())
    }

    /// Called once the disclosure step allowed the applicant through.
    pub fn complete(&mut self) {
        self.step = IntakeStep::Complete;
    }
}

impl Default for IntakeSession {
    fn default() -> Self {
        Self::new()
    }
}
