//! Typed per-step records.
//!
//! Each onboarding step stores its collected form data as one variant of
//! [`StepRecord`]. The variant carries the step identity, so a record can
//! only ever be filed under its own step key — cross-step reads cannot
//! desynchronize from what the step actually wrote.
//!
//! Validation is the step UI's responsibility: the wizard store accepts any
//! record as-is, and the UI calls [`StepRecord::validate`] before handing
//! the record over.

pub mod collection;
pub mod company;
pub mod ministry;
pub mod student;

pub use collection::EntryList;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::role::Role;

/// One step's collected record, tagged by step.
///
/// The serde `kind` tag equals the step key, so persisted snapshots stay
/// self-describing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepRecord {
    // Student sequence
    BasicDetails(student::BasicDetails),
    CareerObjectives(student::CareerObjectives),
    ProjectsExperience(student::ProjectsExperience),
    Internships(student::Internships),
    Certifications(student::Certifications),
    Preferences(student::Preferences),

    // Company sequence
    CompanyDetails(company::CompanyDetails),
    CompanyProfile(company::CompanyProfile),
    JobPostingPreferences(company::JobPostingPreferences),
    TeamInformation(company::TeamInformation),
    VerificationDocuments(company::VerificationDocuments),

    // Ministry sequence
    OfficialDetails(ministry::OfficialDetails),
    DepartmentInformation(ministry::DepartmentInformation),
    AccessPermissions(ministry::AccessPermissions),
    VerificationAuthorization(ministry::VerificationAuthorization),
}

impl StepRecord {
    /// Step identifier this record is stored under.
    pub fn key(&self) -> &'static str {
        match self {
            Self::BasicDetails(_) => "basic_details",
            Self::CareerObjectives(_) => "career_objectives",
            Self::ProjectsExperience(_) => "projects_experience",
            Self::Internships(_) => "internships",
            Self::Certifications(_) => "certifications",
            Self::Preferences(_) => "preferences",
            Self::CompanyDetails(_) => "company_details",
            Self::CompanyProfile(_) => "company_profile",
            Self::JobPostingPreferences(_) => "job_posting_preferences",
            Self::TeamInformation(_) => "team_information",
            Self::VerificationDocuments(_) => "verification_documents",
            Self::OfficialDetails(_) => "official_details",
            Self::DepartmentInformation(_) => "department_information",
            Self::AccessPermissions(_) => "access_permissions",
            Self::VerificationAuthorization(_) => "verification_authorization",
        }
    }

    /// Role whose step sequence owns this record.
    pub fn role(&self) -> Role {
        match self {
            Self::BasicDetails(_)
            | Self::CareerObjectives(_)
            | Self::ProjectsExperience(_)
            | Self::Internships(_)
            | Self::Certifications(_)
            | Self::Preferences(_) => Role::Student,
            Self::CompanyDetails(_)
            | Self::CompanyProfile(_)
            | Self::JobPostingPreferences(_)
            | Self::TeamInformation(_)
            | Self::VerificationDocuments(_) => Role::Company,
            Self::OfficialDetails(_)
            | Self::DepartmentInformation(_)
            | Self::AccessPermissions(_)
            | Self::VerificationAuthorization(_) => Role::Ministry,
        }
    }

    /// 1-based position of this step within the owning role's sequence.
    pub fn step_number(&self) -> u32 {
        let key = self.key();
        self.role()
            .steps()
            .iter()
            .find(|step| step.key == key)
            .map(|step| step.number)
            .expect("record key registered in its role's step table")
    }

    /// Check the record against its step's schema rules.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::BasicDetails(r) => r.validate(),
            Self::CareerObjectives(r) => r.validate(),
            Self::ProjectsExperience(r) => r.validate(),
            Self::Internships(r) => r.validate(),
            Self::Certifications(r) => r.validate(),
            Self::Preferences(r) => r.validate(),
            Self::CompanyDetails(r) => r.validate(),
            Self::CompanyProfile(r) => r.validate(),
            Self::JobPostingPreferences(r) => r.validate(),
            Self::TeamInformation(r) => r.validate(),
            Self::VerificationDocuments(r) => r.validate(),
            Self::OfficialDetails(r) => r.validate(),
            Self::DepartmentInformation(r) => r.validate(),
            Self::AccessPermissions(r) => r.validate(),
            Self::VerificationAuthorization(r) => r.validate(),
        }
    }
}

// ── Field rules ─────────────────────────────────────────────────────

pub(crate) fn non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(())
}

pub(crate) fn min_chars(
    field: &'static str,
    value: &str,
    min: usize,
) -> Result<(), ValidationError> {
    if value.trim().chars().count() < min {
        return Err(ValidationError::TooShort { field, min });
    }
    Ok(())
}

pub(crate) fn max_chars(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

pub(crate) fn min_entries(
    field: &'static str,
    len: usize,
    min: usize,
) -> Result<(), ValidationError> {
    if len < min {
        return Err(ValidationError::TooFew { field, min });
    }
    Ok(())
}

pub(crate) fn max_entries(
    field: &'static str,
    len: usize,
    max: usize,
) -> Result<(), ValidationError> {
    if len > max {
        return Err(ValidationError::TooMany { field, max });
    }
    Ok(())
}

pub(crate) fn email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    };
    if !valid {
        return Err(ValidationError::Invalid {
            field,
            message: "not an email address",
        });
    }
    Ok(())
}

pub(crate) fn phone(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let pattern = Regex::new(r"^\+?[\d\s()-]+$").unwrap();
    if !pattern.is_match(value) {
        return Err(ValidationError::Invalid {
            field,
            message: "not a phone number",
        });
    }
    Ok(())
}

/// URL rule for optional link fields; empty strings are treated as unset.
pub(crate) fn url(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    if !value.starts_with("http://") && !value.starts_with("https://") {
        return Err(ValidationError::Invalid {
            field,
            message: "not a URL",
        });
    }
    Ok(())
}

pub(crate) fn accepted(field: &'static str, value: bool) -> Result<(), ValidationError> {
    if !value {
        return Err(ValidationError::DeclarationRequired { field });
    }
    Ok(())
}
