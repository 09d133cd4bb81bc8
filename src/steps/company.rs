//! Company step schemas.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

use super::{accepted, email, max_chars, max_entries, min_chars, min_entries, non_empty, phone, url};

/// Registered head-office address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pincode: String,
}

impl Address {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty("street", &self.street)?;
        non_empty("city", &self.city)?;
        non_empty("state", &self.state)?;
        non_empty("country", &self.country)?;
        if self.pincode.len() != 6 || !self.pincode.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::Invalid {
                field: "pincode",
                message: "must be 6 digits",
            });
        }
        Ok(())
    }
}

/// Employee head-count band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanySize {
    #[serde(rename = "1-10")]
    Micro,
    #[serde(rename = "11-50")]
    Small,
    #[serde(rename = "51-200")]
    Medium,
    #[serde(rename = "201-1000")]
    Large,
    #[serde(rename = "1000+")]
    Enterprise,
}

/// Legal organization category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyType {
    Startup,
    Private,
    Public,
    Government,
    Ngo,
}

/// Step 1 — legal and contact details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyDetails {
    pub company_name: String,
    pub company_email: String,
    pub website: String,
    pub phone_number: String,
    pub registration_number: String,
    pub founded_year: u32,
    pub head_office: Address,
    pub company_size: CompanySize,
    pub industry: String,
    pub company_type: CompanyType,
}

impl CompanyDetails {
    pub fn validate(&self) -> Result<(), ValidationError> {
        min_chars("company_name", &self.company_name, 2)?;
        email("company_email", &self.company_email)?;
        if self.website.is_empty() {
            return Err(ValidationError::Required { field: "website" });
        }
        url("website", &self.website)?;
        phone("phone_number", &self.phone_number)?;
        non_empty("registration_number", &self.registration_number)?;
        let current_year = Utc::now().year() as u32;
        if self.founded_year < 1800 || self.founded_year > current_year {
            return Err(ValidationError::Invalid {
                field: "founded_year",
                message: "outside the plausible range",
            });
        }
        self.head_office.validate()?;
        non_empty("industry", &self.industry)?;
        Ok(())
    }
}

/// Public social-media handles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialMediaLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

impl SocialMediaLinks {
    fn validate(&self) -> Result<(), ValidationError> {
        for (field, link) in [
            ("linkedin", &self.linkedin),
            ("twitter", &self.twitter),
            ("facebook", &self.facebook),
            ("instagram", &self.instagram),
        ] {
            if let Some(link) = link {
                url(field, link)?;
            }
        }
        Ok(())
    }
}

/// Step 2 — narrative profile and culture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vision: Option<String>,
    pub core_values: Vec<String>,
    pub work_culture: Vec<String>,
    pub benefits: Vec<String>,
    pub social_media: SocialMediaLinks,
}

impl CompanyProfile {
    pub fn validate(&self) -> Result<(), ValidationError> {
        min_chars("description", &self.description, 50)?;
        max_chars("description", &self.description, 1000)?;
        if let Some(mission) = &self.mission {
            max_chars("mission", mission, 500)?;
        }
        if let Some(vision) = &self.vision {
            max_chars("vision", vision, 500)?;
        }
        max_entries("core_values", self.core_values.len(), 5)?;
        min_entries("work_culture", self.work_culture.len(), 1)?;
        min_entries("benefits", self.benefits.len(), 1)?;
        self.social_media.validate()?;
        Ok(())
    }
}

/// Compensation model offered to interns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InternshipOffering {
    Paid,
    Unpaid,
    Stipend,
    FullTimeOffer,
}

/// Where the work happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkMode {
    Remote,
    Hybrid,
    OnSite,
}

/// Step 3 — what the company typically posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPostingPreferences {
    pub typical_roles: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub internship_types: Vec<InternshipOffering>,
    pub work_modes: Vec<WorkMode>,
    pub preferred_education_levels: Vec<super::student::EducationLevel>,
    pub average_internship_duration: String,
    pub mentorship_program: bool,
    pub certification_offered: bool,
    pub hiring_seasons: Vec<String>,
}

impl JobPostingPreferences {
    pub fn validate(&self) -> Result<(), ValidationError> {
        min_entries("typical_roles", self.typical_roles.len(), 1)?;
        min_entries("preferred_skills", self.preferred_skills.len(), 1)?;
        min_entries("internship_types", self.internship_types.len(), 1)?;
        min_entries("work_modes", self.work_modes.len(), 1)?;
        min_entries(
            "preferred_education_levels",
            self.preferred_education_levels.len(),
            1,
        )?;
        non_empty(
            "average_internship_duration",
            &self.average_internship_duration,
        )?;
        min_entries("hiring_seasons", self.hiring_seasons.len(), 1)?;
        Ok(())
    }
}

/// An HR point of contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HrContact {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_profile: Option<String>,
}

/// A technical point of contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalContact {
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
}

/// The company's authorized representative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Representative {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub designation: String,
    pub years_with_company: u32,
}

/// Step 4 — who interns will work with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamInformation {
    pub hr_contacts: Vec<HrContact>,
    pub technical_contacts: Vec<TechnicalContact>,
    pub representative: Representative,
}

impl TeamInformation {
    pub fn validate(&self) -> Result<(), ValidationError> {
        max_entries("hr_contacts", self.hr_contacts.len(), 3)?;
        for contact in &self.hr_contacts {
            non_empty("name", &contact.name)?;
            email("email", &contact.email)?;
            min_chars("phone_number", &contact.phone_number, 10)?;
            non_empty("role", &contact.role)?;
            if let Some(link) = &contact.linkedin_profile {
                url("linkedin_profile", link)?;
            }
        }
        max_entries("technical_contacts", self.technical_contacts.len(), 3)?;
        for contact in &self.technical_contacts {
            non_empty("name", &contact.name)?;
            email("email", &contact.email)?;
            non_empty("role", &contact.role)?;
            non_empty("department", &contact.department)?;
        }
        non_empty("name", &self.representative.name)?;
        email("email", &self.representative.email)?;
        min_chars("phone_number", &self.representative.phone_number, 10)?;
        non_empty("designation", &self.representative.designation)?;
        Ok(())
    }
}

/// Mandatory declarations a company accepts before posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyDeclarations {
    pub genuine_company: bool,
    pub follow_labor_laws: bool,
    pub provide_stipend: bool,
    pub no_discrimination: bool,
    pub data_protection: bool,
}

/// Step 5 — verification declarations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationDocuments {
    pub declarations: CompanyDeclarations,
}

impl VerificationDocuments {
    pub fn validate(&self) -> Result<(), ValidationError> {
        accepted("genuine_company", self.declarations.genuine_company)?;
        accepted("follow_labor_laws", self.declarations.follow_labor_laws)?;
        accepted("provide_stipend", self.declarations.provide_stipend)?;
        accepted("no_discrimination", self.declarations.no_discrimination)?;
        accepted("data_protection", self.declarations.data_protection)?;
        Ok(())
    }
}
