//! Ministry-official step schemas.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

use super::{accepted, email, min_chars, min_entries, non_empty, phone};

/// Government office address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficeAddress {
    pub building_name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

impl OfficeAddress {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty("building_name", &self.building_name)?;
        non_empty("street", &self.street)?;
        non_empty("city", &self.city)?;
        non_empty("state", &self.state)?;
        min_chars("pincode", &self.pincode, 6)?;
        Ok(())
    }
}

/// The official's reporting officer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportingOfficer {
    pub name: String,
    pub designation: String,
    pub email: String,
}

/// Step 1 — the official's identity and posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficialDetails {
    pub full_name: String,
    pub official_email: String,
    pub phone_number: String,
    pub employee_id: String,
    pub designation: String,
    pub office_address: OfficeAddress,
    pub joining_date: String,
    pub reporting_officer: ReportingOfficer,
}

impl OfficialDetails {
    pub fn validate(&self) -> Result<(), ValidationError> {
        min_chars("full_name", &self.full_name, 2)?;
        email("official_email", &self.official_email)?;
        if !self.official_email.ends_with(".gov.in") && !self.official_email.ends_with(".nic.in") {
            return Err(ValidationError::Invalid {
                field: "official_email",
                message: "must be a government email address",
            });
        }
        min_chars("phone_number", &self.phone_number, 10)?;
        phone("phone_number", &self.phone_number)?;
        non_empty("employee_id", &self.employee_id)?;
        non_empty("designation", &self.designation)?;
        self.office_address.validate()?;
        non_empty("joining_date", &self.joining_date)?;
        non_empty("name", &self.reporting_officer.name)?;
        non_empty("designation", &self.reporting_officer.designation)?;
        email("email", &self.reporting_officer.email)?;
        Ok(())
    }
}

/// Step 2 — where the official sits in the hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentInformation {
    pub ministry_name: String,
    pub department_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_name: Option<String>,
    pub office_location: String,
    pub jurisdiction_area: Vec<String>,
    pub primary_responsibilities: Vec<String>,
    pub related_schemes: Vec<String>,
}

impl DepartmentInformation {
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_empty("ministry_name", &self.ministry_name)?;
        non_empty("department_name", &self.department_name)?;
        non_empty("office_location", &self.office_location)?;
        min_entries("jurisdiction_area", self.jurisdiction_area.len(), 1)?;
        min_entries(
            "primary_responsibilities",
            self.primary_responsibilities.len(),
            1,
        )?;
        Ok(())
    }
}

/// Platform access tier requested by the official.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    Viewer,
    Moderator,
    Administrator,
}

/// Functional areas the official needs access to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionAreas {
    pub student_data_access: bool,
    pub company_data_access: bool,
    pub report_generation: bool,
    pub policy_implementation: bool,
    pub compliance_monitoring: bool,
    pub grievance_handling: bool,
}

/// Step 3 — requested access scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessPermissions {
    pub access_level: AccessLevel,
    pub permission_areas: PermissionAreas,
    pub data_access_justification: String,
    pub supervision_scope: Vec<String>,
}

impl AccessPermissions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        min_chars(
            "data_access_justification",
            &self.data_access_justification,
            50,
        )?;
        min_entries("supervision_scope", self.supervision_scope.len(), 1)?;
        Ok(())
    }
}

/// Mandatory declarations an official accepts before activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficialDeclarations {
    pub government_employee: bool,
    pub authorized_access: bool,
    pub data_confidentiality: bool,
    pub ethical_use: bool,
    pub reporting_compliance: bool,
}

/// Step 4 — verification declarations and sign-off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationAuthorization {
    pub declarations: OfficialDeclarations,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digital_signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biometric_verification: Option<bool>,
}

impl VerificationAuthorization {
    pub fn validate(&self) -> Result<(), ValidationError> {
        accepted("government_employee", self.declarations.government_employee)?;
        accepted("authorized_access", self.declarations.authorized_access)?;
        accepted(
            "data_confidentiality",
            self.declarations.data_confidentiality,
        )?;
        accepted("ethical_use", self.declarations.ethical_use)?;
        accepted(
            "reporting_compliance",
            self.declarations.reporting_compliance,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;
    use crate::steps::StepRecord;

    fn official_details() -> OfficialDetails {
        OfficialDetails {
            full_name: "R. Srinivasan".to_string(),
            official_email: "r.srinivasan@meity.gov.in".to_string(),
            phone_number: "011 2301 2345".to_string(),
            employee_id: "MEITY-4521".to_string(),
            designation: "Under Secretary".to_string(),
            office_address: OfficeAddress {
                building_name: "Electronics Niketan".to_string(),
                street: "6 CGO Complex".to_string(),
                city: "New Delhi".to_string(),
                state: "Delhi".to_string(),
                pincode: "110003".to_string(),
            },
            joining_date: "2015-07-01".to_string(),
            reporting_officer: ReportingOfficer {
                name: "A. Mehta".to_string(),
                designation: "Joint Secretary".to_string(),
                email: "a.mehta@meity.gov.in".to_string(),
            },
        }
    }

    fn verification_authorization() -> VerificationAuthorization {
        VerificationAuthorization {
            declarations: OfficialDeclarations {
                government_employee: true,
                authorized_access: true,
                data_confidentiality: true,
                ethical_use: true,
                reporting_compliance: true,
            },
            digital_signature: None,
            biometric_verification: None,
        }
    }

    #[test]
    fn records_map_to_ministry_sequence() {
        let records = [
            StepRecord::OfficialDetails(official_details()),
            StepRecord::DepartmentInformation(DepartmentInformation {
                ministry_name: "Ministry of Electronics and IT".to_string(),
                department_name: "Internship Cell".to_string(),
                division_name: None,
                section_name: None,
                office_location: "New Delhi".to_string(),
                jurisdiction_area: vec!["National".to_string()],
                primary_responsibilities: vec!["Scheme oversight".to_string()],
                related_schemes: vec![],
            }),
            StepRecord::AccessPermissions(AccessPermissions {
                access_level: AccessLevel::Moderator,
                permission_areas: PermissionAreas {
                    student_data_access: true,
                    company_data_access: true,
                    report_generation: true,
                    policy_implementation: false,
                    compliance_monitoring: true,
                    grievance_handling: false,
                },
                data_access_justification:
                    "Reviewing company compliance and student grievances for the internship scheme."
                        .to_string(),
                supervision_scope: vec!["Western region".to_string()],
            }),
            StepRecord::VerificationAuthorization(verification_authorization()),
        ];

        for (index, record) in records.iter().enumerate() {
            assert_eq!(record.role(), Role::Ministry);
            assert_eq!(record.step_number() as usize, index + 1);
            assert_eq!(record.key(), Role::Ministry.steps()[index].key);
        }
    }

    #[test]
    fn official_email_must_be_government_domain() {
        assert!(official_details().validate().is_ok());

        let mut record = official_details();
        record.official_email = "r.srinivasan@gmail.com".to_string();
        assert!(matches!(
            record.validate(),
            Err(ValidationError::Invalid {
                field: "official_email",
                ..
            })
        ));
    }

    #[test]
    fn justification_minimum_length() {
        let record = AccessPermissions {
            access_level: AccessLevel::Viewer,
            permission_areas: PermissionAreas {
                student_data_access: false,
                company_data_access: false,
                report_generation: true,
                policy_implementation: false,
                compliance_monitoring: false,
                grievance_handling: false,
            },
            data_access_justification: "too short".to_string(),
            supervision_scope: vec!["reports".to_string()],
        };
        assert!(matches!(
            record.validate(),
            Err(ValidationError::TooShort {
                field: "data_access_justification",
                ..
            })
        ));
    }

    #[test]
    fn all_declarations_required() {
        assert!(verification_authorization().validate().is_ok());

        let mut record = verification_authorization();
        record.declarations.ethical_use = false;
        assert!(matches!(
            record.validate(),
            Err(ValidationError::DeclarationRequired {
                field: "ethical_use"
            })
        ));
    }
}
