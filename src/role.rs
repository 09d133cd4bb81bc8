//! Roles and their fixed step sequences.

use serde::{Deserialize, Serialize};

/// The closed set of onboarding roles.
///
/// A role is fixed for the lifetime of a session and selects which step
/// sequence and step schemas apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Company,
    Ministry,
}

/// One entry of a role's step sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInfo {
    /// 1-based position in the sequence.
    pub number: u32,
    /// Identifier under which the step's record is stored.
    pub key: &'static str,
    /// Display name for progress rendering.
    pub title: &'static str,
}

const STUDENT_STEPS: &[StepInfo] = &[
    StepInfo {
        number: 1,
        key: "basic_details",
        title: "Basic Details",
    },
    StepInfo {
        number: 2,
        key: "career_objectives",
        title: "Career Objectives",
    },
    StepInfo {
        number: 3,
        key: "projects_experience",
        title: "Projects & Experience",
    },
    StepInfo {
        number: 4,
        key: "internships",
        title: "Internships",
    },
    StepInfo {
        number: 5,
        key: "certifications",
        title: "Certifications",
    },
    StepInfo {
        number: 6,
        key: "preferences",
        title: "Preferences",
    },
];

const COMPANY_STEPS: &[StepInfo] = &[
    StepInfo {
        number: 1,
        key: "company_details",
        title: "Company Details",
    },
    StepInfo {
        number: 2,
        key: "company_profile",
        title: "Company Profile",
    },
    StepInfo {
        number: 3,
        key: "job_posting_preferences",
        title: "Job Posting Preferences",
    },
    StepInfo {
        number: 4,
        key: "team_information",
        title: "Team Information",
    },
    StepInfo {
        number: 5,
        key: "verification_documents",
        title: "Verification Documents",
    },
];

const MINISTRY_STEPS: &[StepInfo] = &[
    StepInfo {
        number: 1,
        key: "official_details",
        title: "Official Details",
    },
    StepInfo {
        number: 2,
        key: "department_information",
        title: "Department Information",
    },
    StepInfo {
        number: 3,
        key: "access_permissions",
        title: "Access Permissions",
    },
    StepInfo {
        number: 4,
        key: "verification_authorization",
        title: "Verification & Authorization",
    },
];

impl Role {
    /// The role's fixed, ordered step sequence.
    pub fn steps(&self) -> &'static [StepInfo] {
        match self {
            Self::Student => STUDENT_STEPS,
            Self::Company => COMPANY_STEPS,
            Self::Ministry => MINISTRY_STEPS,
        }
    }

    /// Number of steps in the role's sequence.
    pub fn total_steps(&self) -> u32 {
        self.steps().len() as u32
    }

    /// Look up a step by its 1-based number.
    pub fn step(&self, number: u32) -> Option<&'static StepInfo> {
        let index = number.checked_sub(1)? as usize;
        self.steps().get(index)
    }

    /// Durable key under which this role's progress snapshot lives.
    pub fn storage_key(&self) -> String {
        format!("onboarding-{self}")
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Student => "student",
            Self::Company => "company",
            Self::Ministry => "ministry",
        };
        write!(f, "{s}")
    }
}
