//! Student step schemas.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

use super::{email, max_chars, max_entries, min_chars, min_entries, non_empty, phone};

/// Highest education level attained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    HighSchool,
    Bachelors,
    Masters,
    Phd,
}

/// Step 1 — identity and contact details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicDetails {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub location: String,
    pub education_level: EducationLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl BasicDetails {
    pub fn validate(&self) -> Result<(), ValidationError> {
        min_chars("full_name", &self.full_name, 2)?;
        email("email", &self.email)?;
        phone("phone_number", &self.phone_number)?;
        min_chars("location", &self.location, 2)?;
        if let Some(bio) = &self.bio {
            max_chars("bio", bio, 300)?;
        }
        Ok(())
    }
}

/// Preferred engagement for an internship preference entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Engagement {
    PartTime,
    FullTime,
    Remote,
}

/// One desired internship field/location pairing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternshipPreference {
    pub field: String,
    pub location: String,
    pub engagement: Engagement,
}

/// Preferred weekly work schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkSchedule {
    Flexible,
    Standard,
    Weekends,
}

/// Step 2 — career goals and target internships.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerObjectives {
    pub career_goals: String,
    pub internship_preferences: Vec<InternshipPreference>,
    pub skills: Vec<String>,
    pub preferred_work_schedule: WorkSchedule,
    pub career_interests: Vec<String>,
}

impl CareerObjectives {
    pub fn validate(&self) -> Result<(), ValidationError> {
        min_chars("career_goals", &self.career_goals, 10)?;
        max_chars("career_goals", &self.career_goals, 500)?;
        min_entries(
            "internship_preferences",
            self.internship_preferences.len(),
            1,
        )?;
        for preference in &self.internship_preferences {
            non_empty("field", &preference.field)?;
            non_empty("location", &preference.location)?;
        }
        min_entries("skills", self.skills.len(), 1)?;
        min_entries("career_interests", self.career_interests.len(), 1)?;
        Ok(())
    }
}

/// A personal or academic project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    pub skills_used: Vec<String>,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl Project {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty("title", &self.title)?;
        max_chars("description", &self.description, 300)?;
        if let Some(link) = &self.live_link {
            super::url("live_link", link)?;
        }
        if let Some(link) = &self.github_link {
            super::url("github_link", link)?;
        }
        min_entries("skills_used", self.skills_used.len(), 1)?;
        non_empty("start_date", &self.start_date)?;
        Ok(())
    }
}

/// A prior (non-internship) work engagement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub company_name: String,
    pub title: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub currently_working: bool,
    pub description: String,
    pub skills: Vec<String>,
}

impl WorkExperience {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty("company_name", &self.company_name)?;
        non_empty("title", &self.title)?;
        non_empty("start_date", &self.start_date)?;
        max_chars("description", &self.description, 300)?;
        min_entries("skills", self.skills.len(), 1)?;
        Ok(())
    }
}

/// Step 3 — projects and work experience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectsExperience {
    pub projects: Vec<Project>,
    pub work_experience: Vec<WorkExperience>,
}

impl ProjectsExperience {
    pub fn validate(&self) -> Result<(), ValidationError> {
        for project in &self.projects {
            project.validate()?;
        }
        for experience in &self.work_experience {
            experience.validate()?;
        }
        Ok(())
    }
}

/// One past or current internship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternshipEntry {
    pub company_name: String,
    pub position: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub currently_working: bool,
    pub description: String,
    pub achievements: Vec<String>,
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stipend: Option<u32>,
    pub certificate_earned: bool,
}

impl InternshipEntry {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty("company_name", &self.company_name)?;
        non_empty("position", &self.position)?;
        non_empty("start_date", &self.start_date)?;
        max_chars("description", &self.description, 300)?;
        min_entries("skills", self.skills.len(), 1)?;
        Ok(())
    }
}

/// Step 4 — internship history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Internships {
    pub internships: Vec<InternshipEntry>,
}

impl Internships {
    pub fn validate(&self) -> Result<(), ValidationError> {
        for internship in &self.internships {
            internship.validate()?;
        }
        Ok(())
    }
}

/// A certification credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuing_organization: String,
    pub date_earned: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
}

/// Category of a recognized achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    Academic,
    Professional,
    Personal,
}

/// A notable achievement outside formal certification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub date_received: String,
    pub category: AchievementCategory,
}

/// Step 5 — certifications and achievements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certifications {
    pub certifications: Vec<Certification>,
    pub achievements: Vec<Achievement>,
}

impl Certifications {
    pub fn validate(&self) -> Result<(), ValidationError> {
        for certification in &self.certifications {
            non_empty("name", &certification.name)?;
            non_empty("issuing_organization", &certification.issuing_organization)?;
            non_empty("date_earned", &certification.date_earned)?;
            if let Some(link) = &certification.credential_url {
                super::url("credential_url", link)?;
            }
        }
        for achievement in &self.achievements {
            non_empty("title", &achievement.title)?;
            non_empty("description", &achievement.description)?;
            non_empty("date_received", &achievement.date_received)?;
        }
        Ok(())
    }
}

/// Workplace environment aspects the student values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkEnvironment {
    pub clear_responsibilities: bool,
    pub versatile_assignments: bool,
    pub team_collaboration: bool,
    pub independent_work: bool,
}

/// Supported stipend currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Inr,
    Usd,
    Eur,
}

/// Expected stipend range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub minimum: u32,
    pub maximum: u32,
    pub currency: Currency,
}

/// Company size the student prefers to intern at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanySizePreference {
    Startup,
    Medium,
    Large,
    Any,
}

/// Step 6 — matching preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub preferred_technologies: Vec<String>,
    pub unwilling_technologies: Vec<String>,
    pub motivators: Vec<String>,
    pub open_to_remote: bool,
    pub work_environment: WorkEnvironment,
    pub salary_expectations: SalaryRange,
    pub available_start_date: String,
    pub willing_to_relocate: bool,
    pub preferred_company_size: CompanySizePreference,
}

impl Preferences {
    pub fn validate(&self) -> Result<(), ValidationError> {
        max_entries("preferred_technologies", self.preferred_technologies.len(), 5)?;
        max_entries("unwilling_technologies", self.unwilling_technologies.len(), 5)?;
        min_entries("motivators", self.motivators.len(), 1)?;
        max_entries("motivators", self.motivators.len(), 3)?;
        if self.salary_expectations.minimum > self.salary_expectations.maximum {
            return Err(ValidationError::Invalid {
                field: "salary_expectations",
                message: "minimum exceeds maximum",
            });
        }
        non_empty("available_start_date", &self.available_start_date)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;
    use crate::steps::StepRecord;

    fn basic_details() -> BasicDetails {
        BasicDetails {
            full_name: "Asha Verma".to_string(),
            email: "asha@example.com".to_string(),
            phone_number: "+91 98765 43210".to_string(),
            location: "Pune".to_string(),
            education_level: EducationLevel::Bachelors,
            bio: None,
        }
    }

    fn career_objectives() -> CareerObjectives {
        CareerObjectives {
            career_goals: "Build backend systems at scale".to_string(),
            internship_preferences: vec![InternshipPreference {
                field: "Software Engineering".to_string(),
                location: "Bengaluru".to_string(),
                engagement: Engagement::FullTime,
            }],
            skills: vec!["Rust".to_string()],
            preferred_work_schedule: WorkSchedule::Flexible,
            career_interests: vec!["Distributed systems".to_string()],
        }
    }

    fn preferences() -> Preferences {
        Preferences {
            preferred_technologies: vec!["Rust".to_string(), "Postgres".to_string()],
            unwilling_technologies: vec![],
            motivators: vec!["learning".to_string()],
            open_to_remote: true,
            work_environment: WorkEnvironment {
                clear_responsibilities: true,
                versatile_assignments: false,
                team_collaboration: true,
                independent_work: false,
            },
            salary_expectations: SalaryRange {
                minimum: 10_000,
                maximum: 25_000,
                currency: Currency::Inr,
            },
            available_start_date: "2026-06-01".to_string(),
            willing_to_relocate: false,
            preferred_company_size: CompanySizePreference::Any,
        }
    }

    #[test]
    fn records_map_to_student_sequence() {
        let records = [
            StepRecord::BasicDetails(basic_details()),
            StepRecord::CareerObjectives(career_objectives()),
            StepRecord::ProjectsExperience(ProjectsExperience {
                projects: vec![],
                work_experience: vec![],
            }),
            StepRecord::Internships(Internships {
                internships: vec![],
            }),
            StepRecord::Certifications(Certifications {
                certifications: vec![],
                achievements: vec![],
            }),
            StepRecord::Preferences(preferences()),
        ];

        for (index, record) in records.iter().enumerate() {
            assert_eq!(record.role(), Role::Student);
            assert_eq!(record.step_number() as usize, index + 1);
            let expected = Role::Student.steps()[index].key;
            assert_eq!(record.key(), expected);
        }
    }

    #[test]
    fn basic_details_validation() {
        assert!(basic_details().validate().is_ok());

        let mut record = basic_details();
        record.full_name = "A".to_string();
        assert!(matches!(
            record.validate(),
            Err(ValidationError::TooShort {
                field: "full_name",
                ..
            })
        ));

        let mut record = basic_details();
        record.email = "not-an-email".to_string();
        assert!(record.validate().is_err());

        let mut record = basic_details();
        record.bio = Some("x".repeat(301));
        assert!(matches!(
            record.validate(),
            Err(ValidationError::TooLong { field: "bio", .. })
        ));
    }

    #[test]
    fn career_objectives_validation() {
        assert!(career_objectives().validate().is_ok());

        let mut record = career_objectives();
        record.career_goals = "too short".to_string();
        assert!(record.validate().is_err());

        let mut record = career_objectives();
        record.internship_preferences.clear();
        assert!(matches!(
            record.validate(),
            Err(ValidationError::TooFew {
                field: "internship_preferences",
                ..
            })
        ));
    }

    #[test]
    fn preferences_validation() {
        assert!(preferences().validate().is_ok());

        let mut record = preferences();
        record.motivators = vec!["a".into(), "b".into(), "c".into(), "d".into()];
        assert!(matches!(
            record.validate(),
            Err(ValidationError::TooMany {
                field: "motivators",
                ..
            })
        ));

        let mut record = preferences();
        record.salary_expectations.minimum = 50_000;
        assert!(matches!(
            record.validate(),
            Err(ValidationError::Invalid {
                field: "salary_expectations",
                ..
            })
        ));
    }

    #[test]
    fn preferences_serde_roundtrip() {
        let record = StepRecord::Preferences(preferences());
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"kind\":\"preferences\""));
        assert!(json.contains("\"currency\":\"INR\""));

        let parsed: StepRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn project_link_rules() {
        let record = ProjectsExperience {
            projects: vec![Project {
                title: "Course planner".to_string(),
                description: "Semester planning tool".to_string(),
                live_link: Some("ftp://nope".to_string()),
                github_link: None,
                skills_used: vec!["React".to_string()],
                start_date: "2025-01".to_string(),
                end_date: None,
            }],
            work_experience: vec![],
        };
        assert!(matches!(
            record.validate(),
            Err(ValidationError::Invalid {
                field: "live_link",
                ..
            })
        ));
    }
}
