//! Wizard session state and its durable snapshot projection.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::role::Role;
use crate::steps::StepRecord;

/// In-memory state of one onboarding attempt.
///
/// Owned exclusively by a [`Wizard`](crate::wizard::Wizard) for the session's
/// lifetime; step UIs only ever see it through the wizard's read accessors.
/// `current_step` stays within `1..=total_steps` across every operation.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardSession {
    /// Role being onboarded. Immutable for the session's lifetime.
    pub role: Role,
    /// Length of the role's step sequence, fixed at creation.
    pub total_steps: u32,
    /// Current position in the sequence.
    pub current_step: u32,
    /// Steps already advanced past.
    pub completed_steps: BTreeSet<u32>,
    /// Collected per-step records, keyed by step identifier.
    pub step_data: BTreeMap<String, StepRecord>,
    /// True only while the terminal submission is in flight.
    pub is_submitting: bool,
}

impl WizardSession {
    /// Fresh session at step 1 with no collected data.
    pub fn new(role: Role) -> Self {
        Self::with_initial_data(role, BTreeMap::new())
    }

    /// Fresh session seeded with pre-filled step records.
    pub fn with_initial_data(role: Role, initial_data: BTreeMap<String, StepRecord>) -> Self {
        Self {
            role,
            total_steps: role.total_steps(),
            current_step: 1,
            completed_steps: BTreeSet::new(),
            step_data: initial_data,
            is_submitting: false,
        }
    }

    /// Apply a persisted snapshot on top of this session (resume).
    ///
    /// The snapshot's step and completed set overwrite the session's;
    /// snapshot data wins per key over whatever the session already holds.
    /// Out-of-range positions in a stale snapshot are discarded so the
    /// step-range invariant survives a resume.
    pub fn apply_snapshot(&mut self, snapshot: PersistedSnapshot) {
        if (1..=self.total_steps).contains(&snapshot.step) {
            self.current_step = snapshot.step;
        }
        self.completed_steps = snapshot
            .completed
            .into_iter()
            .filter(|step| (1..=self.total_steps).contains(step))
            .collect();
        for (key, record) in snapshot.data {
            self.step_data.insert(key, record);
        }
    }

    /// Project the durable snapshot of the current state.
    pub fn snapshot(&self) -> PersistedSnapshot {
        PersistedSnapshot {
            step: self.current_step,
            data: self.step_data.clone(),
            completed: self.completed_steps.iter().copied().collect(),
            timestamp: Utc::now(),
        }
    }
}

/// Durable projection of a session, written under the role's
/// `onboarding-{role}` key.
///
/// Field names are the storage contract; changing them orphans every
/// in-flight session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedSnapshot {
    /// Step the session resumes at.
    pub step: u32,
    /// Per-step records collected so far.
    pub data: BTreeMap<String, StepRecord>,
    /// Steps advanced past before this write.
    pub completed: Vec<u32>,
    /// When the snapshot was written.
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::student::{BasicDetails, EducationLevel};

    fn basic_details(name: &str) -> StepRecord {
        StepRecord::BasicDetails(BasicDetails {
            full_name: name.to_string(),
            email: "s@example.com".to_string(),
            phone_number: "9876543210".to_string(),
            location: "Pune".to_string(),
            education_level: EducationLevel::Bachelors,
            bio: None,
        })
    }

    #[test]
    fn fresh_session_defaults() {
        let session = WizardSession::new(Role::Student);
        assert_eq!(session.total_steps, 6);
        assert_eq!(session.current_step, 1);
        assert!(session.completed_steps.is_empty());
        assert!(session.step_data.is_empty());
        assert!(!session.is_submitting);
    }

    #[test]
    fn snapshot_round_trip() {
        let mut session = WizardSession::new(Role::Ministry);
        session.current_step = 3;
        session.completed_steps = BTreeSet::from([1, 2]);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.step, 3);
        assert_eq!(snapshot.completed, vec![1, 2]);

        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: PersistedSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn snapshot_json_uses_contract_field_names() {
        let snapshot = WizardSession::new(Role::Student).snapshot();
        let json = serde_json::to_value(&snapshot).unwrap();
        for field in ["step", "data", "completed", "timestamp"] {
            assert!(json.get(field).is_some(), "missing {field}");
        }
    }

    #[test]
    fn apply_snapshot_overwrites_position_and_merges_data() {
        let mut session = WizardSession::with_initial_data(
            Role::Student,
            BTreeMap::from([("basic_details".to_string(), basic_details("Seeded"))]),
        );

        let snapshot = PersistedSnapshot {
            step: 3,
            data: BTreeMap::from([("basic_details".to_string(), basic_details("Saved"))]),
            completed: vec![1, 2],
            timestamp: Utc::now(),
        };
        session.apply_snapshot(snapshot);

        assert_eq!(session.current_step, 3);
        assert_eq!(session.completed_steps, BTreeSet::from([1, 2]));
        // Snapshot wins over the seed for the same key.
        assert_eq!(session.step_data["basic_details"], basic_details("Saved"));
    }

    #[test]
    fn apply_snapshot_keeps_unrelated_initial_data() {
        let mut session = WizardSession::with_initial_data(
            Role::Student,
            BTreeMap::from([("basic_details".to_string(), basic_details("Seeded"))]),
        );

        let snapshot = PersistedSnapshot {
            step: 2,
            data: BTreeMap::new(),
            completed: vec![1],
            timestamp: Utc::now(),
        };
        session.apply_snapshot(snapshot);

        assert_eq!(session.step_data["basic_details"], basic_details("Seeded"));
    }

    #[test]
    fn apply_snapshot_discards_out_of_range_positions() {
        let mut session = WizardSession::new(Role::Ministry);

        let snapshot = PersistedSnapshot {
            step: 9,
            data: BTreeMap::new(),
            completed: vec![1, 2, 9],
            timestamp: Utc::now(),
        };
        session.apply_snapshot(snapshot);

        assert_eq!(session.current_step, 1);
        assert_eq!(session.completed_steps, BTreeSet::from([1, 2]));
    }
}
