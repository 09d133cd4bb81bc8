//! Wizard state store — single source of truth for one onboarding session.
//!
//! Composes the pure sequencer with the progress store and the submission
//! sink. Step UIs call the mutators here; everything they render comes back
//! out through the read accessors.
//!
//! Persistence cadence: forward transitions checkpoint before returning, so
//! a resumed session is never ahead of its last successful write. Backward
//! navigation is deliberately not durable — refreshing after going back
//! resumes at the last forward checkpoint.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::SubmitError;
use crate::role::Role;
use crate::sequencer;
use crate::session::WizardSession;
use crate::steps::StepRecord;
use crate::store::ProgressStore;
use crate::submit::SubmissionSink;

/// One mounted onboarding wizard.
pub struct Wizard {
    session: WizardSession,
    store: Arc<dyn ProgressStore>,
    sink: Arc<dyn SubmissionSink>,
    session_id: Uuid,
    /// Gates explicit `save()` until the first forward transition, so a
    /// session that was merely opened never persists pre-interaction state.
    advanced_once: bool,
}

impl Wizard {
    /// Construct a session for `role` and resume any persisted progress.
    ///
    /// `initial_data` seeds the step records; a found snapshot overwrites
    /// the position and wins per key over the seed. A corrupt or unreadable
    /// snapshot is discarded with a diagnostic and the fresh session is
    /// kept.
    pub async fn initialize(
        role: Role,
        initial_data: BTreeMap<String, StepRecord>,
        store: Arc<dyn ProgressStore>,
        sink: Arc<dyn SubmissionSink>,
    ) -> Self {
        let session_id = Uuid::new_v4();
        let mut session = WizardSession::with_initial_data(role, initial_data);

        match store.load(role).await {
            Ok(Some(snapshot)) => {
                session.apply_snapshot(snapshot);
                debug!(
                    session = %session_id,
                    role = %role,
                    step = session.current_step,
                    "Resumed onboarding from saved progress"
                );
            }
            Ok(None) => {}
            Err(e) => {
                warn!(session = %session_id, role = %role, "Failed to load onboarding progress: {e}");
            }
        }

        Self {
            session,
            store,
            sink,
            session_id,
            advanced_once: false,
        }
    }

    // ── Read accessors ──────────────────────────────────────────────

    pub fn role(&self) -> Role {
        self.session.role
    }

    pub fn current_step(&self) -> u32 {
        self.session.current_step
    }

    pub fn total_steps(&self) -> u32 {
        self.session.total_steps
    }

    pub fn completed_steps(&self) -> &std::collections::BTreeSet<u32> {
        &self.session.completed_steps
    }

    /// Read-only view of the collected records.
    pub fn step_data(&self) -> &BTreeMap<String, StepRecord> {
        &self.session.step_data
    }

    /// The record collected for one step, if any.
    pub fn step_record(&self, key: &str) -> Option<&StepRecord> {
        self.session.step_data.get(key)
    }

    pub fn is_submitting(&self) -> bool {
        self.session.is_submitting
    }

    /// The full session, for progress rendering.
    pub fn session(&self) -> &WizardSession {
        &self.session
    }

    /// Whether the final step has been reached and completed.
    pub fn is_complete(&self) -> bool {
        sequencer::is_complete(&self.session)
    }

    // ── Mutators ────────────────────────────────────────────────────

    /// Replace the record for the step the record itself identifies.
    ///
    /// No validation and no persistence happen here; the step UI validates
    /// before calling, and durability comes from the next forward
    /// transition or explicit `save()`.
    pub fn update_step(&mut self, record: StepRecord) {
        self.session
            .step_data
            .insert(record.key().to_string(), record);
    }

    /// Move forward one step and checkpoint the new state.
    ///
    /// No-op at the final step. The checkpoint is written before this
    /// returns; a write failure is absorbed (progress stays in memory).
    pub async fn advance(&mut self) {
        if self.session.current_step >= self.session.total_steps {
            return;
        }
        self.session = sequencer::advanced(&self.session);
        self.advanced_once = true;
        self.persist().await;
    }

    /// Move back one step. No-op at step 1; never persists.
    pub fn retreat(&mut self) {
        self.session = sequencer::retreated(&self.session);
    }

    /// Jump directly to `step` (progress-indicator navigation).
    ///
    /// Out-of-range targets are silently ignored; never persists.
    pub fn jump_to(&mut self, step: u32) {
        self.session = sequencer::jumped(&self.session, step);
    }

    /// Explicitly checkpoint the session.
    ///
    /// Silent no-op until the first `advance()` of this mount, so default
    /// state never shadows a meaningful saved snapshot. Write failures are
    /// absorbed.
    pub async fn save(&self) {
        if !self.advanced_once {
            return;
        }
        self.persist().await;
    }

    /// Finish the session: hand the collected data off, mark every step
    /// completed, and drop the persisted snapshot.
    ///
    /// On submission failure the session stays exactly as it was (with
    /// `is_submitting` reset) and the error propagates so the caller can
    /// offer a retry.
    pub async fn complete(&mut self) -> Result<(), SubmitError> {
        self.session.is_submitting = true;

        if let Err(e) = self
            .sink
            .submit(self.session.role, &self.session.step_data)
            .await
        {
            self.session.is_submitting = false;
            return Err(e);
        }

        self.session.completed_steps = (1..=self.session.total_steps).collect();

        if let Err(e) = self.store.clear(self.session.role).await {
            warn!(session = %self.session_id, role = %self.session.role, "Failed to clear onboarding progress: {e}");
        }

        self.session.is_submitting = false;
        info!(session = %self.session_id, role = %self.session.role, "Onboarding completed");
        Ok(())
    }

    async fn persist(&self) {
        let snapshot = self.session.snapshot();
        if let Err(e) = self.store.save(self.session.role, &snapshot).await {
            warn!(session = %self.session_id, role = %self.session.role, "Failed to save onboarding progress: {e}");
        }
    }
}
