//! Progress indicator contract.
//!
//! Collaborating UIs render one marker per step. The derivation rules come
//! straight from the session: a completed step always shows as completed,
//! even when the user has navigated back onto it.

use serde::{Deserialize, Serialize};

use crate::session::WizardSession;

/// Render state of one step marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepMarkerState {
    Completed,
    Current,
    Upcoming,
}

/// One renderable step marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepMarker {
    /// 1-based step number.
    pub number: u32,
    /// Display name from the role's step table.
    pub title: &'static str,
    pub state: StepMarkerState,
}

/// Derive the marker row for a session.
pub fn progress_markers(session: &WizardSession) -> Vec<StepMarker> {
    session
        .role
        .steps()
        .iter()
        .map(|step| {
            let state = if session.completed_steps.contains(&step.number) {
                StepMarkerState::Completed
            } else if step.number == session.current_step {
                StepMarkerState::Current
            } else {
                StepMarkerState::Upcoming
            };
            StepMarker {
                number: step.number,
                title: step.title,
                state,
            }
        })
        .collect()
}

/// Fraction of steps completed, in `0.0..=1.0`.
pub fn fraction_complete(session: &WizardSession) -> f32 {
    if session.total_steps == 0 {
        return 0.0;
    }
    session.completed_steps.len() as f32 / session.total_steps as f32
}
