//! Pure step-sequencing logic.
//!
//! Every navigation intent is expressed as a pure transformation of a
//! [`WizardSession`] so the transition rules can be tested without storage
//! or rendering in the picture. The wizard store applies these and layers
//! persistence on top.

use crate::session::WizardSession;

/// Session after a forward transition.
///
/// Marks the current step completed and moves one step forward. At the last
/// step the input is returned unchanged.
pub fn advanced(session: &WizardSession) -> WizardSession {
    let mut next = session.clone();
    if session.current_step < session.total_steps {
        next.completed_steps.insert(session.current_step);
        next.current_step += 1;
    }
    next
}

/// Session after a backward transition. Unchanged at step 1.
pub fn retreated(session: &WizardSession) -> WizardSession {
    let mut next = session.clone();
    if session.current_step > 1 {
        next.current_step -= 1;
    }
    next
}

/// Session after jumping directly to `target`.
///
/// Out-of-range targets return the input unchanged.
pub fn jumped(session: &WizardSession, target: u32) -> WizardSession {
    let mut next = session.clone();
    if (1..=session.total_steps).contains(&target) {
        next.current_step = target;
    }
    next
}

/// Whether the session has reached and finished its final step.
pub fn is_complete(session: &WizardSession) -> bool {
    session.current_step == session.total_steps
        && session.completed_steps.contains(&session.current_step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;

    fn in_range(session: &WizardSession) -> bool {
        (1..=session.total_steps).contains(&session.current_step)
    }

    #[test]
    fn advance_moves_forward_and_records_completion() {
        let session = WizardSession::new(Role::Student);
        let next = advanced(&session);
        assert_eq!(next.current_step, 2);
        assert!(next.completed_steps.contains(&1));
        assert!(in_range(&next));
    }

    #[test]
    fn advance_is_noop_at_last_step() {
        let mut session = WizardSession::new(Role::Ministry);
        session.current_step = session.total_steps;
        let next = advanced(&session);
        assert_eq!(next, session);
    }

    #[test]
    fn advance_completion_is_idempotent() {
        let mut session = WizardSession::new(Role::Student);
        session.completed_steps.insert(1);
        let next = advanced(&session);
        assert_eq!(next.completed_steps.iter().filter(|&&s| s == 1).count(), 1);
    }

    #[test]
    fn retreat_is_noop_at_first_step() {
        let session = WizardSession::new(Role::Company);
        let next = retreated(&session);
        assert_eq!(next, session);
    }

    #[test]
    fn retreat_moves_back_without_touching_completion() {
        let mut session = WizardSession::new(Role::Company);
        session.current_step = 3;
        session.completed_steps.extend([1, 2]);
        let next = retreated(&session);
        assert_eq!(next.current_step, 2);
        assert_eq!(next.completed_steps, session.completed_steps);
    }

    #[test]
    fn jump_changes_state_iff_target_in_range() {
        let session = WizardSession::new(Role::Student);

        let next = jumped(&session, 4);
        assert_eq!(next.current_step, 4);

        assert_eq!(jumped(&session, 0), session);
        assert_eq!(jumped(&session, 7), session);
    }

    #[test]
    fn walk_full_sequence() {
        let mut session = WizardSession::new(Role::Student);
        for expected in 2..=6 {
            session = advanced(&session);
            assert_eq!(session.current_step, expected);
            assert!(in_range(&session));
        }
        assert_eq!(session.completed_steps.len(), 5);
        assert!(!is_complete(&session));

        session.completed_steps.insert(6);
        assert!(is_complete(&session));
    }

    #[test]
    fn is_complete_requires_final_step_position() {
        let mut session = WizardSession::new(Role::Ministry);
        session.completed_steps.extend([1, 2, 3, 4]);
        session.current_step = 2;
        assert!(!is_complete(&session));

        session.current_step = 4;
        assert!(is_complete(&session));
    }
}
