//! Onboarding wizard engine for the PM Internship platform.
//!
//! One [`wizard::Wizard`] drives a resumable, multi-step data-collection
//! session for a single role (student, company, or ministry official). Step
//! UIs feed validated records in and read the current position back out;
//! forward progress is checkpointed to a per-role key so a reopened session
//! resumes where it left off.

pub mod config;
pub mod error;
pub mod progress;
pub mod role;
pub mod sequencer;
pub mod session;
pub mod steps;
pub mod store;
pub mod submit;
pub mod wizard;

pub use error::{Error, Result, StorageError, SubmitError, ValidationError};
pub use role::Role;
pub use session::{PersistedSnapshot, WizardSession};
pub use steps::StepRecord;
pub use store::{LibSqlProgressStore, MemoryProgressStore, ProgressStore};
pub use submit::{NullSink, SubmissionSink};
pub use wizard::Wizard;
