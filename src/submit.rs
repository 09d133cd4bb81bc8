//! Terminal submission port.
//!
//! When a session completes, the collected records are handed off through
//! [`SubmissionSink`]. Transport (API call, queue, whatever the embedding
//! application wires in) is entirely the implementation's concern; the
//! wizard only needs success or a propagatable failure.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::error::SubmitError;
use crate::role::Role;
use crate::steps::StepRecord;

/// Receives the collected onboarding data when a session completes.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Hand the collected records off for final processing.
    ///
    /// There is no cancellation: callers either await success or observe the
    /// error and may submit again.
    async fn submit(
        &self,
        role: Role,
        data: &BTreeMap<String, StepRecord>,
    ) -> Result<(), SubmitError>;
}

/// Sink that accepts every submission without doing anything.
///
/// Useful as a stand-in while the real endpoint is not wired up.
#[derive(Debug, Default)]
pub struct NullSink;

#[async_trait]
impl SubmissionSink for NullSink {
    async fn submit(
        &self,
        _role: Role,
        _data: &BTreeMap<String, StepRecord>,
    ) -> Result<(), SubmitError> {
        Ok(())
    }
}
