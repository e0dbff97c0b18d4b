use crate::error::{RequestError, ValidationError};
use std::fmt::{Debug, Formatter};

/// Everything that can stop a submission from producing a result.
#[derive(thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    ValidationError(#[from] ValidationError),

    #[error(transparent)]
    RequestError(#[from] RequestError),

    #[error("A submission is already in progress.")]
    SubmissionInFlight,
}

impl SubmitError {
    /// The message shown to the user.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

// We are still using a bespoke implementation of `Debug`
// to get a nice report using the error source chain
impl Debug for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}
