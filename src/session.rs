use crate::domain::GenerationResult;
use crate::error::SubmitError;
use crate::generation_client::GenerationClient;
use crate::request::GenerationForm;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// What the generate page shows: a spinner, the last result or the last error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub loading: bool,
    pub result: Option<GenerationResult>,
    pub error: Option<String>,
}

/// Submission state of one user session, kept apart from any rendering.
///
/// Only one submission may be in flight; a second one is refused without
/// touching the network until the first settles.
#[derive(Debug, Default)]
pub struct GenerationSession {
    in_flight: AtomicBool,
    state: Mutex<SessionState>,
}

impl GenerationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn snapshot(&self) -> SessionState {
        self.lock_state().clone()
    }

    // Never held across an await, and a poisoned state is still usable.
    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[tracing::instrument(name = "Session submit", skip_all)]
    pub async fn submit(
        &self,
        client: &GenerationClient,
        form: &GenerationForm,
    ) -> Result<GenerationResult, SubmitError> {
        let _guard = InFlightGuard::acquire(self).ok_or_else(|| {
            tracing::warn!("Rejected a submission while another one is in flight");
            SubmitError::SubmissionInFlight
        })?;

        let outcome = client.submit(form).await;

        let mut state = self.lock_state();
        match &outcome {
            Ok(result) => state.result = Some(result.clone()),
            Err(e) => state.error = Some(e.message()),
        }
        outcome
    }
}

/// Owns the loading phase of one submission. Dropping it, whether the
/// submission settled or its future was cancelled, clears `loading` and the
/// in-flight flag.
#[derive(Debug)]
struct InFlightGuard<'a>(&'a GenerationSession);

impl<'a> InFlightGuard<'a> {
    fn acquire(session: &'a GenerationSession) -> Option<Self> {
        session
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        *session.lock_state() = SessionState {
            loading: true,
            result: None,
            error: None,
        };
        Some(Self(session))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.lock_state().loading = false;
        self.0.in_flight.store(false, Ordering::Release);
    }
}
