//! Calculator form controller.
//!
//! [`CalculatorForm`] owns the form's state for one session and runs the two
//! network operations against a [`CalculatorApi`]:
//!
//! - [`CalculatorForm::submit`]: validate operands, calculate, show result or error
//! - [`CalculatorForm::fetch_history`]: replace the history list
//!
//! A submit cycle goes `Idle → Validating → (ValidationFailed | Submitting) →
//! (Success | BackendError | TransportError) → Idle`. Nothing is retried and
//! in-flight requests cannot be cancelled.
//!
//! Calculation and history have separate loading flags and may be in flight at
//! the same time; each writes only its own fields.

pub mod input;
pub mod state;

pub use input::parse_operand;
pub use state::FormState;

use crate::api::{ApiError, CalculationRequest, CalculatorApi, Operation};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::task::JoinHandle;

/// Shown when an operand does not parse.
pub const VALIDATION_MESSAGE: &str = "Enter numbers";

/// Shown when the calculation service could not be reached.
pub const UNAVAILABLE_MESSAGE: &str = "Server unavailable";

/// Shown when the service rejects a calculation without a message.
pub const FALLBACK_ERROR_MESSAGE: &str = "Error";

/// How one submit cycle ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Backend returned this result.
    Calculated(f64),
    /// An operand did not parse; no request was sent.
    ValidationFailed,
    /// Backend answered with a non-success status; carries the displayed message.
    BackendError(String),
    /// Request never completed or the reply was unusable.
    Unavailable,
}

/// Result of [`CalculatorForm::submit`].
#[derive(Debug)]
pub struct Submission {
    pub outcome: SubmitOutcome,
    /// History fetch started by auto-refresh, if any.
    pub history_refresh: Option<HistoryRefresh>,
}

/// A history fetch running independently of the calculation that triggered it.
#[derive(Debug)]
pub struct HistoryRefresh {
    handle: JoinHandle<usize>,
}

impl HistoryRefresh {
    /// True once the fetch has finished, whatever its outcome.
    pub fn is_settled(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the fetch; returns the number of history items now held.
    pub async fn settled(self) -> usize {
        match self.handle.await {
            Ok(count) => count,
            Err(e) => {
                tracing::error!(error = %e, "History refresh task failed");
                0
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum LoadingFlag {
    Calculate,
    History,
}

/// Holds a loading flag up for its lifetime.
///
/// Dropping clears the flag, so every exit path releases it, including a
/// future dropped mid-request.
struct LoadingGuard {
    state: Arc<RwLock<FormState>>,
    flag: LoadingFlag,
}

impl LoadingGuard {
    fn acquire(state: &Arc<RwLock<FormState>>, flag: LoadingFlag) -> Self {
        set_flag(&mut write_state(state), flag, true);
        Self {
            state: Arc::clone(state),
            flag,
        }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        set_flag(&mut write_state(&self.state), self.flag, false);
    }
}

fn set_flag(state: &mut FormState, flag: LoadingFlag, value: bool) {
    match flag {
        LoadingFlag::Calculate => state.loading = value,
        LoadingFlag::History => state.history_loading = value,
    }
}

// Handlers never panic while holding the lock, so poisoned data is still consistent.
fn read_state(state: &RwLock<FormState>) -> RwLockReadGuard<'_, FormState> {
    state.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_state(state: &RwLock<FormState>) -> RwLockWriteGuard<'_, FormState> {
    state.write().unwrap_or_else(PoisonError::into_inner)
}

/// Session-lived owner of the calculator form.
///
/// Clones share the same state and API client.
pub struct CalculatorForm<A: CalculatorApi> {
    api: Arc<A>,
    state: Arc<RwLock<FormState>>,
}

impl<A: CalculatorApi> Clone for CalculatorForm<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            state: Arc::clone(&self.state),
        }
    }
}

impl<A: CalculatorApi> CalculatorForm<A> {
    pub fn new(api: A) -> Self {
        Self::with_shared_api(Arc::new(api))
    }

    pub fn with_shared_api(api: Arc<A>) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(FormState::default())),
        }
    }

    /// Start with auto-refresh already on or off.
    pub fn with_auto_refresh(self, enabled: bool) -> Self {
        self.set_auto_refresh(enabled);
        self
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> FormState {
        read_state(&self.state).clone()
    }

    pub fn set_number1(&self, text: impl Into<String>) {
        write_state(&self.state).number1 = text.into();
    }

    pub fn set_number2(&self, text: impl Into<String>) {
        write_state(&self.state).number2 = text.into();
    }

    pub fn set_operation(&self, operation: Operation) {
        write_state(&self.state).operation = operation;
    }

    pub fn set_auto_refresh(&self, enabled: bool) {
        write_state(&self.state).auto_refresh = enabled;
    }

    /// Throw away all state, as a new session would.
    pub fn reset(&self) {
        *write_state(&self.state) = FormState::default();
    }

    /// Fill in the fields, then [`submit`](Self::submit).
    pub async fn submit_with(
        &self,
        number1: impl Into<String>,
        number2: impl Into<String>,
        operation: Operation,
    ) -> Submission {
        {
            let mut state = write_state(&self.state);
            state.number1 = number1.into();
            state.number2 = number2.into();
            state.operation = operation;
        }
        self.submit().await
    }

    /// Run one submit cycle on the current fields.
    ///
    /// Result and error are cleared first. If either operand fails to parse
    /// the cycle stops with [`VALIDATION_MESSAGE`] and no request is sent.
    /// On success with auto-refresh on, exactly one history fetch is spawned
    /// on the current tokio runtime and returned as
    /// [`Submission::history_refresh`].
    pub async fn submit(&self) -> Submission {
        let (text1, text2, operation) = {
            let mut state = write_state(&self.state);
            state.result = None;
            state.error = None;
            (state.number1.clone(), state.number2.clone(), state.operation)
        };

        let (number1, number2) = match (parse_operand(&text1), parse_operand(&text2)) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                tracing::debug!(number1 = %text1, number2 = %text2, "Operand validation failed");
                write_state(&self.state).error = Some(VALIDATION_MESSAGE.to_string());
                return Submission {
                    outcome: SubmitOutcome::ValidationFailed,
                    history_refresh: None,
                };
            }
        };

        let _loading = LoadingGuard::acquire(&self.state, LoadingFlag::Calculate);
        let request = CalculationRequest {
            number1,
            number2,
            operation,
        };

        match self.api.calculate(request).await {
            Ok(result) => {
                let auto_refresh = {
                    let mut state = write_state(&self.state);
                    state.result = Some(result);
                    state.auto_refresh
                };
                tracing::info!(number1, number2, %operation, result, "Calculated");
                let history_refresh = auto_refresh.then(|| self.spawn_history_refresh());
                Submission {
                    outcome: SubmitOutcome::Calculated(result),
                    history_refresh,
                }
            }
            Err(ApiError::Backend { status, message }) => {
                let message = message.unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
                tracing::warn!(status, message = %message, "Calculation rejected by backend");
                write_state(&self.state).error = Some(message.clone());
                Submission {
                    outcome: SubmitOutcome::BackendError(message),
                    history_refresh: None,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Calculation service unavailable");
                write_state(&self.state).error = Some(UNAVAILABLE_MESSAGE.to_string());
                Submission {
                    outcome: SubmitOutcome::Unavailable,
                    history_refresh: None,
                }
            }
        }
    }

    /// Replace the history list with the backend's.
    ///
    /// Any failure leaves an empty list and never touches the calculation
    /// error. Returns the number of items now held.
    pub async fn fetch_history(&self) -> usize {
        let _loading = LoadingGuard::acquire(&self.state, LoadingFlag::History);

        let items = match self.api.history().await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(error = %e, "History unavailable, showing empty list");
                Vec::new()
            }
        };

        let count = items.len();
        write_state(&self.state).history = items;
        tracing::debug!(count, "History replaced");
        count
    }

    fn spawn_history_refresh(&self) -> HistoryRefresh {
        let form = self.clone();
        HistoryRefresh {
            handle: tokio::spawn(async move { form.fetch_history().await }),
        }
    }
}
