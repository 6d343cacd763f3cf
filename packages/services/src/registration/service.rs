use crate::validation::{validate_all, RegistrationValidation};
use models::{RegistrationInput, RegistrationRecord};
use std::fmt;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

pub const DEFAULT_EVENT_BUFFER: usize = 16;

/// Zero-payload notification that one registration went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationSucceeded;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    Rejected(String),
    Unavailable(String),
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationError::Rejected(message) => write!(f, "registration rejected: {message}"),
            RegistrationError::Unavailable(message) => {
                write!(f, "registration unavailable: {message}")
            }
        }
    }
}

impl std::error::Error for RegistrationError {}

/// Creates the account for a validated record.
#[cfg_attr(test, mockall::automock)]
pub trait Registrar: Send + Sync {
    fn register(&self, record: &RegistrationRecord) -> Result<(), RegistrationError>;
}

/// Accepts every record without contacting anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubRegistrar;

impl Registrar for StubRegistrar {
    fn register(&self, _record: &RegistrationRecord) -> Result<(), RegistrationError> {
        Ok(())
    }
}

/// Receiving end of the success notifications.
pub struct RegistrationEvents {
    receiver: mpsc::Receiver<RegistrationSucceeded>,
}

impl RegistrationEvents {
    pub async fn next(&mut self) -> Option<RegistrationSucceeded> {
        self.receiver.recv().await
    }

    pub fn try_next(&mut self) -> Option<RegistrationSucceeded> {
        self.receiver.try_recv().ok()
    }
}

#[derive(Clone)]
pub struct RegistrationService {
    registrar: Arc<dyn Registrar>,
    runtime: Handle,
    events: mpsc::Sender<RegistrationSucceeded>,
}

impl RegistrationService {
    /// `runtime` is where the register step is spawned. `buffer` bounds how many
    /// notifications may wait for the observer and must be non-zero.
    pub fn new(
        registrar: Arc<dyn Registrar>,
        runtime: Handle,
        buffer: usize,
    ) -> (Self, RegistrationEvents) {
        let (events, receiver) = mpsc::channel(buffer.max(1));
        (
            Self {
                registrar,
                runtime,
                events,
            },
            RegistrationEvents { receiver },
        )
    }

    pub fn with_stub(runtime: Handle) -> (Self, RegistrationEvents) {
        Self::new(Arc::new(StubRegistrar), runtime, DEFAULT_EVENT_BUFFER)
    }

    /// Validates `input` and, if every field passes, dispatches the register
    /// step without waiting for it. The validation result is returned either
    /// way so the caller can refresh all field errors.
    pub fn on_register(&self, input: &RegistrationInput) -> RegistrationValidation {
        let validation = validate_all(input);

        match &validation.overall.value {
            Some(record) => self.dispatch(record.clone()),
            None => tracing::info!(
                error_code = %validation.error_code(),
                "registration blocked by validation"
            ),
        }

        validation
    }

    fn dispatch(&self, record: RegistrationRecord) {
        let registrar = Arc::clone(&self.registrar);
        let events = self.events.clone();

        self.runtime.spawn(async move {
            if let Err(e) = registrar.register(&record) {
                tracing::warn!(error = %e, "registration failed");
                return;
            }
            tracing::info!("registration success");
            if events.send(RegistrationSucceeded).await.is_err() {
                tracing::warn!("registration succeeded but nobody is listening");
            }
        });
    }
}
