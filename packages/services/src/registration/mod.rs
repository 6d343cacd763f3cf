pub mod form;
pub mod service;

pub use form::{FormStateError, RegistrationForm, SavedState};
pub use service::{
    Registrar, RegistrationError, RegistrationEvents, RegistrationService, RegistrationSucceeded,
    StubRegistrar, DEFAULT_EVENT_BUFFER,
};
