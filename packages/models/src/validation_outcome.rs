use crate::{ErrorCode, FieldKey};

/// Result of validating one field: the output value (possibly normalized),
/// the field it belongs to, and the error code (`ErrorCode::None` when valid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome<T> {
    pub value: T,
    pub field_key: FieldKey,
    pub error_code: ErrorCode,
}

impl<T> ValidationOutcome<T> {
    pub fn new(value: T, field_key: FieldKey, error_code: ErrorCode) -> Self {
        Self {
            value,
            field_key,
            error_code,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.error_code.is_none()
    }

    pub fn into_value(self) -> T {
        self.value
    }
}
