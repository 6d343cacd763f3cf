use async_graphql::Enum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete result of validating a single registration field.
///
/// `None` is the only code meaning "valid". The numeric values are stable and
/// are what a form client keys its message table on.
#[derive(Enum, Serialize, Deserialize, Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum ErrorCode {
    #[default]
    None = 0,
    EmptyEmail = 1,
    InvalidEmail = 2,
    EmptyPhoneNumber = 3,
    InvalidPhoneNumber = 4,
    EmptyPassword = 5,
    PasswordTooShort = 6,
    InvalidPassword = 7,
    EmptyPasswordConfirmation = 8,
    PasswordsDoNotMatch = 9,
}

impl ErrorCode {
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn is_none(self) -> bool {
        matches!(self, ErrorCode::None)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::None => "NONE",
            ErrorCode::EmptyEmail => "EMPTY_EMAIL",
            ErrorCode::InvalidEmail => "INVALID_EMAIL",
            ErrorCode::EmptyPhoneNumber => "EMPTY_PHONE_NUMBER",
            ErrorCode::InvalidPhoneNumber => "INVALID_PHONE_NUMBER",
            ErrorCode::EmptyPassword => "EMPTY_PASSWORD",
            ErrorCode::PasswordTooShort => "PASSWORD_TOO_SHORT",
            ErrorCode::InvalidPassword => "INVALID_PASSWORD",
            ErrorCode::EmptyPasswordConfirmation => "EMPTY_PASSWORD_CONFIRMATION",
            ErrorCode::PasswordsDoNotMatch => "PASSWORDS_DO_NOT_MATCH",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a numeric code does not name any [`ErrorCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownErrorCode(pub u8);

impl fmt::Display for UnknownErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown registration error code {}", self.0)
    }
}

impl std::error::Error for UnknownErrorCode {}

impl TryFrom<u8> for ErrorCode {
    type Error = UnknownErrorCode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::None),
            1 => Ok(ErrorCode::EmptyEmail),
            2 => Ok(ErrorCode::InvalidEmail),
            3 => Ok(ErrorCode::EmptyPhoneNumber),
            4 => Ok(ErrorCode::InvalidPhoneNumber),
            5 => Ok(ErrorCode::EmptyPassword),
            6 => Ok(ErrorCode::PasswordTooShort),
            7 => Ok(ErrorCode::InvalidPassword),
            8 => Ok(ErrorCode::EmptyPasswordConfirmation),
            9 => Ok(ErrorCode::PasswordsDoNotMatch),
            other => Err(UnknownErrorCode(other)),
        }
    }
}
