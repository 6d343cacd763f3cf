use async_graphql::Enum;
use serde::{Deserialize, Serialize};

/// Identifies the form field a validation outcome belongs to.
#[derive(Enum, Serialize, Deserialize, Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldKey {
    Email,
    Phone,
    Password,
    PasswordConfirmation,
    /// Outcome is not tied to a single field (the aggregate result).
    None,
}

impl FieldKey {
    /// The four form fields, in validation order.
    pub const FORM_FIELDS: [FieldKey; 4] = [
        FieldKey::Email,
        FieldKey::Phone,
        FieldKey::Password,
        FieldKey::PasswordConfirmation,
    ];

    pub const fn view_key(self) -> &'static str {
        match self {
            FieldKey::Email => "VIEW_EMAIL",
            FieldKey::Phone => "VIEW_PHONE",
            FieldKey::Password => "VIEW_PASSWORD",
            FieldKey::PasswordConfirmation => "VIEW_PASSWORD_CONFIRMATION",
            FieldKey::None => "VIEW_KEY_NONE",
        }
    }

    pub fn from_view_key(view_key: &str) -> Option<Self> {
        match view_key {
            "VIEW_EMAIL" => Some(FieldKey::Email),
            "VIEW_PHONE" => Some(FieldKey::Phone),
            "VIEW_PASSWORD" => Some(FieldKey::Password),
            "VIEW_PASSWORD_CONFIRMATION" => Some(FieldKey::PasswordConfirmation),
            "VIEW_KEY_NONE" => Some(FieldKey::None),
            _ => None,
        }
    }

    pub const fn is_form_field(self) -> bool {
        !matches!(self, FieldKey::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_fields_exclude_none() {
        assert_eq!(FieldKey::FORM_FIELDS.len(), 4);
        assert!(FieldKey::FORM_FIELDS.iter().all(|key| key.is_form_field()));
        assert!(!FieldKey::None.is_form_field());
    }

    #[test]
    fn test_view_keys() {
        assert_eq!(FieldKey::Phone.view_key(), "VIEW_PHONE");
        assert_eq!(FieldKey::None.view_key(), "VIEW_KEY_NONE");
        assert_eq!(
            FieldKey::from_view_key("VIEW_PASSWORD_CONFIRMATION"),
            Some(FieldKey::PasswordConfirmation)
        );
        assert_eq!(FieldKey::from_view_key("VIEW_USERNAME"), None);
    }
}
