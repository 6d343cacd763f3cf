use async_graphql::SimpleObject;
use models::{ErrorCode, FieldKey, ValidationReport};

#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct FieldErrorType {
    pub field: FieldKey,
    pub view_key: String,
    pub error_code: ErrorCode,
    /// Stable numeric form of `error_code`; 0 means valid.
    pub code: u8,
}

#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct ValidationReportType {
    /// One entry per form field, in validation order.
    pub fields: Vec<FieldErrorType>,
    pub error_code: ErrorCode,
    pub valid: bool,
}

impl From<ValidationReport> for ValidationReportType {
    fn from(report: ValidationReport) -> Self {
        let fields = report
            .entries()
            .into_iter()
            .map(|(field, error_code)| FieldErrorType {
                field,
                view_key: field.view_key().to_string(),
                error_code,
                code: error_code.code(),
            })
            .collect();

        ValidationReportType {
            fields,
            error_code: report.first_error(),
            valid: report.is_clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_conversion_keeps_all_fields() {
        let report = ValidationReport::new(
            ErrorCode::None,
            ErrorCode::EmptyPhoneNumber,
            ErrorCode::None,
            ErrorCode::PasswordsDoNotMatch,
        );
        let converted = ValidationReportType::from(report);

        assert_eq!(converted.fields.len(), 4);
        assert_eq!(converted.error_code, ErrorCode::EmptyPhoneNumber);
        assert!(!converted.valid);
        assert_eq!(converted.fields[1].view_key, "VIEW_PHONE");
        assert_eq!(converted.fields[1].code, 3);
        assert_eq!(converted.fields[3].field, FieldKey::PasswordConfirmation);
    }
}
