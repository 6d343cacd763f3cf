use crate::mutations::input_validators::RegistrationFormInput;
use crate::types::validation_report::ValidationReportType;
use async_graphql::Object;
use services::validation::input_validator::InputValidator;

#[derive(Default)]
pub struct RegistrationQueries;

#[Object]
impl RegistrationQueries {
    /// Validate the registration form without registering.
    async fn validate_registration(&self, input: RegistrationFormInput) -> ValidationReportType {
        input.validate().report.into()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use async_graphql::Request;

    fn validate_query(email: &str, phone: &str, password: &str, confirmation: &str) -> String {
        format!(
            r#"{{ validateRegistration(input: {{ email: "{}", phoneNumber: "{}", password: "{}", passwordConfirmation: "{}" }}) {{
                valid errorCode fields {{ field errorCode }}
            }} }}"#,
            email, phone, password, confirmation
        )
    }

    #[tokio::test]
    async fn test_validate_registration_reports_first_error() {
        let (schema, _events) = create_test_schema();

        let query = validate_query("some@valid.email", "(012) 345 - 67 89 abc", "qwerty", "");
        let res = schema.execute(Request::new(&query)).await;
        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);

        let data = res.data.into_json().unwrap();
        let report = &data["validateRegistration"];
        assert_eq!(report["valid"], false);
        assert_eq!(report["errorCode"], "INVALID_PHONE_NUMBER");
        assert_eq!(report["fields"][0]["errorCode"], "NONE");
        assert_eq!(report["fields"][2]["errorCode"], "PASSWORD_TOO_SHORT");
        assert_eq!(report["fields"][3]["errorCode"], "EMPTY_PASSWORD_CONFIRMATION");
    }

    #[tokio::test]
    async fn test_validate_registration_does_not_register() {
        let (schema, mut events) = create_test_schema();

        let query = validate_query("some@valid.email", "0123456789", "qwerty123456", "qwerty123456");
        let res = schema.execute(Request::new(&query)).await;
        let data = res.data.into_json().unwrap();

        assert_eq!(data["validateRegistration"]["valid"], true);
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert!(events.try_next().is_none());
    }
}
