use crate::types::validation_report::ValidationReportType;
use async_graphql::SimpleObject;

/// Normalized contact details of an accepted registration. The password is
/// never sent back.
#[derive(SimpleObject, Debug)]
pub struct RegistrationAccepted {
    pub email: String,
    pub phone_number: String,
    pub report: ValidationReportType,
}
