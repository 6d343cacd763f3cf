use crate::types::validation_report::ValidationReportType;
use async_graphql::SimpleObject;

#[derive(SimpleObject, Debug)]
pub struct ValidationErrorType {
    /// Identifier of the first failing field's error code.
    pub message: String,
    pub report: ValidationReportType,
}
