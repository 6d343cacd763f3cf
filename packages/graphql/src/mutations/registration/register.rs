use super::RegistrationMutationResult;
use crate::errors::ValidationErrorType;
use crate::mutations::input_validators::RegistrationFormInput;
use crate::types::registration::RegistrationAccepted;
use crate::types::validation_report::ValidationReportType;
use async_graphql::{Context, Result};
use models::RegistrationInput;
use services::registration::RegistrationService;

pub(super) async fn register(
    ctx: &Context<'_>,
    input: RegistrationFormInput,
) -> Result<RegistrationMutationResult> {
    let service = ctx.data::<RegistrationService>()?;

    let validation = service.on_register(&RegistrationInput::from(input));
    let report = ValidationReportType::from(validation.report);

    match validation.into_record() {
        Some(record) => {
            tracing::info!("register accepted");
            Ok(RegistrationMutationResult::RegistrationAccepted(
                RegistrationAccepted {
                    email: record.email,
                    phone_number: record.phone_number,
                    report,
                },
            ))
        }
        None => {
            tracing::info!(error_code = %report.error_code, "register rejected");
            Ok(RegistrationMutationResult::ValidationError(ValidationErrorType {
                message: report.error_code.to_string(),
                report,
            }))
        }
    }
}
