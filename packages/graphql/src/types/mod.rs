pub mod registration;
pub mod validation_report;
