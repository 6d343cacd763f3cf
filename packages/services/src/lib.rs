pub mod registration;
pub mod validation;

pub use registration::*;
pub use validation::*;
