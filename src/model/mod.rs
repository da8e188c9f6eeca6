mod contact;
mod submission;
mod validation;

pub use contact::{Contact, Field};
pub use submission::Submission;
pub use validation::{
    FIRST_NAME_MIN_LEN, ValidationError, validate, validate_email, validate_field,
    validate_first_name, validate_last_name,
};
