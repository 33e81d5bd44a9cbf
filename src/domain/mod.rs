//! Domain types for stadium records and the rules for accepting them.

pub mod stadium;
pub mod validation;

pub use stadium::{CreateStadiumRequest, Stadium, MAX_CAPACITY, MAX_TEXT_LEN};
pub use validation::{validate_create_payload, FieldError, ValidationErrors};
