//! Raw input coming from the feed's forms, before it is turned
//! into drafts that the stores accept.
use validator::ValidationError;

pub mod comment;
pub mod login;
pub mod post;

/// Rejects text that is empty once surrounding whitespace is removed.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("must not be blank".into());
        Err(error)
    } else {
        Ok(())
    }
}
