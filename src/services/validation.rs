use chrono::NaiveDate;

use crate::models::catalog::{self, ServiceId};
use crate::models::BookingDraft;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("name is required")]
    MissingName,

    #[error("a valid email address is required")]
    InvalidEmail,

    #[error("unknown service: {0}")]
    UnknownService(String),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("date must be no earlier than {min}")]
    DateTooEarly { min: NaiveDate },

    #[error("invalid time slot: {0}")]
    InvalidTimeSlot(String),

    #[error("slot already booked: {date} {time}")]
    SlotTaken { date: NaiveDate, time: String },
}

/// A draft whose fields all passed validation, with dates and service ids
/// in their typed form.
#[derive(Debug, Clone)]
pub struct ValidatedDraft {
    pub name: String,
    pub email: String,
    pub service: ServiceId,
    pub date: NaiveDate,
    pub time: String,
}

/// Check every draft field against the catalog, the fixed slot set, and
/// the earliest bookable date. Whitespace-only names count as missing.
/// Email is hint-level only, mirroring browser input-type checking.
pub fn validate_draft(
    draft: &BookingDraft,
    min_date: NaiveDate,
) -> Result<ValidatedDraft, ValidationError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }

    let email = draft.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }

    let service = ServiceId::parse(&draft.service)
        .ok_or_else(|| ValidationError::UnknownService(draft.service.clone()))?;

    let date = NaiveDate::parse_from_str(&draft.date, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(draft.date.clone()))?;
    if date < min_date {
        return Err(ValidationError::DateTooEarly { min: min_date });
    }

    if !catalog::is_valid_slot(&draft.time) {
        return Err(ValidationError::InvalidTimeSlot(draft.time.clone()));
    }

    Ok(ValidatedDraft {
        name: name.to_string(),
        email: email.to_string(),
        service,
        date,
        time: draft.time.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn min() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    fn draft() -> BookingDraft {
        BookingDraft {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            service: "treatment".to_string(),
            date: "2025-06-15".to_string(),
            time: "14:00".to_string(),
        }
    }

    #[test]
    fn test_valid_draft() {
        let validated = validate_draft(&draft(), min()).unwrap();
        assert_eq!(validated.service, ServiceId::Treatment);
        assert_eq!(validated.date, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        assert_eq!(validated.time, "14:00");
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut d = draft();
        d.name = "   ".to_string();
        assert_eq!(
            validate_draft(&d, min()).unwrap_err(),
            ValidationError::MissingName
        );
    }

    #[test]
    fn test_email_needs_at_sign() {
        let mut d = draft();
        d.email = "alice.example.com".to_string();
        assert_eq!(
            validate_draft(&d, min()).unwrap_err(),
            ValidationError::InvalidEmail
        );
    }

    #[test]
    fn test_unknown_service() {
        let mut d = draft();
        d.service = "massage".to_string();
        assert!(matches!(
            validate_draft(&d, min()),
            Err(ValidationError::UnknownService(_))
        ));
    }

    #[test]
    fn test_malformed_date() {
        let mut d = draft();
        d.date = "15/06/2025".to_string();
        assert!(matches!(
            validate_draft(&d, min()),
            Err(ValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_date_before_minimum() {
        let mut d = draft();
        d.date = "2025-06-01".to_string();
        assert_eq!(
            validate_draft(&d, min()).unwrap_err(),
            ValidationError::DateTooEarly { min: min() }
        );
    }

    #[test]
    fn test_minimum_date_itself_is_allowed() {
        let mut d = draft();
        d.date = "2025-06-02".to_string();
        assert!(validate_draft(&d, min()).is_ok());
    }

    #[test]
    fn test_off_grid_time_rejected() {
        let mut d = draft();
        d.time = "13:00".to_string();
        assert!(matches!(
            validate_draft(&d, min()),
            Err(ValidationError::InvalidTimeSlot(_))
        ));
    }

    #[test]
    fn test_name_and_email_trimmed() {
        let mut d = draft();
        d.name = "  Alice  ".to_string();
        d.email = " alice@example.com ".to_string();
        let validated = validate_draft(&d, min()).unwrap();
        assert_eq!(validated.name, "Alice");
        assert_eq!(validated.email, "alice@example.com");
    }
}
