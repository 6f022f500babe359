//! Validation utilities for user input

use shared::UserUpdate;

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err("Invalid email format".to_string());
    }

    if parts[0].is_empty() {
        return Err("Invalid email format".to_string());
    }

    if parts[1].is_empty() || !parts[1].contains('.') {
        return Err("Invalid email domain".to_string());
    }

    Ok(())
}

/// Validate a structured update record before dispatch.
///
/// Fields that are present must be non-empty; a present email must be
/// well-formed. Absent fields are fine; they are omitted from the payload.
pub fn validate_user_update(update: &UserUpdate) -> Result<(), String> {
    if let Some(first_name) = &update.first_name {
        if first_name.trim().is_empty() {
            return Err("First name is required".to_string());
        }
    }
    if let Some(last_name) = &update.last_name {
        if last_name.trim().is_empty() {
            return Err("Last name is required".to_string());
        }
    }
    if let Some(email) = &update.email {
        validate_email(email)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_email() {
        assert!(validate_email("eve.holt@reqres.in").is_ok());
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@reqres.in").is_err());
        assert!(validate_email("eve@").is_err());
        assert!(validate_email("eve@nodot").is_err());
        assert!(validate_email("a@b@c.com").is_err());
    }

    #[test]
    fn update_with_blank_name_is_rejected() {
        let update = UserUpdate {
            first_name: Some("  ".to_string()),
            last_name: Some("Holt".to_string()),
            email: Some("eve.holt@reqres.in".to_string()),
        };
        assert!(validate_user_update(&update).is_err());
    }

    #[test]
    fn update_with_absent_fields_is_accepted() {
        let update = UserUpdate {
            first_name: None,
            last_name: None,
            email: None,
        };
        assert!(validate_user_update(&update).is_ok());
    }

    #[test]
    fn full_update_round_trips_validation() {
        let update = UserUpdate {
            first_name: Some("Eve".to_string()),
            last_name: Some("Holt".to_string()),
            email: Some("eve.holt@reqres.in".to_string()),
        };
        assert!(validate_user_update(&update).is_ok());
    }
}
