//! Client-side checks run before any remote call; failures surface inline
//! and never reach the network.

pub const MIN_PASSWORD_LEN: usize = 8;

pub fn require_non_empty(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{field} is required"))
    } else {
        Ok(())
    }
}

/// Shape check only; the auth backend is the authority on deliverability.
pub fn validate_email(value: &str) -> Result<(), String> {
    let value = value.trim();
    require_non_empty("email", value)?;

    let mut parts = value.split('@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || parts.next().is_some() || !domain.contains('.') {
        return Err("email is not valid".to_string());
    }
    Ok(())
}

pub fn validate_password(value: &str) -> Result<(), String> {
    if value.len() < MIN_PASSWORD_LEN {
        return Err(format!(
            "password must have at least {MIN_PASSWORD_LEN} characters"
        ));
    }
    Ok(())
}

pub fn validate_password_confirmation(password: &str, confirmation: &str) -> Result<(), String> {
    if password != confirmation {
        return Err("password confirmation does not match".to_string());
    }
    Ok(())
}
