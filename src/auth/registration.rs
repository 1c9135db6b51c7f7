//! Sign-up form validation.
//!
//! Rules run in form order and the first failure is reported, so the user
//! fixes one field at a time.

use thiserror::Error;

/// Sign-ups are restricted to NUS student mail.
pub const NUS_EMAIL_DOMAIN: &str = "u.nus.edu";

/// Passwords must be strictly longer than this.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Raw values from the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("First Name cannot be empty.")]
    EmptyFirstName,
    #[error("Last Name cannot be empty.")]
    EmptyLastName,
    #[error("Username cannot be empty.")]
    EmptyUsername,
    #[error("Email cannot be empty.")]
    EmptyEmail,
    #[error("Please use a valid email.")]
    InvalidEmail,
    #[error("Please use your NUS email.")]
    NotNusEmail,
    #[error("Password cannot be empty.")]
    EmptyPassword,
    #[error("Password must have more than 8 characters.")]
    PasswordTooShort,
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

impl RegistrationForm {
    /// Check the form, returning the first rule it breaks.
    pub fn validate(&self) -> Result<(), RegistrationError> {
        if self.first_name.is_empty() {
            return Err(RegistrationError::EmptyFirstName);
        }
        if self.last_name.is_empty() {
            return Err(RegistrationError::EmptyLastName);
        }
        if self.username.is_empty() {
            return Err(RegistrationError::EmptyUsername);
        }
        if self.email.is_empty() {
            return Err(RegistrationError::EmptyEmail);
        }
        if !self.email.contains('@') {
            return Err(RegistrationError::InvalidEmail);
        }
        if !self.email.contains(NUS_EMAIL_DOMAIN) {
            return Err(RegistrationError::NotNusEmail);
        }
        if self.password.is_empty() {
            return Err(RegistrationError::EmptyPassword);
        }
        if self.password.chars().count() <= MIN_PASSWORD_LEN {
            return Err(RegistrationError::PasswordTooShort);
        }
        if self.password != self.confirm_password {
            return Err(RegistrationError::PasswordMismatch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            first_name: "Lin".to_string(),
            last_name: "Us".to_string(),
            username: "linus".to_string(),
            email: "e0123456@u.nus.edu".to_string(),
            password: "correct-horse".to_string(),
            confirm_password: "correct-horse".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn test_first_failure_wins() {
        let form = RegistrationForm {
            last_name: String::new(),
            email: String::new(),
            ..valid_form()
        };
        assert_eq!(form.validate(), Err(RegistrationError::EmptyLastName));
    }

    #[test]
    fn test_email_rules() {
        let no_at = RegistrationForm {
            email: "linus.u.nus.edu".to_string(),
            ..valid_form()
        };
        assert_eq!(no_at.validate(), Err(RegistrationError::InvalidEmail));

        let gmail = RegistrationForm {
            email: "linus@gmail.com".to_string(),
            ..valid_form()
        };
        assert_eq!(gmail.validate(), Err(RegistrationError::NotNusEmail));
    }

    #[test]
    fn test_password_rules() {
        let exactly_eight = RegistrationForm {
            password: "12345678".to_string(),
            confirm_password: "12345678".to_string(),
            ..valid_form()
        };
        assert_eq!(
            exactly_eight.validate(),
            Err(RegistrationError::PasswordTooShort)
        );

        let mismatch = RegistrationForm {
            confirm_password: "correct-horsE".to_string(),
            ..valid_form()
        };
        assert_eq!(mismatch.validate(), Err(RegistrationError::PasswordMismatch));

        let empty = RegistrationForm {
            password: String::new(),
            ..valid_form()
        };
        assert_eq!(empty.validate(), Err(RegistrationError::EmptyPassword));
    }

    #[test]
    fn test_messages_match_form_banner() {
        assert_eq!(
            RegistrationError::PasswordTooShort.to_string(),
            "Password must have more than 8 characters."
        );
    }
}
