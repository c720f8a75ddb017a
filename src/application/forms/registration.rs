use super::FormErrors;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::user::{Email, FirstName};
use serde::Deserialize;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 4096;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub password_repeat: String,
}

#[derive(Debug, Clone)]
pub struct ValidRegistration {
    pub first_name: FirstName,
    pub email: Email,
    pub password: String,
}

impl RegistrationForm {
    pub fn validate(self) -> ApplicationResult<ValidRegistration> {
        let mut errors = FormErrors::new();
        let first_name = errors.capture("first_name", FirstName::new(self.first_name));
        let email = errors.capture("email", Email::new(self.email));
        check_password(&mut errors, &self.password, &self.password_repeat);

        match (first_name, email) {
            (Some(first_name), Some(email)) if errors.is_empty() => Ok(ValidRegistration {
                first_name,
                email,
                password: self.password,
            }),
            _ => Err(ApplicationError::InvalidForm(errors)),
        }
    }
}

fn check_password(errors: &mut FormErrors, password: &str, repeat: &str) {
    let length = password.chars().count();
    if password.is_empty() {
        errors.add("password", "Please enter a password");
    } else if length < MIN_PASSWORD_LENGTH {
        errors.add(
            "password",
            format!("Your password should be at least {MIN_PASSWORD_LENGTH} characters"),
        );
    } else if length > MAX_PASSWORD_LENGTH {
        errors.add(
            "password",
            format!("Your password should be at most {MAX_PASSWORD_LENGTH} characters"),
        );
    }
    if password != repeat {
        errors.add("password", "The password fields must match.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(password: &str, repeat: &str) -> RegistrationForm {
        RegistrationForm {
            first_name: "Grace".into(),
            email: "grace@example.com".into(),
            password: password.into(),
            password_repeat: repeat.into(),
        }
    }

    #[test]
    fn accepts_matching_passwords() {
        let valid = form("secret1", "secret1").validate().unwrap();
        assert_eq!(valid.email.as_str(), "grace@example.com");
        assert_eq!(valid.password, "secret1");
    }

    #[test]
    fn rejects_short_password() {
        let ApplicationError::InvalidForm(errors) = form("abc", "abc").validate().unwrap_err()
        else {
            panic!("expected form errors");
        };
        assert_eq!(
            errors.field("password"),
            ["Your password should be at least 6 characters".to_string()]
        );
    }

    #[test]
    fn rejects_mismatched_repeat() {
        let ApplicationError::InvalidForm(errors) =
            form("secret1", "secret2").validate().unwrap_err()
        else {
            panic!("expected form errors");
        };
        assert!(
            errors
                .field("password")
                .contains(&"The password fields must match.".to_string())
        );
    }
}
