//! Input validation rules.
//!
//! `ValidationRules` is constructed once at startup and shared immutably via
//! application state; handlers call its checks before touching storage. Each
//! check returns a field-specific [`CoreError::Validation`].

use regex::Regex;

use crate::error::CoreError;
use crate::roles::Role;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Compiled validation patterns for the string formats of the domain.
#[derive(Debug)]
pub struct ValidationRules {
    group_id: Regex,
    specialty_code: Regex,
    password: Regex,
    russian_text: Regex,
    username: Regex,
}

impl ValidationRules {
    /// Compile the rule set. The patterns are literals, so this cannot fail
    /// at runtime; it is still constructed explicitly rather than held in a
    /// process-wide static.
    pub fn new() -> Self {
        Self {
            // Cohort year, specialty code, sequence number: 2101-09.03.01-1
            group_id: Regex::new(r"^\d{4}-\d{2}\.\d{2}\.\d{2}-\d{1,6}$").unwrap(),
            specialty_code: Regex::new(r"^\d{2}\.\d{2}\.\d{2}$").unwrap(),
            password: Regex::new(r"^[A-Za-z\d$!%*#?&@]+$").unwrap(),
            russian_text: Regex::new(r"^[а-яА-ЯёЁ\s-]+$").unwrap(),
            username: Regex::new(r"^[a-zA-Z0-9]+$").unwrap(),
        }
    }

    pub fn group_id(&self, value: &str) -> Result<(), CoreError> {
        if self.group_id.is_match(value) {
            Ok(())
        } else {
            Err(CoreError::Validation(format!(
                "group_id '{value}' must match NNNN-NN.NN.NN-N"
            )))
        }
    }

    pub fn specialty_code(&self, value: &str) -> Result<(), CoreError> {
        if self.specialty_code.is_match(value) {
            Ok(())
        } else {
            Err(CoreError::Validation(format!(
                "specialty_code '{value}' must match NN.NN.NN"
            )))
        }
    }

    pub fn password(&self, value: &str) -> Result<(), CoreError> {
        if value.len() < MIN_PASSWORD_LENGTH {
            return Err(CoreError::Validation(format!(
                "password must be at least {MIN_PASSWORD_LENGTH} characters long"
            )));
        }
        if self.password.is_match(value) {
            Ok(())
        } else {
            Err(CoreError::Validation(
                "password may contain latin letters, digits and $!%*#?&@".into(),
            ))
        }
    }

    /// Cyrillic-only text fields: person names, attendance reasons.
    pub fn russian_text(&self, field: &str, value: &str) -> Result<(), CoreError> {
        if self.russian_text.is_match(value) {
            Ok(())
        } else {
            Err(CoreError::Validation(format!(
                "{field} must contain only cyrillic letters"
            )))
        }
    }

    pub fn username(&self, value: &str) -> Result<(), CoreError> {
        if self.username.is_match(value) {
            Ok(())
        } else {
            Err(CoreError::Validation(
                "username must contain only latin letters and digits".into(),
            ))
        }
    }

    /// The exactly-one-link rule tying a user's role to its person row.
    pub fn role_links(
        &self,
        role: Role,
        headman_id: Option<i64>,
        student_id: Option<i64>,
        teacher_id: Option<i64>,
    ) -> Result<(), CoreError> {
        if role.matches_links(headman_id, student_id, teacher_id) {
            Ok(())
        } else {
            Err(CoreError::Validation(format!(
                "role '{role}' requires exactly its own link among headman_id/student_id/teacher_id"
            )))
        }
    }
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_id_pattern() {
        let rules = ValidationRules::new();
        assert!(rules.group_id("2101-09.03.01-1").is_ok());
        assert!(rules.group_id("2101-09.03.01-123456").is_ok());
        assert!(rules.group_id("21-09.03.01-1").is_err());
        assert!(rules.group_id("2101-09.03.01-").is_err());
        assert!(rules.group_id("2101-09.03.01-1234567").is_err());
    }

    #[test]
    fn test_specialty_code_pattern() {
        let rules = ValidationRules::new();
        assert!(rules.specialty_code("09.03.01").is_ok());
        assert!(rules.specialty_code("9.03.01").is_err());
        assert!(rules.specialty_code("09.03.011").is_err());
    }

    #[test]
    fn test_password_rules() {
        let rules = ValidationRules::new();
        assert!(rules.password("Secret#42").is_ok());
        assert!(rules.password("short1").is_err(), "below minimum length");
        assert!(rules.password("пароль123").is_err(), "cyrillic not allowed");
    }

    #[test]
    fn test_russian_text() {
        let rules = ValidationRules::new();
        assert!(rules.russian_text("last_name", "Иванов").is_ok());
        assert!(rules.russian_text("reason", "По болезни").is_ok());
        assert!(rules.russian_text("last_name", "Ivanov").is_err());
    }

    #[test]
    fn test_role_links() {
        let rules = ValidationRules::new();
        assert!(rules.role_links(Role::Student, None, Some(42), None).is_ok());
        assert!(rules.role_links(Role::Student, None, None, None).is_err());
        assert!(rules
            .role_links(Role::Teacher, None, Some(42), Some(1))
            .is_err());
    }
}
