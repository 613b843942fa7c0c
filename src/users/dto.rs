use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

use crate::auth::policy::Role;
use crate::validation::{required, FieldError};

lazy_static! {
    static ref USERNAME_RE: Regex =
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]{2,124}$").expect("username regex compiles");
}

/// Raw user form fields as submitted. Validation produces either a
/// [`NewUser`] / [`UserUpdate`] whose constraints hold, or field errors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub fullname: String,
    pub password: String,
    pub role: Role,
}

/// On update, a blank password field means "keep the stored hash"; a
/// non-blank one must satisfy the strength policy and is re-hashed.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub username: String,
    pub fullname: String,
    pub password: Option<String>,
    pub role: Role,
}

impl UserForm {
    pub fn validate_new(&self) -> Result<NewUser, Vec<FieldError>> {
        let mut errors = self.common_errors();
        if self.password.is_empty() {
            errors.push(FieldError::new("password", "Password is required"));
        } else if let Some(message) = password_strength(&self.password) {
            errors.push(FieldError::new("password", message));
        }
        let role = Role::parse(&self.role);
        if errors.is_empty() {
            if let Some(role) = role {
                return Ok(NewUser {
                    username: self.username.trim().to_string(),
                    fullname: self.fullname.trim().to_string(),
                    password: self.password.clone(),
                    role,
                });
            }
        }
        Err(errors)
    }

    pub fn validate_update(&self) -> Result<UserUpdate, Vec<FieldError>> {
        let mut errors = self.common_errors();
        if !self.password.is_empty() {
            if let Some(message) = password_strength(&self.password) {
                errors.push(FieldError::new("password", message));
            }
        }
        let role = Role::parse(&self.role);
        if errors.is_empty() {
            if let Some(role) = role {
                return Ok(UserUpdate {
                    username: self.username.trim().to_string(),
                    fullname: self.fullname.trim().to_string(),
                    password: (!self.password.is_empty()).then(|| self.password.clone()),
                    role,
                });
            }
        }
        Err(errors)
    }

    fn common_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        required(&mut errors, "username", &self.username, "Username is required");
        let username = self.username.trim();
        if !username.is_empty() && !USERNAME_RE.is_match(username) {
            errors.push(FieldError::new(
                "username",
                "Username must be 3-125 characters: letters, digits, '.', '-' or '_'",
            ));
        }
        required(&mut errors, "fullname", &self.fullname, "Full name is required");
        if Role::parse(&self.role).is_none() {
            errors.push(FieldError::new(
                "role",
                "Role must be either 'USER' or 'ADMIN'",
            ));
        }
        errors
    }
}

/// Password strength policy: at least 8 characters, one ASCII uppercase
/// letter, one digit, one symbol (non-alphanumeric, non-whitespace), and
/// no whitespace anywhere. Returns the first violated rule.
pub fn password_strength(password: &str) -> Option<String> {
    if password.chars().count() < 8 {
        return Some("Password must be at least 8 characters".to_string());
    }
    if password.chars().any(|c| c.is_whitespace()) {
        return Some("Password must not contain whitespace".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Password must contain at least one uppercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must contain at least one digit".to_string());
    }
    if !password
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace())
    {
        return Some("Password must contain at least one symbol".to_string());
    }
    None
}
