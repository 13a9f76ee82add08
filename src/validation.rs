//! Request payload validation.
//!
//! Schemas are plain immutable objects built once at startup and shared with
//! handlers through app data. Required-ness of fields is already enforced by
//! the typed payloads; the schemas check lengths, ranges and composition, and
//! report every failing field in one error.

use crate::types::card::RCard;
use crate::types::common::Address;
use crate::types::error::AppError;
use crate::types::user::{RLogin, RUser};

const PASSWORD_SYMBOLS: &str = "!@#$%^&*()-_=+{};:,<.>";

#[derive(Debug, Default)]
pub struct Schemas {
    pub user: UserSchema,
    pub card: CardSchema,
    pub login: LoginSchema,
}

impl Schemas {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug)]
pub struct StringRule {
    pub min: usize,
    pub max: Option<usize>,
}

impl StringRule {
    fn min(min: usize) -> Self {
        StringRule { min, max: None }
    }

    fn check(&self, errors: &mut Vec<String>, field: &str, value: &str) {
        let len = value.chars().count();
        if len < self.min {
            errors.push(format!("{field} must be at least {} characters", self.min));
        }
        if let Some(max) = self.max {
            if len > max {
                errors.push(format!("{field} must be at most {max} characters"));
            }
        }
    }

    fn check_opt(&self, errors: &mut Vec<String>, field: &str, value: &Option<String>) {
        if let Some(value) = value {
            self.check(errors, field, value);
        }
    }
}

#[derive(Debug)]
pub struct PasswordRule {
    pub min: usize,
}

impl PasswordRule {
    fn check(&self, errors: &mut Vec<String>, value: &str) {
        if value.chars().count() < self.min {
            errors.push(format!("password must be at least {} characters", self.min));
        }
        if !value.chars().any(|c| c.is_ascii_uppercase()) {
            errors.push("password must contain an uppercase letter".to_string());
        }
        if !value.chars().any(|c| c.is_ascii_lowercase()) {
            errors.push("password must contain a lowercase letter".to_string());
        }
        if !value.chars().any(|c| c.is_ascii_digit()) {
            errors.push("password must contain a digit".to_string());
        }
        if !value.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
            errors.push(format!("password must contain one of {PASSWORD_SYMBOLS}"));
        }
    }
}

fn check_email(errors: &mut Vec<String>, field: &str, value: &str) {
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    let domain_ok = domain.split('.').count() >= 2 && domain.split('.').all(|p| !p.is_empty());
    if local.is_empty() || !domain_ok {
        errors.push(format!("{field} must be a valid email address"));
    }
}

fn finish(errors: Vec<String>) -> Result<(), AppError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors.join("; ")))
    }
}

#[derive(Debug)]
pub struct UserSchema {
    pub name: StringRule,
    pub phone: StringRule,
    pub password: PasswordRule,
    pub address: StringRule,
}

impl Default for UserSchema {
    fn default() -> Self {
        UserSchema {
            name: StringRule::min(2),
            phone: StringRule { min: 4, max: Some(13) },
            password: PasswordRule { min: 8 },
            address: StringRule::min(2),
        }
    }
}

impl UserSchema {
    pub fn validate(&self, payload: &RUser) -> Result<(), AppError> {
        let mut errors = Vec::new();
        self.name.check(&mut errors, "name.first", &payload.name.first);
        self.name.check_opt(&mut errors, "name.middle", &payload.name.middle);
        self.name.check(&mut errors, "name.last", &payload.name.last);
        self.phone.check(&mut errors, "phone", &payload.phone);
        check_email(&mut errors, "email", &payload.email);
        self.password.check(&mut errors, &payload.password);
        check_address(&self.address, &mut errors, &payload.address);
        if payload.user_type.trim().is_empty() {
            errors.push("userType must not be empty".to_string());
        }
        finish(errors)
    }
}

#[derive(Debug)]
pub struct CardSchema {
    pub text: StringRule,
    pub phone: StringRule,
    pub address: StringRule,
}

impl Default for CardSchema {
    fn default() -> Self {
        CardSchema {
            text: StringRule::min(2),
            phone: StringRule { min: 4, max: Some(13) },
            address: StringRule::min(2),
        }
    }
}

impl CardSchema {
    pub fn validate(&self, payload: &RCard) -> Result<(), AppError> {
        let mut errors = Vec::new();
        self.text.check(&mut errors, "title", &payload.title);
        self.text.check(&mut errors, "subtitle", &payload.subtitle);
        self.text.check(&mut errors, "description", &payload.description);
        self.phone.check(&mut errors, "phone", &payload.phone);
        check_email(&mut errors, "email", &payload.email);
        self.text.check_opt(&mut errors, "web", &payload.web);
        check_address(&self.address, &mut errors, &payload.address);
        self.text.check_opt(&mut errors, "address.zip", &payload.address.zip);
        finish(errors)
    }
}

#[derive(Debug)]
pub struct LoginSchema {
    pub password: PasswordRule,
}

impl Default for LoginSchema {
    fn default() -> Self {
        LoginSchema {
            password: PasswordRule { min: 8 },
        }
    }
}

impl LoginSchema {
    pub fn validate(&self, payload: &RLogin) -> Result<(), AppError> {
        let mut errors = Vec::new();
        check_email(&mut errors, "email", &payload.email);
        self.password.check(&mut errors, &payload.password);
        finish(errors)
    }
}

fn check_address(rule: &StringRule, errors: &mut Vec<String>, address: &Address) {
    rule.check_opt(errors, "address.state", &address.state);
    rule.check(errors, "address.country", &address.country);
    rule.check(errors, "address.city", &address.city);
    rule.check(errors, "address.street", &address.street);
    if address.house_number < 0 {
        errors.push("address.houseNumber must not be negative".to_string());
    }
}
