use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email regex"));

const MIN_PASSWORD_LEN: usize = 6;

/// One inline form error, keyed by the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub fn validate_login(input: &LoginInput) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    check_email(&input.email, &mut errors);
    if input.password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_signup(input: &SignupInput) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if input.name.is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
    }
    check_email(&input.email, &mut errors);
    if input.password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    } else if input.password.len() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(
            "password",
            "Password must be at least 6 characters",
        ));
    }
    if input.password != input.confirm_password {
        errors.push(FieldError::new("confirmPassword", "Passwords do not match"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_email(email: &str, errors: &mut Vec<FieldError>) {
    if email.is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !EMAIL_RE.is_match(email) {
        errors.push(FieldError::new("email", "Email is invalid"));
    }
}
