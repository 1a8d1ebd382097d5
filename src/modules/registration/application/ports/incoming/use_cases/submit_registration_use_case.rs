use async_trait::async_trait;
use regex::Regex;
use std::sync::LazyLock;

use crate::registration::application::domain::entities::{Registration, DEFAULT_LANGUAGE};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile")
});

//
// ──────────────────────────────────────────────────────────
// Raw input
// ──────────────────────────────────────────────────────────
//

/// Form fields exactly as submitted. Any of them may be absent.
#[derive(Debug, Clone, Default)]
pub struct RegistrationInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub level: Option<String>,
    pub plan: Option<String>,
    pub language: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Submit Registration Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRegistrationCommand {
    name: String,
    email: String,
    phone: String,
    level: String,
    plan: String,
    language: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistrationCommandError {
    #[error("All fields are required")]
    MissingFields(Vec<&'static str>),

    #[error("Invalid email format")]
    InvalidEmail,
}

impl SubmitRegistrationCommand {
    /// Presence is checked before the email shape; the first failing stage wins.
    pub fn new(input: RegistrationInput) -> Result<Self, RegistrationCommandError> {
        let RegistrationInput {
            name,
            email,
            phone,
            level,
            plan,
            language,
        } = input;

        let mut missing = Vec::new();
        let name = require("name", name, &mut missing);
        let email = require("email", email, &mut missing);
        let phone = require("phone", phone, &mut missing);
        let level = require("level", level, &mut missing);
        let plan = require("plan", plan, &mut missing);

        let (Some(name), Some(email), Some(phone), Some(level), Some(plan)) =
            (name, email, phone, level, plan)
        else {
            return Err(RegistrationCommandError::MissingFields(missing));
        };

        if !EMAIL_PATTERN.is_match(&email) {
            return Err(RegistrationCommandError::InvalidEmail);
        }

        let language = language
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        Ok(Self {
            name,
            email,
            phone,
            level,
            plan,
            language,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    pub fn plan(&self) -> &str {
        &self.plan
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

fn require(
    field: &'static str,
    value: Option<String>,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    match value {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            missing.push(field);
            None
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitRegistrationError {
    #[error(transparent)]
    InvalidInput(#[from] RegistrationCommandError),

    #[error("Persistence error: {0}")]
    PersistenceError(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SubmitRegistrationUseCase: Send + Sync {
    async fn execute(&self, input: RegistrationInput)
        -> Result<Registration, SubmitRegistrationError>;
}
