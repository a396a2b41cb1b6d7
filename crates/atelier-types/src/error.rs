use thiserror::Error;

/// A rejected form submission.
///
/// All problems found in one submission are collected into a single
/// message so the user sees them together.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Human-readable message covering every problem.
    pub message: String,
    /// Labels of blank mandatory fields.
    pub missing: Vec<String>,
    /// One entry per out-of-range or unrecognized value.
    pub invalid: Vec<String>,
}

impl ValidationError {
    /// Build the aggregated error, or `None` when nothing was reported.
    pub fn from_problems(missing: Vec<String>, invalid: Vec<String>) -> Option<Self> {
        if missing.is_empty() && invalid.is_empty() {
            return None;
        }

        let mut parts = Vec::with_capacity(2);
        if !missing.is_empty() {
            parts.push(format!(
                "Please fill in the required fields: {}.",
                missing.join(", ")
            ));
        }
        if !invalid.is_empty() {
            parts.push(format!("Please correct: {}.", invalid.join("; ")));
        }

        Some(Self {
            message: parts.join(" "),
            missing,
            invalid,
        })
    }

    /// Shorthand for a single blank mandatory field.
    pub fn missing(label: &str) -> Self {
        Self {
            message: format!("Please fill in the required fields: {label}."),
            missing: vec![label.to_string()],
            invalid: Vec::new(),
        }
    }
}

/// Errors raised while loading configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing API key: set the {var} environment variable (or add it to .env)")]
    MissingApiKey { var: String },

    #[error("failed to read profile '{path}': {message}")]
    ProfileFile { path: String, message: String },
}
