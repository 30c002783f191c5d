use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::brain::{Brief, BriefMetadata};

/// Minimum length of a website idea, in characters, after trimming.
pub const MIN_IDEA_CHARS: usize = 10;
/// Maximum length of a website idea, in characters, after trimming.
pub const MAX_IDEA_CHARS: usize = 1000;

pub const MSG_IDEA_REQUIRED: &str = "Please provide your website idea.";
pub const MSG_IDEA_TOO_SHORT: &str = "Your idea should be at least 10 characters long.";
pub const MSG_IDEA_TOO_LONG: &str = "Please keep your idea under 1000 characters.";

/// Body of `POST /api/prompts/improve`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ImprovePromptRequest {
    /// The user's rough website idea.
    #[serde(default)]
    pub original_prompt: Option<String>,
}

impl ImprovePromptRequest {
    pub fn new(original_prompt: impl Into<String>) -> Self {
        Self {
            original_prompt: Some(original_prompt.into()),
        }
    }

    /// The idea with surrounding whitespace removed (empty if missing).
    pub fn trimmed_prompt(&self) -> &str {
        self.original_prompt.as_deref().map(str::trim).unwrap_or("")
    }
}

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

// Hand-written so each bound gets its own message.
impl Validate for ImprovePromptRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let idea = self.trimmed_prompt();
        let length = idea.chars().count();

        if idea.is_empty() {
            errors.add("original_prompt", rule_error("required", MSG_IDEA_REQUIRED));
        } else if length < MIN_IDEA_CHARS {
            errors.add("original_prompt", rule_error("min", MSG_IDEA_TOO_SHORT));
        } else if length > MAX_IDEA_CHARS {
            errors.add("original_prompt", rule_error("max", MSG_IDEA_TOO_LONG));
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// A prompt record ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewPrompt {
    pub original_prompt: String,
    pub improved_prompt: String,
    pub metadata: BriefMetadata,
}

impl From<Brief> for NewPrompt {
    fn from(brief: Brief) -> Self {
        Self {
            original_prompt: brief.original,
            improved_prompt: brief.document,
            metadata: brief.metadata,
        }
    }
}

/// Represents a stored prompt transformation.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Prompt {
    /// Auto-assigned identifier.
    pub id: i64,
    /// The trimmed idea as submitted.
    pub original_prompt: String,
    /// The rendered project brief.
    pub improved_prompt: String,
    /// Word counts, category and technologies, stored as JSON.
    pub metadata: Json<BriefMetadata>,
    /// Unix timestamp of when the record was created.
    pub created_at: i64,
    /// Unix timestamp of the last update (equal to `created_at`; records are never updated).
    pub updated_at: i64,
}
