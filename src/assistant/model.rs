use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::models::validate_sequence;

// Inbound request
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct AssistantRequest {
    /// `{role, content}` objects; elements are not checked.
    #[validate(required, custom = "validate_sequence")]
    pub messages: Option<Value>,
    #[serde(default)]
    pub context: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AssistantResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Value>,
}

impl From<Generation> for AssistantResponse {
    fn from(generation: Generation) -> Self {
        Self {
            success: true,
            message: generation.message,
            usage: generation.usage,
        }
    }
}

/// Reply text and usage metadata unwrapped from a generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    pub message: String,
    pub usage: Option<Value>,
}

// Outbound generateContent body
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String,
}

impl GenerateContentRequest {
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}
