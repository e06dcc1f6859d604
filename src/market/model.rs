use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::models::validate_sequence;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct PriceRequest {
    /// Coin identifiers, forwarded as-is.
    #[validate(required, custom = "validate_sequence")]
    pub symbols: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PriceResponse {
    pub success: bool,
    pub data: Value,
}

impl PriceResponse {
    pub fn new(data: Value) -> Self {
        Self { success: true, data }
    }
}
