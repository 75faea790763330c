// src/models.rs
use serde::{Deserialize, Serialize};

/// Body of `POST /convert`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ConvertRequest {
    #[serde(default)]
    pub st_code: String,
}

/// Successful reply of `POST /convert`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ConvertResponse {
    pub converted_code: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorResponse {
    pub error: String,
}
